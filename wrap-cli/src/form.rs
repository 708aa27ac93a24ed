//! The form-collection layer: raw string field values in, typed
//! [`EstimateRequest`] out.
//!
//! Field gating follows the quote form exactly: a dimension field that is
//! empty, malformed, or not positive leaves its whole section unpriced — an
//! explicit skip, never a zero-area term. Categorical fields that hold an
//! unknown token come through as `None`, which the estimator prices at its
//! fallback tier.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;
use wrap_core::models::{
    BorderStyle, BorderTrim, BorderWidth, DesignPattern, EstimateRequest, FloorWrapSpec,
    StageFinish, StageHeight, StageWrapSpec,
};

/// Raw values as collected from the quote form, before any parsing.
///
/// Defaults mirror the form's initial state: stage requested, no matte
/// black, no border, 4in border width.
#[derive(Debug, Clone)]
pub struct EstimateForm {
    pub has_stage: String,
    pub stage_width: String,
    pub stage_length: String,
    pub stage_height: String,
    pub stage_finish: String,
    pub floor_width: String,
    pub floor_length: String,
    pub matte_black: String,
    pub design_type: String,
    pub border_type: String,
    pub border_width: String,
}

impl Default for EstimateForm {
    fn default() -> Self {
        Self {
            has_stage: "yes".to_string(),
            stage_width: String::new(),
            stage_length: String::new(),
            stage_height: String::new(),
            stage_finish: String::new(),
            floor_width: String::new(),
            floor_length: String::new(),
            matte_black: "no".to_string(),
            design_type: String::new(),
            border_type: "none".to_string(),
            border_width: "4in".to_string(),
        }
    }
}

impl EstimateForm {
    /// Assembles the typed request the estimator consumes.
    pub fn to_request(&self) -> EstimateRequest {
        EstimateRequest {
            stage: self.stage_spec(),
            floor: self.floor_spec(),
        }
    }

    fn stage_spec(&self) -> Option<StageWrapSpec> {
        if self.has_stage != "yes" {
            return None;
        }
        let width_ft = parse_dimension(&self.stage_width)?;
        let length_ft = parse_dimension(&self.stage_length)?;

        Some(StageWrapSpec {
            width_ft,
            length_ft,
            height: StageHeight::parse(&self.stage_height),
            finish: StageFinish::parse(&self.stage_finish),
        })
    }

    fn floor_spec(&self) -> Option<FloorWrapSpec> {
        let width_ft = parse_dimension(&self.floor_width)?;
        let length_ft = parse_dimension(&self.floor_length)?;

        Some(FloorWrapSpec {
            width_ft,
            length_ft,
            matte_black: self.matte_black == "yes",
            design: DesignPattern::parse(&self.design_type),
            border: self.border_trim(),
        })
    }

    fn border_trim(&self) -> Option<BorderTrim> {
        // "none" and anything unrecognized both mean a borderless floor.
        let style = BorderStyle::parse(&self.border_type)?;
        Some(BorderTrim {
            style,
            width: BorderWidth::parse(&self.border_width),
        })
    }
}

/// Parses one dimension field.
///
/// Returns `None` for empty, non-numeric, or non-positive values so the
/// owning section is skipped rather than priced at zero area. `Decimal`
/// cannot hold NaN or infinity, so anything that parses is finite.
pub fn parse_dimension(field: &str) -> Option<Decimal> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Decimal::from_str(trimmed) {
        Ok(value) if value > Decimal::ZERO => Some(value),
        _ => {
            debug!(field = trimmed, "not a positive dimension; section unpriced");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn filled_form() -> EstimateForm {
        EstimateForm {
            has_stage: "yes".to_string(),
            stage_width: "10".to_string(),
            stage_length: "10".to_string(),
            stage_height: "5ft".to_string(),
            stage_finish: "fullPrint".to_string(),
            floor_width: "12".to_string(),
            floor_length: "10".to_string(),
            matte_black: "yes".to_string(),
            design_type: "chrome12x12".to_string(),
            border_type: "chromeGold".to_string(),
            border_width: "6in".to_string(),
        }
    }

    // =========================================================================
    // parse_dimension
    // =========================================================================

    #[test]
    fn parse_dimension_accepts_positive_numbers() {
        assert_eq!(parse_dimension("10"), Some(dec!(10)));
        assert_eq!(parse_dimension("10.5"), Some(dec!(10.5)));
        assert_eq!(parse_dimension("  7 "), Some(dec!(7)));
    }

    #[test]
    fn parse_dimension_rejects_empty_field() {
        assert_eq!(parse_dimension(""), None);
        assert_eq!(parse_dimension("   "), None);
    }

    #[test]
    fn parse_dimension_rejects_non_numeric_field() {
        assert_eq!(parse_dimension("abc"), None);
        assert_eq!(parse_dimension("10ft"), None);
    }

    #[test]
    fn parse_dimension_rejects_zero_and_negative() {
        assert_eq!(parse_dimension("0"), None);
        assert_eq!(parse_dimension("-3"), None);
    }

    // =========================================================================
    // Section gating
    // =========================================================================

    #[test]
    fn untouched_form_yields_empty_request() {
        let request = EstimateForm::default().to_request();

        assert_eq!(request, EstimateRequest::default());
    }

    #[test]
    fn filled_form_assembles_both_sections() {
        let request = filled_form().to_request();

        let stage = request.stage.expect("stage should be priced");
        assert_eq!(stage.width_ft, dec!(10));
        assert_eq!(stage.height, Some(StageHeight::FiveFt));
        assert_eq!(stage.finish, Some(StageFinish::FullPrint));

        let floor = request.floor.expect("floor should be priced");
        assert_eq!(floor.length_ft, dec!(10));
        assert!(floor.matte_black);
        assert_eq!(floor.design, Some(DesignPattern::Chrome12x12));
        assert_eq!(
            floor.border,
            Some(BorderTrim {
                style: BorderStyle::ChromeGold,
                width: Some(BorderWidth::SixIn),
            })
        );
    }

    #[test]
    fn stage_declined_skips_a_fully_filled_stage() {
        let form = EstimateForm {
            has_stage: "no".to_string(),
            ..filled_form()
        };

        let request = form.to_request();

        assert_eq!(request.stage, None);
        assert!(request.floor.is_some());
    }

    #[test]
    fn malformed_stage_width_leaves_stage_unpriced() {
        let form = EstimateForm {
            stage_width: "wide".to_string(),
            ..filled_form()
        };

        assert_eq!(form.to_request().stage, None);
    }

    #[test]
    fn missing_floor_length_leaves_floor_unpriced() {
        let form = EstimateForm {
            floor_length: String::new(),
            ..filled_form()
        };

        let request = form.to_request();

        assert_eq!(request.floor, None);
        assert!(request.stage.is_some());
    }

    // =========================================================================
    // Categorical fallbacks
    // =========================================================================

    #[test]
    fn unknown_height_token_comes_through_unset() {
        let form = EstimateForm {
            stage_height: "9ft".to_string(),
            ..filled_form()
        };

        let stage = form.to_request().stage.unwrap();

        assert_eq!(stage.height, None);
    }

    #[test]
    fn border_type_none_means_borderless() {
        let form = EstimateForm {
            border_type: "none".to_string(),
            ..filled_form()
        };

        let floor = form.to_request().floor.unwrap();

        assert_eq!(floor.border, None);
    }

    #[test]
    fn unknown_border_width_prices_as_unset() {
        let form = EstimateForm {
            border_width: "8in".to_string(),
            ..filled_form()
        };

        let floor = form.to_request().floor.unwrap();

        assert_eq!(floor.border.unwrap().width, None);
    }
}
