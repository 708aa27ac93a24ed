//! Wrap price estimation.
//!
//! Implements the pricing rules behind the instant-quote form. A request
//! carries up to two sections, each priced independently and summed:
//!
//! | Section | Formula |
//! |---------|---------|
//! | Stage wrap | area × stage rate × finish multiplier × height multiplier |
//! | Floor wrap | area × floor rate × matte-black factor × design multiplier |
//! | Floor border | perimeter × border rate × style multiplier × width factor |
//!
//! The market price is the total rounded to a whole currency amount; the
//! vendor price is the *unrounded* total times the vendor factor, rounded on
//! its own. The two roundings are deliberately independent — deriving the
//! vendor price from the rounded market price drifts by ±1 at rounding
//! boundaries.
//!
//! # Skipped sections
//!
//! A section whose dimensions are missing or not positive is skipped
//! outright: it contributes nothing, rather than a zero-area term flowing
//! through the arithmetic. Unset categorical selections never skip anything;
//! they price at their documented fallback tier.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use wrap_core::calculations::Estimator;
//! use wrap_core::models::{EstimateRequest, FloorWrapSpec, RateCard};
//!
//! let request = EstimateRequest {
//!     stage: None,
//!     floor: Some(FloorWrapSpec {
//!         width_ft: dec!(10),
//!         length_ft: dec!(10),
//!         matte_black: false,
//!         design: None,
//!         border: None,
//!     }),
//! };
//!
//! let estimator = Estimator::new(RateCard::default());
//! let estimate = estimator.estimate(&request).unwrap();
//!
//! assert_eq!(estimate.market_price, dec!(400));
//! assert_eq!(estimate.vendor_price, dec!(320));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_to_whole;
use crate::models::{
    EstimateRequest, EstimateResult, FloorWrapSpec, RateCard, RateCardError, StageWrapSpec,
};

/// Height multiplier when no stage height was selected: the tallest tier, so
/// an incomplete form never under-quotes the stage.
const UNSET_HEIGHT_MULTIPLIER: Decimal = dec!(1.6);

/// Finish multiplier when no stage finish was selected (plain white tier).
const UNSET_FINISH_MULTIPLIER: Decimal = Decimal::ONE;

/// Design multiplier when no floor design was selected.
const UNSET_DESIGN_MULTIPLIER: Decimal = Decimal::ONE;

/// Border width factor when a bordered floor has no width selected (4in tier).
const UNSET_BORDER_WIDTH_FACTOR: Decimal = Decimal::ONE;

/// Errors that can occur while computing an estimate.
///
/// A well-formed request never fails; the only failure source is a
/// misconfigured rate card.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error("invalid rate card: {0}")]
    InvalidRateCard(#[from] RateCardError),
}

/// Calculator for wrap installation estimates.
///
/// Holds the pricing parameters and derives market and vendor prices from an
/// [`EstimateRequest`]. The calculation is pure: the request is never
/// mutated, nothing is read from the environment, and identical requests
/// always produce identical results.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    rate_card: RateCard,
}

impl Estimator {
    /// Creates an estimator with the given pricing parameters.
    ///
    /// Use `Estimator::default()` for the production rate card.
    pub fn new(rate_card: RateCard) -> Self {
        Self { rate_card }
    }

    /// Computes an estimate for the given request.
    ///
    /// Each section is priced only when its dimensions are positive; a
    /// skipped section is logged and contributes nothing. The border is
    /// priced only on a floor that itself priced.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError`] if the rate card fails validation.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use wrap_core::calculations::Estimator;
    /// use wrap_core::models::{
    ///     EstimateRequest, RateCard, StageFinish, StageHeight, StageWrapSpec,
    /// };
    ///
    /// let request = EstimateRequest {
    ///     stage: Some(StageWrapSpec {
    ///         width_ft: dec!(10),
    ///         length_ft: dec!(10),
    ///         height: Some(StageHeight::FiveFt),
    ///         finish: Some(StageFinish::FullPrint),
    ///     }),
    ///     floor: None,
    /// };
    ///
    /// let estimate = Estimator::new(RateCard::default())
    ///     .estimate(&request)
    ///     .unwrap();
    ///
    /// // 100 ft² × $5 × 1.5 (full print) × 1.4 (5ft) = $1050
    /// assert_eq!(estimate.market_price, dec!(1050));
    /// assert_eq!(estimate.vendor_price, dec!(840));
    /// ```
    pub fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResult, EstimateError> {
        self.rate_card.validate()?;

        let stage_subtotal = match &request.stage {
            Some(spec) if dimensions_priceable(spec.width_ft, spec.length_ft) => {
                self.stage_subtotal(spec)
            }
            Some(spec) => {
                warn!(
                    width_ft = %spec.width_ft,
                    length_ft = %spec.length_ft,
                    "stage dimensions are not positive; stage not priced"
                );
                Decimal::ZERO
            }
            None => Decimal::ZERO,
        };

        let (floor_subtotal, border_subtotal) = match &request.floor {
            Some(spec) if dimensions_priceable(spec.width_ft, spec.length_ft) => {
                (self.floor_subtotal(spec), self.border_subtotal(spec))
            }
            Some(spec) => {
                warn!(
                    width_ft = %spec.width_ft,
                    length_ft = %spec.length_ft,
                    "floor dimensions are not positive; floor and border not priced"
                );
                (Decimal::ZERO, Decimal::ZERO)
            }
            None => (Decimal::ZERO, Decimal::ZERO),
        };

        let total = stage_subtotal + floor_subtotal + border_subtotal;

        // Subtotals are normalized so serialized output reads 216, not 216.00.
        Ok(EstimateResult {
            stage_subtotal: stage_subtotal.normalize(),
            floor_subtotal: floor_subtotal.normalize(),
            border_subtotal: border_subtotal.normalize(),
            market_price: round_to_whole(total),
            vendor_price: round_to_whole(total * self.rate_card.vendor_price_factor),
        })
    }

    /// Prices the stage wrap: area at the stage rate, scaled by finish and
    /// height. Dimensions were already checked by the caller.
    fn stage_subtotal(&self, spec: &StageWrapSpec) -> Decimal {
        let area = spec.width_ft * spec.length_ft;
        let finish_multiplier = spec
            .finish
            .map_or(UNSET_FINISH_MULTIPLIER, |f| f.price_multiplier());
        let height_multiplier = spec
            .height
            .map_or(UNSET_HEIGHT_MULTIPLIER, |h| h.price_multiplier());

        area * self.rate_card.stage_rate_per_sqft * finish_multiplier * height_multiplier
    }

    /// Prices the floor wrap surface: area at the floor rate, scaled by the
    /// matte black surcharge and the design multiplier.
    fn floor_subtotal(&self, spec: &FloorWrapSpec) -> Decimal {
        let area = spec.width_ft * spec.length_ft;
        let mut base = area * self.rate_card.floor_rate_per_sqft;
        if spec.matte_black {
            base *= self.rate_card.matte_black_factor;
        }
        let design_multiplier = spec
            .design
            .map_or(UNSET_DESIGN_MULTIPLIER, |d| d.price_multiplier());

        base * design_multiplier
    }

    /// Prices the optional border along the floor perimeter, independently of
    /// the floor area term.
    fn border_subtotal(&self, spec: &FloorWrapSpec) -> Decimal {
        let Some(border) = spec.border else {
            return Decimal::ZERO;
        };

        let perimeter = dec!(2) * (spec.width_ft + spec.length_ft);
        let width_factor = border
            .width
            .map_or(UNSET_BORDER_WIDTH_FACTOR, |w| w.size_factor());

        perimeter
            * self.rate_card.border_rate_per_linear_ft
            * border.style.price_multiplier()
            * width_factor
    }
}

/// A section prices only when both of its dimensions are positive.
fn dimensions_priceable(width_ft: Decimal, length_ft: Decimal) -> bool {
    width_ft > Decimal::ZERO && length_ft > Decimal::ZERO
}
