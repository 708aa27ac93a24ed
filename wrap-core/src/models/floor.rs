use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Design applied to the floor wrap surface.
///
/// The quote form historically classified these by substring ("print" before
/// "chrome", with the full print beating the generic print bucket by an
/// equality check). That precedence is a pricing rule, so it is written out
/// here as an exhaustive match instead of string inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignPattern {
    Print10x10,
    Print12x12,
    Print15x15,
    FullPrint,
    NoDesign,
    Chrome10x10,
    Chrome12x12,
    Chrome15x15,
}

impl DesignPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Print10x10 => "print10x10",
            Self::Print12x12 => "print12x12",
            Self::Print15x15 => "print15x15",
            Self::FullPrint => "fullPrint",
            Self::NoDesign => "noDesign",
            Self::Chrome10x10 => "chrome10x10",
            Self::Chrome12x12 => "chrome12x12",
            Self::Chrome15x15 => "chrome15x15",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "print10x10" => Some(Self::Print10x10),
            "print12x12" => Some(Self::Print12x12),
            "print15x15" => Some(Self::Print15x15),
            "fullPrint" => Some(Self::FullPrint),
            "noDesign" => Some(Self::NoDesign),
            "chrome10x10" => Some(Self::Chrome10x10),
            "chrome12x12" => Some(Self::Chrome12x12),
            "chrome15x15" => Some(Self::Chrome15x15),
            _ => None,
        }
    }

    /// Full print outranks the fixed print patterns; chrome patterns sit
    /// between the two; no design leaves the base rate untouched.
    pub fn price_multiplier(&self) -> Decimal {
        match self {
            Self::FullPrint => dec!(1.5),
            Self::Print10x10 | Self::Print12x12 | Self::Print15x15 => dec!(1.3),
            Self::Chrome10x10 | Self::Chrome12x12 | Self::Chrome15x15 => dec!(1.4),
            Self::NoDesign => Decimal::ONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderStyle {
    ChromeGold,
    ChromeSilver,
    GlossBlack,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChromeGold => "chromeGold",
            Self::ChromeSilver => "chromeSilver",
            Self::GlossBlack => "glossBlack",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "chromeGold" => Some(Self::ChromeGold),
            "chromeSilver" => Some(Self::ChromeSilver),
            "glossBlack" => Some(Self::GlossBlack),
            _ => None,
        }
    }

    pub fn price_multiplier(&self) -> Decimal {
        match self {
            Self::ChromeGold => dec!(1.5),
            Self::ChromeSilver => dec!(1.4),
            Self::GlossBlack => dec!(1.3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderWidth {
    FourIn,
    SixIn,
}

impl BorderWidth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FourIn => "4in",
            Self::SixIn => "6in",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "4in" => Some(Self::FourIn),
            "6in" => Some(Self::SixIn),
            _ => None,
        }
    }

    pub fn size_factor(&self) -> Decimal {
        match self {
            Self::FourIn => Decimal::ONE,
            Self::SixIn => dec!(1.2),
        }
    }
}

/// An optional border running the floor perimeter. "No border" is the absence
/// of a `BorderTrim` on the floor spec, mirroring the form's `none` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderTrim {
    pub style: BorderStyle,
    /// `None` prices at the narrow (4in) tier.
    pub width: Option<BorderWidth>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorWrapSpec {
    pub width_ft: Decimal,
    pub length_ft: Decimal,
    pub matte_black: bool,
    pub design: Option<DesignPattern>,
    pub border: Option<BorderTrim>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn design_tokens_round_trip() {
        for design in [
            DesignPattern::Print10x10,
            DesignPattern::Print12x12,
            DesignPattern::Print15x15,
            DesignPattern::FullPrint,
            DesignPattern::NoDesign,
            DesignPattern::Chrome10x10,
            DesignPattern::Chrome12x12,
            DesignPattern::Chrome15x15,
        ] {
            assert_eq!(DesignPattern::parse(design.as_str()), Some(design));
        }
    }

    #[test]
    fn full_print_outranks_fixed_print_patterns() {
        assert_eq!(DesignPattern::FullPrint.price_multiplier(), dec!(1.5));
        assert_eq!(DesignPattern::Print10x10.price_multiplier(), dec!(1.3));
        assert_eq!(DesignPattern::Print12x12.price_multiplier(), dec!(1.3));
        assert_eq!(DesignPattern::Print15x15.price_multiplier(), dec!(1.3));
    }

    #[test]
    fn chrome_patterns_share_one_multiplier() {
        assert_eq!(DesignPattern::Chrome10x10.price_multiplier(), dec!(1.4));
        assert_eq!(DesignPattern::Chrome12x12.price_multiplier(), dec!(1.4));
        assert_eq!(DesignPattern::Chrome15x15.price_multiplier(), dec!(1.4));
    }

    #[test]
    fn no_design_keeps_base_rate() {
        assert_eq!(DesignPattern::NoDesign.price_multiplier(), dec!(1.0));
    }

    #[test]
    fn design_rejects_unknown_token() {
        assert_eq!(DesignPattern::parse("marble"), None);
        assert_eq!(DesignPattern::parse(""), None);
    }

    #[test]
    fn border_style_none_is_not_a_style() {
        // The form sends "none" for a borderless floor; it must not parse.
        assert_eq!(BorderStyle::parse("none"), None);
    }

    #[test]
    fn border_style_multipliers_match_rate_table() {
        assert_eq!(BorderStyle::ChromeGold.price_multiplier(), dec!(1.5));
        assert_eq!(BorderStyle::ChromeSilver.price_multiplier(), dec!(1.4));
        assert_eq!(BorderStyle::GlossBlack.price_multiplier(), dec!(1.3));
    }

    #[test]
    fn border_width_size_factors() {
        assert_eq!(BorderWidth::FourIn.size_factor(), dec!(1.0));
        assert_eq!(BorderWidth::SixIn.size_factor(), dec!(1.2));
    }
}
