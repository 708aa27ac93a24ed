use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageHeight {
    ThreeFt,
    FourFt,
    FiveFt,
    SixFt,
}

impl StageHeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeFt => "3ft",
            Self::FourFt => "4ft",
            Self::FiveFt => "5ft",
            Self::SixFt => "6ft",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "3ft" => Some(Self::ThreeFt),
            "4ft" => Some(Self::FourFt),
            "5ft" => Some(Self::FiveFt),
            "6ft" => Some(Self::SixFt),
            _ => None,
        }
    }

    /// Taller stages take more material and rigging time.
    pub fn price_multiplier(&self) -> Decimal {
        match self {
            Self::ThreeFt => Decimal::ONE,
            Self::FourFt => dec!(1.2),
            Self::FiveFt => dec!(1.4),
            Self::SixFt => dec!(1.6),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageFinish {
    White,
    MettleBlack,
    FullPrint,
}

impl StageFinish {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::MettleBlack => "mettleBlack",
            Self::FullPrint => "fullPrint",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "white" => Some(Self::White),
            "mettleBlack" => Some(Self::MettleBlack),
            "fullPrint" => Some(Self::FullPrint),
            _ => None,
        }
    }

    pub fn price_multiplier(&self) -> Decimal {
        match self {
            Self::White => Decimal::ONE,
            Self::MettleBlack => dec!(1.3),
            Self::FullPrint => dec!(1.5),
        }
    }
}

/// A stage wrap as described by the quote form. `height` and `finish` stay
/// `None` when the customer left the selection blank; the estimator prices
/// those through its documented fallback tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageWrapSpec {
    pub width_ft: Decimal,
    pub length_ft: Decimal,
    pub height: Option<StageHeight>,
    pub finish: Option<StageFinish>,
}
