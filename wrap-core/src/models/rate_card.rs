use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by [`RateCard::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateCardError {
    #[error("stage rate must be positive, got {0}")]
    InvalidStageRate(Decimal),

    #[error("floor rate must be positive, got {0}")]
    InvalidFloorRate(Decimal),

    #[error("border rate must be positive, got {0}")]
    InvalidBorderRate(Decimal),

    #[error("matte black factor must be at least 1, got {0}")]
    InvalidMatteBlackFactor(Decimal),

    #[error("vendor price factor must be between 0 and 1, got {0}")]
    InvalidVendorPriceFactor(Decimal),
}

/// Pricing parameters for the estimator.
///
/// `Default` carries the production rates: $5/ft² for stage wraps, $4/ft² for
/// floor wraps, $3 per linear foot of border, a 1.2 surcharge factor for the
/// matte black finish, and a vendor (wholesale) price at 80% of market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    /// Base stage wrap rate per square foot.
    pub stage_rate_per_sqft: Decimal,

    /// Base floor wrap rate per square foot.
    pub floor_rate_per_sqft: Decimal,

    /// Border rate per linear foot of floor perimeter.
    pub border_rate_per_linear_ft: Decimal,

    /// Surcharge factor applied to the floor base when the wrap is matte black.
    pub matte_black_factor: Decimal,

    /// Vendor price as a fraction of the market price.
    pub vendor_price_factor: Decimal,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            stage_rate_per_sqft: dec!(5),
            floor_rate_per_sqft: dec!(4),
            border_rate_per_linear_ft: dec!(3),
            matte_black_factor: dec!(1.2),
            vendor_price_factor: dec!(0.8),
        }
    }
}

impl RateCard {
    /// Validates the pricing parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RateCardError`] if:
    /// - any per-unit rate is zero or negative
    /// - `matte_black_factor` is below 1 (it is a surcharge, never a discount)
    /// - `vendor_price_factor` is not in (0, 1]
    pub fn validate(&self) -> Result<(), RateCardError> {
        if self.stage_rate_per_sqft <= Decimal::ZERO {
            return Err(RateCardError::InvalidStageRate(self.stage_rate_per_sqft));
        }
        if self.floor_rate_per_sqft <= Decimal::ZERO {
            return Err(RateCardError::InvalidFloorRate(self.floor_rate_per_sqft));
        }
        if self.border_rate_per_linear_ft <= Decimal::ZERO {
            return Err(RateCardError::InvalidBorderRate(
                self.border_rate_per_linear_ft,
            ));
        }
        if self.matte_black_factor < Decimal::ONE {
            return Err(RateCardError::InvalidMatteBlackFactor(
                self.matte_black_factor,
            ));
        }
        if self.vendor_price_factor <= Decimal::ZERO || self.vendor_price_factor > Decimal::ONE {
            return Err(RateCardError::InvalidVendorPriceFactor(
                self.vendor_price_factor,
            ));
        }
        Ok(())
    }
}
