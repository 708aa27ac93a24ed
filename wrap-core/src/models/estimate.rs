use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::floor::FloorWrapSpec;
use super::stage::StageWrapSpec;

/// One quote's worth of input, assembled fresh per calculation by the form
/// layer. A section left `None` contributes nothing to the total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub stage: Option<StageWrapSpec>,
    pub floor: Option<FloorWrapSpec>,
}

/// A computed estimate. Prices are whole currency amounts; the subtotals are
/// the unrounded per-section figures kept for display transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Stage wrap contribution before rounding.
    pub stage_subtotal: Decimal,

    /// Floor wrap area contribution before rounding.
    pub floor_subtotal: Decimal,

    /// Border contribution before rounding, priced per linear foot of
    /// perimeter independently of the floor area term.
    pub border_subtotal: Decimal,

    /// Customer-facing price, rounded from the raw total.
    pub market_price: Decimal,

    /// Wholesale reference price, rounded from the raw total times the vendor
    /// factor. Rounded independently of `market_price`, never derived from it.
    pub vendor_price: Decimal,
}
