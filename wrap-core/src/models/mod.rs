mod estimate;
mod floor;
mod rate_card;
mod stage;

pub use estimate::{EstimateRequest, EstimateResult};
pub use floor::{BorderStyle, BorderTrim, BorderWidth, DesignPattern, FloorWrapSpec};
pub use rate_card::{RateCard, RateCardError};
pub use stage::{StageFinish, StageHeight, StageWrapSpec};
