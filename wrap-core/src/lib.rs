pub mod calculations;
pub mod models;

pub use calculations::{EstimateError, Estimator};
pub use models::*;
