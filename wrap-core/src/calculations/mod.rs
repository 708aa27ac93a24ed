//! Price estimation for stage and floor wrap installations.
//!
//! This module holds the arithmetic behind the quote form: shared rounding
//! helpers and the estimator that turns a request into market and vendor
//! prices.

pub mod common;
pub mod estimator;

pub use estimator::{EstimateError, Estimator};
