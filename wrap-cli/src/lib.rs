pub mod currency;
pub mod form;
