//! Mathematical utilities: closed-form least squares and decimal rounding.

pub mod ols;
pub mod round;

pub use ols::*;
pub use round::*;
