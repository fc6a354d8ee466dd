//! Application services — one module per use-case.

pub mod deploy;
pub mod sequence;
pub mod unit;
