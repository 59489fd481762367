//! Internal implementation details

pub mod compute;
pub mod conversions;

pub use compute::{get_compute_units, program_compute_units};
