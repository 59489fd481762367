pub mod errors;
pub mod math;
pub mod native;
pub mod pda;
pub mod structs;
