pub mod context;
pub mod seeds;
pub mod state;

pub use context::*;
pub use seeds::*;
pub use state::*;
