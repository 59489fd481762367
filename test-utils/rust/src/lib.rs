pub mod builder;
pub mod core;
pub mod errors;
pub mod helpers;

mod internal;

pub mod prelude {
    pub use crate::builder::{ProgramArtifact, VmBuilder};
    pub use crate::core::{AccountManager, Vm};
    pub use crate::errors::*;
    pub use crate::helpers::{
        AccountsSnapshot, Assertions, BaseFixture, ExpectRevertExt, ExpectRevertResultExt,
        RevertInfo, VmAccess,
    };
    pub use crate::internal::{get_compute_units, program_compute_units};

    pub use solana_sdk::{
        pubkey::Pubkey,
        signature::{Keypair, Signer},
        system_program,
    };

    pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
}

pub use core::Vm;
pub use errors::{Result, VmError};
