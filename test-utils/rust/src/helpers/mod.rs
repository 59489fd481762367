//! Testing helpers and utilities

pub mod assertions;
pub mod fixtures;

pub use assertions::{
    AccountsSnapshot, Assertions, ExpectRevertExt, ExpectRevertResultExt, RevertInfo, VmAccess,
};
pub use fixtures::BaseFixture;
