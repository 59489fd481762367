//! Vault program tests
//!
//! Integration suites driving the compiled vault program on LiteSVM.


mod base_test;
mod deposit_test;
