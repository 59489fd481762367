pub mod balance;
pub mod validate;
