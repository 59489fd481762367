use thiserror::Error;

pub type Result<T> = std::result::Result<T, VmError>;

/// Failures surfaced by the LiteSVM harness
#[derive(Error, Debug)]
pub enum VmError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Failed to set account: {0}")]
    SetAccountFailed(String),

    #[error("Airdrop failed: {0}")]
    AirdropFailed(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Program deployment failed: {0}")]
    DeploymentFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),

    #[error("No signers provided")]
    NoSigners,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Custom error: {0}")]
    Custom(String),

    #[error("Program not found: {0}")]
    ProgramNotFound(String),
}
