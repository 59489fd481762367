use anchor_lang::prelude::*;

pub type VaultResult<T = ()> = std::result::Result<T, ErrorCodes>;

#[error_code]
pub enum ErrorCodes {
    /***********************************|
    |            Validation              |
    |__________________________________*/
    #[msg(VAULT_ADDRESS_MISMATCH)]
    VaultAddressMismatch,

    #[msg(VAULT_INVALID_AMOUNT)]
    VaultInvalidAmount,

    #[msg(VAULT_UNAUTHORIZED)]
    VaultUnauthorized,

    #[msg(VAULT_ALREADY_INITIALIZED)]
    VaultAlreadyInitialized,

    #[msg(VAULT_ACCOUNT_NOT_FOUND)]
    VaultAccountNotFound,

    /***********************************|
    |            Arithmetic              |
    |__________________________________*/
    #[msg(VAULT_OVERFLOW)]
    VaultOverflow,

    #[msg(VAULT_UNDERFLOW)]
    VaultUnderflow,

    #[msg(VAULT_INSUFFICIENT_FUNDS)]
    VaultInsufficientFunds,

    #[msg(VAULT_INSUFFICIENT_VAULT_BALANCE)]
    VaultInsufficientVaultBalance,
}
