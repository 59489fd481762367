use anchor_lang::prelude::*;

#[event]
pub struct LogInitialize {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub vault_state: Pubkey,
    pub vault_bump: u8,
    pub state_bump: u8,
}

#[event]
pub struct LogDeposit {
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

#[event]
pub struct LogWithdraw {
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

#[event]
pub struct LogCloseVault {
    pub owner: Pubkey,
    pub swept_lamports: u64,
    pub reclaimed_rent: u64,
}
