use anchor_lang::prelude::*;

use library::{math::safe_math::SafeMath, native::rent_exempt_minimum};

use crate::constants::VAULT_DATA_LEN;
use crate::errors::{ErrorCodes, VaultResult};

/// Lamport balances involved in a transfer, read at execution time.
///
/// The vault keeps a rent-exempt reserve that is never withdrawable; the custodied balance is
/// whatever sits above it. The owner must likewise stay above the rent-exempt minimum for its
/// own data length after a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSnapshot {
    pub owner_lamports: u64,
    pub owner_reserve: u64,
    pub vault_lamports: u64,
    pub vault_reserve: u64,
}

impl BalanceSnapshot {
    pub fn capture(owner: &AccountInfo, vault: &AccountInfo) -> Result<Self> {
        Ok(Self {
            owner_lamports: owner.lamports(),
            owner_reserve: rent_exempt_minimum(owner.data_len())?,
            vault_lamports: vault.lamports(),
            vault_reserve: rent_exempt_minimum(VAULT_DATA_LEN)?,
        })
    }

    pub fn vault_balance(&self) -> VaultResult<u64> {
        self.vault_lamports
            .safe_sub(self.vault_reserve)
            .map_err(|_| ErrorCodes::VaultUnderflow)
    }

    /// Returns the vault balance after moving `amount` from the owner into the vault.
    pub fn plan_deposit(&self, amount: u64) -> VaultResult<u64> {
        if amount == 0 {
            return Err(ErrorCodes::VaultInvalidAmount);
        }

        let vault_lamports = self
            .vault_lamports
            .safe_add(amount)
            .map_err(|_| ErrorCodes::VaultOverflow)?;

        let required = amount
            .safe_add(self.owner_reserve)
            .map_err(|_| ErrorCodes::VaultOverflow)?;

        if self.owner_lamports < required {
            msg!(
                "Owner holds {} lamports, deposit needs {}",
                self.owner_lamports,
                required
            );
            return Err(ErrorCodes::VaultInsufficientFunds);
        }

        vault_lamports
            .safe_sub(self.vault_reserve)
            .map_err(|_| ErrorCodes::VaultUnderflow)
    }

    /// Returns the vault balance after moving `amount` from the vault back to the owner.
    pub fn plan_withdraw(&self, amount: u64) -> VaultResult<u64> {
        if amount == 0 {
            return Err(ErrorCodes::VaultInvalidAmount);
        }

        let balance = self.vault_balance()?;

        if amount > balance {
            msg!("Vault holds {}, withdraw asked for {}", balance, amount);
            return Err(ErrorCodes::VaultInsufficientVaultBalance);
        }

        self.owner_lamports
            .safe_add(amount)
            .map_err(|_| ErrorCodes::VaultOverflow)?;

        balance
            .safe_sub(amount)
            .map_err(|_| ErrorCodes::VaultUnderflow)
    }
}
