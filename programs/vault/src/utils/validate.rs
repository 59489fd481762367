use anchor_lang::prelude::*;

use library::pda::derive_address;

use crate::errors::ErrorCodes;
use crate::state::{VaultState, VAULT_SEED, VAULT_STATE_SEED};

/// Canonical addresses of an owner's vault pair, recomputed on every instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultAddresses {
    pub vault: Pubkey,
    pub vault_bump: u8,
    pub vault_state: Pubkey,
    pub state_bump: u8,
}

impl VaultAddresses {
    pub fn derive(owner: &Pubkey, program_id: &Pubkey) -> Result<Self> {
        let (vault, vault_bump) = derive_address(VAULT_SEED, owner, program_id)?;
        let (vault_state, state_bump) = derive_address(VAULT_STATE_SEED, owner, program_id)?;

        Ok(Self {
            vault,
            vault_bump,
            vault_state,
            state_bump,
        })
    }
}

pub fn validate_authority(signer: &Pubkey, owner: &Pubkey) -> Result<()> {
    if signer != owner {
        msg!("Signer {} is not the vault owner {}", signer, owner);
        return Err(ErrorCodes::VaultUnauthorized.into());
    }

    Ok(())
}

pub fn validate_amount(amount: u64) -> Result<()> {
    if amount == 0 {
        return Err(ErrorCodes::VaultInvalidAmount.into());
    }

    Ok(())
}

pub fn validate_addresses(
    addresses: &VaultAddresses,
    vault_state: &Pubkey,
    vault: &Pubkey,
) -> Result<()> {
    if *vault_state != addresses.vault_state {
        msg!(
            "Vault state mismatch: expected {}, got {}",
            addresses.vault_state,
            vault_state
        );
        return Err(ErrorCodes::VaultAddressMismatch.into());
    }

    if *vault != addresses.vault {
        msg!("Vault mismatch: expected {}, got {}", addresses.vault, vault);
        return Err(ErrorCodes::VaultAddressMismatch.into());
    }

    Ok(())
}

pub fn validate_stored_bumps(state: &VaultState, addresses: &VaultAddresses) -> Result<()> {
    if state.vault_bump != addresses.vault_bump || state.state_bump != addresses.state_bump {
        return Err(ErrorCodes::VaultAddressMismatch.into());
    }

    Ok(())
}

/// Every gate an instruction on an existing vault must clear before it touches lamports.
///
/// Order: authority, derived addresses, existence of the state, stored bumps.
pub fn validate_active_vault(
    signer: &Pubkey,
    owner: &Pubkey,
    vault_state: &AccountInfo,
    vault: &AccountInfo,
    program_id: &Pubkey,
) -> Result<VaultAddresses> {
    validate_authority(signer, owner)?;

    let addresses = VaultAddresses::derive(owner, program_id)?;
    validate_addresses(&addresses, vault_state.key, vault.key)?;

    let state = VaultState::load(vault_state, program_id)?;
    validate_stored_bumps(&state, &addresses)?;

    Ok(addresses)
}
