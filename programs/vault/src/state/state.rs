use anchor_lang::prelude::*;

use crate::errors::ErrorCodes;

/// Control account recording the canonical bumps of an owner's vault pair.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct VaultState {
    pub vault_bump: u8, // bump of ["vault", owner]
    pub state_bump: u8, // bump of ["state", owner]
}

impl VaultState {
    pub fn new(vault_bump: u8, state_bump: u8) -> Self {
        Self {
            vault_bump,
            state_bump,
        }
    }

    /// An address holds a live vault state only while this program owns it.
    pub fn is_initialized(info: &AccountInfo, program_id: &Pubkey) -> bool {
        info.owner == program_id && !info.data_is_empty()
    }

    /// Reads the state straight from the account as it stands at execution time.
    pub fn load(info: &AccountInfo, program_id: &Pubkey) -> Result<Self> {
        if !Self::is_initialized(info, program_id) {
            msg!("Vault state {} does not exist", info.key);
            return Err(ErrorCodes::VaultAccountNotFound.into());
        }

        let data = info.try_borrow_data()?;
        VaultState::try_deserialize(&mut &data[..])
            .map_err(|_| error!(ErrorCodes::VaultAccountNotFound))
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}
