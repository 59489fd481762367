use anchor_lang::prelude::*;

use crate::errors::{ErrorCodes, FluidResult};

/// Derives the canonical program address for `[tag, owner]` under `program_id`.
///
/// Bumps are tried from 255 down to 0; the first one that lands off the ed25519 curve is
/// canonical.
pub fn derive_address(
    tag: &[u8],
    owner: &Pubkey,
    program_id: &Pubkey,
) -> FluidResult<(Pubkey, u8)> {
    for bump in (0..=u8::MAX).rev() {
        if let Ok(address) =
            Pubkey::create_program_address(&[tag, owner.as_ref(), &[bump]], program_id)
        {
            return Ok((address, bump));
        }
    }

    msg!("No viable bump for seed {:?} and owner {}", tag, owner);
    Err(ErrorCodes::LibraryPdaDerivationFailed)
}
