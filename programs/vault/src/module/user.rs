use anchor_lang::prelude::*;

use library::{
    native::{close_program_account, create_pda_account, rent_exempt_minimum, transfer_lamports},
    structs::{CreatePdaAccountParams, LamportTransferParams},
};

use crate::utils::{balance::BalanceSnapshot, validate::*};
use crate::{constants::*, errors::*, events::*, state::*};

/// @notice Creates the owner's vault state and funds the vault with its rent reserve
/// @dev Fails with VaultAlreadyInitialized while a previous lifecycle is still live
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let owner_key = ctx.accounts.owner.key();
    validate_authority(&ctx.accounts.signer.key(), &owner_key)?;

    let addresses = VaultAddresses::derive(&owner_key, ctx.program_id)?;
    validate_addresses(
        &addresses,
        &ctx.accounts.vault_state.key(),
        &ctx.accounts.vault.key(),
    )?;

    if VaultState::is_initialized(&ctx.accounts.vault_state, ctx.program_id) {
        return Err(ErrorCodes::VaultAlreadyInitialized.into());
    }

    let state_signer_seeds: &[&[&[u8]]] = &[&[
        VAULT_STATE_SEED,
        owner_key.as_ref(),
        &[addresses.state_bump],
    ]];

    create_pda_account(CreatePdaAccountParams {
        payer: ctx.accounts.signer.to_account_info(),
        account: ctx.accounts.vault_state.to_account_info(),
        space: DISCRIMINATOR_LEN + VaultState::INIT_SPACE,
        owner: *ctx.program_id,
        system_program: ctx.accounts.system_program.to_account_info(),
        signer_seeds: state_signer_seeds,
    })?;

    VaultState::new(addresses.vault_bump, addresses.state_bump)
        .store(&ctx.accounts.vault_state)?;

    // lamports already sitting on the vault address count towards its reserve
    let vault_reserve = rent_exempt_minimum(VAULT_DATA_LEN)?;
    transfer_lamports(LamportTransferParams {
        source: ctx.accounts.signer.to_account_info(),
        destination: ctx.accounts.vault.to_account_info(),
        amount: vault_reserve.saturating_sub(ctx.accounts.vault.lamports()),
        system_program: ctx.accounts.system_program.to_account_info(),
        signer_seeds: None,
    })?;

    emit!(LogInitialize {
        owner: owner_key,
        vault: addresses.vault,
        vault_state: addresses.vault_state,
        vault_bump: addresses.vault_bump,
        state_bump: addresses.state_bump,
    });

    Ok(())
}

/// @notice Moves `amount` lamports from the owner into the vault
pub fn deposit(ctx: Context<Payment>, amount: u64) -> Result<()> {
    let owner_key = ctx.accounts.owner.key();

    validate_active_vault(
        &ctx.accounts.signer.key(),
        &owner_key,
        &ctx.accounts.vault_state,
        &ctx.accounts.vault,
        ctx.program_id,
    )?;
    validate_amount(amount)?;

    let snapshot = BalanceSnapshot::capture(&ctx.accounts.signer, &ctx.accounts.vault)?;
    let vault_balance = snapshot.plan_deposit(amount)?;

    transfer_lamports(LamportTransferParams {
        source: ctx.accounts.signer.to_account_info(),
        destination: ctx.accounts.vault.to_account_info(),
        amount,
        system_program: ctx.accounts.system_program.to_account_info(),
        signer_seeds: None,
    })?;

    emit!(LogDeposit {
        owner: owner_key,
        amount,
        vault_balance,
    });

    Ok(())
}

/// @notice Moves `amount` lamports from the vault back to the owner
/// @dev The vault signs the transfer with its canonical seeds
pub fn withdraw(ctx: Context<Payment>, amount: u64) -> Result<()> {
    let owner_key = ctx.accounts.owner.key();

    let addresses = validate_active_vault(
        &ctx.accounts.signer.key(),
        &owner_key,
        &ctx.accounts.vault_state,
        &ctx.accounts.vault,
        ctx.program_id,
    )?;
    validate_amount(amount)?;

    let snapshot = BalanceSnapshot::capture(&ctx.accounts.signer, &ctx.accounts.vault)?;
    let vault_balance = snapshot.plan_withdraw(amount)?;

    let vault_signer_seeds: &[&[&[u8]]] =
        &[&[VAULT_SEED, owner_key.as_ref(), &[addresses.vault_bump]]];

    transfer_lamports(LamportTransferParams {
        source: ctx.accounts.vault.to_account_info(),
        destination: ctx.accounts.signer.to_account_info(),
        amount,
        system_program: ctx.accounts.system_program.to_account_info(),
        signer_seeds: Some(vault_signer_seeds),
    })?;

    emit!(LogWithdraw {
        owner: owner_key,
        amount,
        vault_balance,
    });

    Ok(())
}

/// @notice Sweeps every vault lamport to the owner, then tears down the vault state
/// @dev Both steps run in one instruction, so either both land or neither does
pub fn close_vault(ctx: Context<CloseVault>) -> Result<()> {
    let owner_key = ctx.accounts.owner.key();

    let addresses = validate_active_vault(
        &ctx.accounts.signer.key(),
        &owner_key,
        &ctx.accounts.vault_state,
        &ctx.accounts.vault,
        ctx.program_id,
    )?;

    let swept_lamports = ctx.accounts.vault.lamports();
    let vault_signer_seeds: &[&[&[u8]]] =
        &[&[VAULT_SEED, owner_key.as_ref(), &[addresses.vault_bump]]];

    transfer_lamports(LamportTransferParams {
        source: ctx.accounts.vault.to_account_info(),
        destination: ctx.accounts.signer.to_account_info(),
        amount: swept_lamports,
        system_program: ctx.accounts.system_program.to_account_info(),
        signer_seeds: Some(vault_signer_seeds),
    })?;

    let reclaimed_rent = close_program_account(
        &ctx.accounts.vault_state.to_account_info(),
        &ctx.accounts.signer.to_account_info(),
    )?;

    emit!(LogCloseVault {
        owner: owner_key,
        swept_lamports,
        reclaimed_rent,
    });

    Ok(())
}
