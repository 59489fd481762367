use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    self, allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::{
    errors::ErrorCodes,
    math::safe_math::SafeMath,
    structs::{CreatePdaAccountParams, LamportTransferParams},
};

/// Rent-exempt minimum for an account holding `data_len` bytes, read from the rent sysvar.
pub fn rent_exempt_minimum(data_len: usize) -> Result<u64> {
    Ok(Rent::get()?.minimum_balance(data_len))
}

pub fn transfer_lamports(params: LamportTransferParams) -> Result<()> {
    let LamportTransferParams {
        source,
        destination,
        amount,
        system_program,
        signer_seeds,
    } = params;

    if amount == 0 {
        return Ok(());
    }

    let transfer_accounts = Transfer {
        from: source,
        to: destination,
    };

    if let Some(seeds) = signer_seeds {
        transfer(
            CpiContext::new_with_signer(system_program, transfer_accounts, seeds),
            amount,
        )
    } else {
        transfer(CpiContext::new(system_program, transfer_accounts), amount)
    }
}

/// Creates a program-owned PDA with `space` bytes of rent-exempt storage.
///
/// `create_account` rejects an address that already holds lamports, so a pre-funded PDA is
/// topped up, then allocated and assigned in place.
pub fn create_pda_account(params: CreatePdaAccountParams) -> Result<()> {
    let CreatePdaAccountParams {
        payer,
        account,
        space,
        owner,
        system_program,
        signer_seeds,
    } = params;

    let required_lamports = rent_exempt_minimum(space)?;
    let current_lamports = account.lamports();

    if current_lamports == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program,
                CreateAccount {
                    from: payer,
                    to: account,
                },
                signer_seeds,
            ),
            required_lamports,
            space as u64,
            &owner,
        );
    }

    let top_up = required_lamports.saturating_sub(current_lamports);
    transfer_lamports(LamportTransferParams {
        source: payer,
        destination: account.clone(),
        amount: top_up,
        system_program: system_program.clone(),
        signer_seeds: None,
    })?;

    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: account.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    assign(
        CpiContext::new_with_signer(
            system_program,
            Assign {
                account_to_assign: account,
            },
            signer_seeds,
        ),
        &owner,
    )
}

/// Tears down a program-owned account and returns its lamports to `destination`.
/// Data is zeroed and the account handed back to the system program with length 0.
pub fn close_program_account<'info>(
    account: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<u64> {
    if !account.is_writable || !destination.is_writable {
        return Err(ErrorCodes::LibraryAccountNotWritable.into());
    }

    let reclaimed = account.lamports();
    let destination_lamports = destination.lamports().safe_add(reclaimed)?;

    **destination.try_borrow_mut_lamports()? = destination_lamports;
    **account.try_borrow_mut_lamports()? = 0;

    account.try_borrow_mut_data()?.fill(0);
    account.assign(&system_program::ID);
    account.resize(0)?;

    Ok(reclaimed)
}
