use anchor_lang::prelude::*;

pub struct LamportTransferParams<'a, 'info> {
    /// The account lamports are debited from
    pub source: AccountInfo<'info>,
    /// The account lamports are credited to
    pub destination: AccountInfo<'info>,
    /// The amount to transfer
    pub amount: u64,
    /// The system program
    pub system_program: AccountInfo<'info>,
    /// Optional signer seeds when `source` is a PDA
    pub signer_seeds: Option<&'a [&'a [&'a [u8]]]>,
}

pub struct CreatePdaAccountParams<'a, 'info> {
    /// Funds rent and signs for the allocation
    pub payer: AccountInfo<'info>,
    /// The PDA being created
    pub account: AccountInfo<'info>,
    /// Bytes of data to allocate
    pub space: usize,
    /// Program that will own the new account
    pub owner: Pubkey,
    /// The system program
    pub system_program: AccountInfo<'info>,
    /// Seeds (bump included) that sign for `account`
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}
