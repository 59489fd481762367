use anchor_lang::prelude::*;

// vault and vault_state are re-derived from `owner` inside the handlers.

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: identity the vault pair derives from, must equal signer
    pub owner: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: re-derived from ["state", owner] and created in the handler
    pub vault_state: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: re-derived from ["vault", owner], system owned lamport holder
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Payment<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: identity the vault pair derives from, must equal signer
    pub owner: UncheckedAccount<'info>,

    /// CHECK: re-derived from ["state", owner] and loaded in the handler
    pub vault_state: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: re-derived from ["vault", owner], system owned lamport holder
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CloseVault<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: identity the vault pair derives from, must equal signer
    pub owner: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: re-derived from ["state", owner] and torn down in the handler
    pub vault_state: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: re-derived from ["vault", owner], swept in the handler
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
