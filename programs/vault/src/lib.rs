use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod module;
pub mod state;
pub mod utils;

use crate::state::*;

#[cfg(feature = "staging")]
declare_id!("BWfVoBYmqUc9itkStDZHHnE5mVNWPudKU6baT74dvQNC");

#[cfg(not(feature = "staging"))]
declare_id!("CUU12iABy1Jt9SxYi22kTmBsha41fKXzTkwdaydfDsWp");

#[program]
pub mod vault {
    use super::*;

    /***********************************|
    |           Lifecycle Module         |
    |__________________________________*/

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        module::user::initialize(ctx)
    }

    pub fn close_vault(ctx: Context<CloseVault>) -> Result<()> {
        module::user::close_vault(ctx)
    }

    /***********************************|
    |           Payment Module           |
    |__________________________________*/

    pub fn deposit(ctx: Context<Payment>, amount: u64) -> Result<()> {
        module::user::deposit(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Payment>, amount: u64) -> Result<()> {
        module::user::withdraw(ctx, amount)
    }
}
