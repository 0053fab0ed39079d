use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{Raffle, UpkeepCheck};

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [RAFFLE_SEED.as_bytes()],
        bump = raffle.bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,
}

/// Tells the automation service whether `perform_upkeep` would succeed now.
/// `check_data` is handed back untouched as `perform_data`.
pub fn process_check_upkeep(ctx: Context<CheckUpkeep>, check_data: Vec<u8>) -> Result<UpkeepCheck> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.raffle.check_upkeep(now, check_data))
}
