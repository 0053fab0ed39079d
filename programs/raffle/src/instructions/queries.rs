use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{Raffle, RaffleState};

/// Read-only view of the raffle. Every getter returns its value through
/// transaction return data and changes nothing.
#[derive(Accounts)]
pub struct ReadRaffle<'info> {
    #[account(
        seeds = [RAFFLE_SEED.as_bytes()],
        bump = raffle.bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,
}

pub fn process_get_entrance_fee(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.entrance_fee)
}

pub fn process_get_interval(ctx: Context<ReadRaffle>) -> Result<i64> {
    Ok(ctx.accounts.raffle.interval)
}

pub fn process_get_raffle_state(ctx: Context<ReadRaffle>) -> Result<RaffleState> {
    Ok(ctx.accounts.raffle.state)
}

pub fn process_get_number_of_players(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.participant_count())
}

pub fn process_get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.participant_at(index)
}

/// Start of the live round: creation time or the last payout.
pub fn process_get_last_timestamp(ctx: Context<ReadRaffle>) -> Result<i64> {
    Ok(ctx.accounts.raffle.last_timestamp)
}

/// `None` until the first payout.
pub fn process_get_recent_winner(ctx: Context<ReadRaffle>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.raffle.recent_winner())
}

pub fn process_get_num_words(ctx: Context<ReadRaffle>) -> Result<u32> {
    Ok(ctx.accounts.raffle.oracle.num_words)
}

pub fn process_get_request_confirmations(ctx: Context<ReadRaffle>) -> Result<u16> {
    Ok(ctx.accounts.raffle.oracle.request_confirmations)
}
