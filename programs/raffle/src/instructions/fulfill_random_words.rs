use anchor_lang::prelude::*;

use super::payout::pay_and_reset;
use crate::constants::*;
use crate::events::WinnerPicked;
use crate::state::{Raffle, RequestQueue};
use crate::vrf::RandomWord;

/// Accounts required for the oracle to deliver random words.
///
/// Ensures:
/// 1. Only the configured coordinator can deliver randomness.
/// 2. The words answer the request that is currently pending.
/// 3. The prize goes to the player the words select.
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// The randomness oracle's signing key.
    pub coordinator: Signer<'info>,

    /// The main raffle state account.
    #[account(
        mut,
        seeds = [RAFFLE_SEED.as_bytes()],
        bump = raffle.bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    #[account(
        mut,
        seeds = [REQUEST_QUEUE_SEED.as_bytes(), raffle.key().as_ref()],
        bump = request_queue.bump
    )]
    pub request_queue: Account<'info, RequestQueue>,

    /// Receives the prize.
    /// CHECK: Compared against the drawn player within the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Callback from the randomness oracle.
///
/// # Arguments
/// * `ctx` - Context containing FulfillRandomWords accounts
/// * `request_id` - Id returned when the request was issued
/// * `random_words` - Oracle output; the first word picks the winner
pub fn process_fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<RandomWord>,
) -> Result<()> {
    let caller = ctx.accounts.coordinator.key();
    if let Err(err) = ctx.accounts.raffle.authorize_coordinator(&caller) {
        msg!("Fulfillment for request {} from unauthorized {}", request_id, caller);
        return Err(err);
    }

    let now = Clock::get()?.unix_timestamp;
    settle_fulfillment(
        &mut ctx.accounts.raffle,
        &mut ctx.accounts.request_queue,
        &ctx.accounts.winner,
        request_id,
        &random_words,
        now,
    )
}

/// Shared tail of both fulfillment paths: draw, pay, reset, announce.
pub(crate) fn settle_fulfillment<'info>(
    raffle: &mut Account<'info, Raffle>,
    request_queue: &mut RequestQueue,
    winner: &AccountInfo<'info>,
    request_id: u64,
    random_words: &[RandomWord],
    now: i64,
) -> Result<()> {
    let fulfillment = raffle.resolve_winner(request_id, random_words)?;
    let round = raffle.round;

    msg!(
        "Request {}: index {} of {} players",
        request_id,
        fulfillment.winner_index,
        raffle.players.len()
    );
    msg!("Winner: {}", fulfillment.winner);

    pay_and_reset(raffle, winner, &fulfillment, now)?;
    request_queue.mark_fulfilled(request_id);

    emit!(WinnerPicked {
        winner: fulfillment.winner,
        round,
        request_id,
        prize: fulfillment.prize,
    });

    Ok(())
}
