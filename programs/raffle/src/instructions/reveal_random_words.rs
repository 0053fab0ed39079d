use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use super::fulfill_random_words::settle_fulfillment;
use crate::constants::*;
use crate::error::RaffleError;
use crate::state::{Raffle, RequestQueue};

/// Accounts required to settle the pending request from a Switchboard
/// randomness account instead of a coordinator callback.
#[derive(Accounts)]
pub struct RevealRandomWords<'info> {
    /// Anyone may reveal; the randomness account is what is trusted.
    pub payer: Signer<'info>,

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

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: The account's key and data are validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// Receives the prize.
    /// CHECK: Compared against the drawn player within the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

pub fn process_reveal_random_words(ctx: Context<RevealRandomWords>, request_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts
        .raffle
        .authorize_randomness_account(&ctx.accounts.randomness_account_data.key())?;

    let revealed_random_value: [u8; 32] = {
        let randomness_data =
            RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
                .map_err(|_| RaffleError::RandomnessNotResolved)?;
        ctx.accounts
            .raffle
            .verify_commit(request_id, randomness_data.seed_slot)?;
        randomness_data
            .get_value(&clock)
            .map_err(|_| RaffleError::RandomnessNotResolved)?
    };

    msg!("Randomness result: {}", revealed_random_value[0]);

    settle_fulfillment(
        &mut ctx.accounts.raffle,
        &mut ctx.accounts.request_queue,
        &ctx.accounts.winner,
        request_id,
        &[revealed_random_value],
        clock.unix_timestamp,
    )
}
