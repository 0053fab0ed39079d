use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{Raffle, RaffleConfig, RequestQueue};

/// Accounts required to create the raffle and its oracle request queue.
/// Both are PDAs; this runs once per program deployment.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Raffle state account that stores the live round.
    #[account(
        init,
        payer = payer,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [RAFFLE_SEED.as_bytes()],
        bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// Queue the randomness oracle reads requests from.
    #[account(
        init,
        payer = payer,
        space = 8 + RequestQueue::INIT_SPACE,
        seeds = [REQUEST_QUEUE_SEED.as_bytes(), raffle.key().as_ref()],
        bump
    )]
    pub request_queue: Account<'info, RequestQueue>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Initializes the raffle with its entrance fee, interval and oracle
/// parameters, and opens round 1 at the current cluster time.
///
/// The configuration cannot be changed afterwards.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
/// * `config` - Entrance fee, interval and oracle settings
pub fn process_initialize(ctx: Context<Initialize>, config: RaffleConfig) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.payer.key();
    let raffle_key = ctx.accounts.raffle.key();
    let rent_floor = Rent::get()?.minimum_balance(0);

    ctx.accounts
        .raffle
        .initialize(authority, ctx.bumps.raffle, config, now, rent_floor)?;

    let request_queue = &mut ctx.accounts.request_queue;
    request_queue.bump = ctx.bumps.request_queue;
    request_queue.raffle = raffle_key;
    request_queue.request_counter = 0;
    request_queue.last_request = None;

    msg!(
        "Raffle initialized: fee={}, interval={}s, coordinator={}",
        ctx.accounts.raffle.entrance_fee,
        ctx.accounts.raffle.interval,
        ctx.accounts.raffle.oracle.coordinator
    );

    Ok(())
}
