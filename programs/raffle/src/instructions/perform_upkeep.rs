use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::*;
use crate::error::RaffleError;
use crate::events::RequestedRaffleWinner;
use crate::state::{Raffle, RequestQueue};
use crate::vrf::require_fresh_commit;

/// Accounts required to close the round and request randomness.
///
/// Ensures:
/// 1. The round is eligible right now (re-checked, whatever the caller saw).
/// 2. At most one request is ever outstanding.
/// 3. When the raffle draws from Switchboard, the configured randomness
///    account was committed in the previous slot, and that commit is bound
///    to the request.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The automation service or any keeper; pays transaction fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The main raffle state account.
    #[account(
        mut,
        seeds = [RAFFLE_SEED.as_bytes()],
        bump = raffle.bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// Queue the oracle reads the new request from.
    #[account(
        mut,
        seeds = [REQUEST_QUEUE_SEED.as_bytes(), raffle.key().as_ref()],
        bump = request_queue.bump
    )]
    pub request_queue: Account<'info, RequestQueue>,

    /// Randomness account from Switchboard. Required only when the raffle
    /// was configured with one.
    /// CHECK: The account's key and data are validated manually within the handler.
    pub randomness_account_data: Option<UncheckedAccount<'info>>,
}

/// Moves the round from `Open` to `Calculating` and issues the randomness
/// request.
///
/// # Arguments
/// * `ctx` - Context containing PerformUpkeep accounts
/// * `perform_data` - Opaque bytes from `check_upkeep`; not interpreted
pub fn process_perform_upkeep(mut ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
    let clock = Clock::get()?;
    msg!("Perform data: {} bytes", perform_data.len());

    let mut commit_slot = None;
    if ctx.accounts.raffle.oracle.randomness_account != Pubkey::default() {
        let randomness_account = ctx
            .accounts
            .randomness_account_data
            .as_ref()
            .ok_or(RaffleError::RandomnessAccountRequired)?;
        ctx.accounts
            .raffle
            .authorize_randomness_account(&randomness_account.key())?;

        let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
            .map_err(|_| RaffleError::RandomnessNotResolved)?;
        require_fresh_commit(randomness_data.seed_slot, clock.slot)?;
        commit_slot = Some(randomness_data.seed_slot);
    }

    let accounts = &mut ctx.accounts;
    let request_id = accounts
        .raffle
        .perform_upkeep(clock.unix_timestamp, &mut *accounts.request_queue)?;
    if let Some(seed_slot) = commit_slot {
        accounts.raffle.bind_commit(seed_slot)?;
    }

    let round = accounts.raffle.round;
    msg!("Requested raffle winner: request {} for round {}", request_id, round);

    emit!(RequestedRaffleWinner { request_id, round });

    Ok(())
}
