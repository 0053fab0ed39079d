#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

/// Seeds and policy constants shared by the program and its clients.
pub mod constants;

/// Errors returned by the raffle's instructions.
pub mod error;

/// Events emitted as rounds progress.
pub mod events;

/// Instruction handlers: entry, upkeep, fulfillment, payout and queries.
pub mod instructions;

/// The raffle and request queue accounts and the round state machine.
pub mod state;

/// Randomness oracle interface and winner derivation.
pub mod vrf;

pub use instructions::*;
use state::{RaffleConfig, RaffleState, UpkeepCheck};

declare_id!("FhecdbymsDRj6yM6DrsfTUgByUUgN1E8mfA7PpB1KQVv");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, config: RaffleConfig) -> Result<()> {
        process_initialize(ctx, config)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        process_enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>, check_data: Vec<u8>) -> Result<UpkeepCheck> {
        process_check_upkeep(ctx, check_data)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
        process_perform_upkeep(ctx, perform_data)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        process_fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn reveal_random_words(ctx: Context<RevealRandomWords>, request_id: u64) -> Result<()> {
        process_reveal_random_words(ctx, request_id)
    }

    pub fn get_entrance_fee(ctx: Context<ReadRaffle>) -> Result<u64> {
        process_get_entrance_fee(ctx)
    }

    pub fn get_interval(ctx: Context<ReadRaffle>) -> Result<i64> {
        process_get_interval(ctx)
    }

    pub fn get_raffle_state(ctx: Context<ReadRaffle>) -> Result<RaffleState> {
        process_get_raffle_state(ctx)
    }

    pub fn get_number_of_players(ctx: Context<ReadRaffle>) -> Result<u64> {
        process_get_number_of_players(ctx)
    }

    pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
        process_get_player(ctx, index)
    }

    pub fn get_last_timestamp(ctx: Context<ReadRaffle>) -> Result<i64> {
        process_get_last_timestamp(ctx)
    }

    pub fn get_recent_winner(ctx: Context<ReadRaffle>) -> Result<Option<Pubkey>> {
        process_get_recent_winner(ctx)
    }

    pub fn get_num_words(ctx: Context<ReadRaffle>) -> Result<u32> {
        process_get_num_words(ctx)
    }

    pub fn get_request_confirmations(ctx: Context<ReadRaffle>) -> Result<u16> {
        process_get_request_confirmations(ctx)
    }
}
