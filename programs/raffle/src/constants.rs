use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::MAX_RETURN_DATA;

/// PDA Seeds
#[constant]
pub const RAFFLE_SEED: &str = "raffle";
#[constant]
pub const REQUEST_QUEUE_SEED: &str = "request_queue";

/// Upper bound on entries per round. Fixes the `Raffle` account size.
#[constant]
pub const MAX_PLAYERS: u32 = 64;

/// Random words requested per round when the config does not say otherwise.
#[constant]
pub const NUM_WORDS: u32 = 1;

/// Largest word count a raffle may be configured to request.
pub const MAX_NUM_WORDS: u32 = 10;

/// Size in bytes of a single random word (a 256-bit unsigned integer).
pub const RANDOM_WORD_LEN: usize = 32;

/// Longest `perform_data` that `check_upkeep` echoes. The serialized
/// `UpkeepCheck` (flag and length prefix included) must fit in return data.
pub const MAX_PERFORM_DATA_LEN: usize = MAX_RETURN_DATA - 5;
