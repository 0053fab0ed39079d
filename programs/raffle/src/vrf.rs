use anchor_lang::prelude::*;

use crate::constants::RANDOM_WORD_LEN;
use crate::error::RaffleError;

/// A 256-bit unsigned integer delivered by the oracle, big-endian.
pub type RandomWord = [u8; RANDOM_WORD_LEN];

/// Parameters forwarded to the oracle with every request.
///
/// The raffle never interprets these; they are copied from its
/// `OracleConfig` and handed to the coordinator unchanged.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct RandomWordsRequest {
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

/// The request side of a verifiable randomness oracle.
///
/// Implementors allocate a request id that the oracle echoes back when it
/// delivers the words. Ids must be unique for the lifetime of the raffle.
pub trait RandomnessCoordinator {
    fn request_random_words(&mut self, request: &RandomWordsRequest) -> Result<u64>;
}

/// Reduces `word` modulo `count`.
///
/// The word is folded byte by byte so the full 256 bits take part. Modulo
/// bias is at most `count / 2^256`, which is irrelevant for the player
/// counts a single raffle account can hold.
pub fn winner_index(word: &RandomWord, count: u64) -> Result<u64> {
    require!(count > 0, RaffleError::NoParticipants);

    let modulus = count as u128;
    let index = word
        .iter()
        .fold(0u128, |acc, byte| ((acc << 8) | *byte as u128) % modulus);

    Ok(index as u64)
}

/// A Switchboard commit is usable only in the slot right after it was made.
pub fn require_fresh_commit(seed_slot: u64, slot: u64) -> Result<()> {
    if seed_slot != slot.saturating_sub(1) {
        msg!("Seed slot: {}", seed_slot);
        msg!("Current slot: {}", slot);
        return err!(RaffleError::RandomnessAlreadyRevealed);
    }
    Ok(())
}

/// Builds a word holding `value` in its low 128 bits.
pub fn word_from_u128(value: u128) -> RandomWord {
    let mut word = [0u8; RANDOM_WORD_LEN];
    word[RANDOM_WORD_LEN - 16..].copy_from_slice(&value.to_be_bytes());
    word
}
