use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::RaffleError;
use crate::vrf::{winner_index, RandomWord, RandomWordsRequest, RandomnessCoordinator};

/// Lifecycle of the live round.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum RaffleState {
    /// Accepting entries; upkeep may be evaluated.
    #[default]
    Open,
    /// Entry closed, waiting for exactly one randomness fulfillment.
    Calculating,
}

/// Oracle identity and the request policy passed through to it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct OracleConfig {
    /// The only signer allowed to deliver randomness through `fulfill_random_words`.
    pub coordinator: Pubkey,
    /// Switchboard randomness account accepted by `reveal_random_words`.
    /// `Pubkey::default()` disables that path.
    pub randomness_account: Pubkey,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

/// Everything fixed at construction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RaffleConfig {
    pub entrance_fee: u64,
    pub interval: i64,
    pub oracle: OracleConfig,
}

/// The outstanding randomness request, with the round it was issued for.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct PendingRequest {
    pub request_id: u64,
    pub round: u64,
    pub players: u32,
    pub balance: u64,
    /// Slot of the Switchboard commit checked at upkeep; 0 on the coordinator path.
    pub seed_slot: u64,
}

/// Last paid winner, kept until the next payout overwrites it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct WinnerRecord {
    pub winner: Pubkey,
    pub round: u64,
    pub prize: u64,
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,
    pub paid_at: i64,
}

/// Result of `check_upkeep`, returned to the automation service.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    pub perform_data: Vec<u8>,
}

/// A validated fulfillment: who won and what they are owed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fulfillment {
    pub request_id: u64,
    pub winner_index: u64,
    pub winner: Pubkey,
    pub prize: u64,
}

#[account]
#[derive(Debug, Default, InitSpace)]
pub struct Raffle {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The account that created the raffle. Holds no privileges over rounds.
    pub authority: Pubkey,

    /// Lamports charged per entry.
    pub entrance_fee: u64,

    /// Seconds a round must stay open before upkeep is needed.
    pub interval: i64,

    pub oracle: OracleConfig,

    pub state: RaffleState,

    /// Number of the live round, starting at 1.
    pub round: u64,

    /// Entrants in entry order. An address appears once per entry.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,

    /// Lamports collected this round. Always `entrance_fee * players.len()`.
    pub balance: u64,

    /// UNIX timestamp of the round start (creation or last payout).
    pub last_timestamp: i64,

    /// Present exactly while `state == Calculating`.
    pub pending_request: Option<PendingRequest>,

    pub recent_winner: Option<WinnerRecord>,
}

impl Raffle {
    /// `rent_floor` is the rent-exempt minimum of an empty account. A smaller
    /// prize could never be credited to a drained wallet.
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        bump: u8,
        config: RaffleConfig,
        now: i64,
        rent_floor: u64,
    ) -> Result<()> {
        require!(
            config.entrance_fee > 0 && config.entrance_fee >= rent_floor,
            RaffleError::InvalidEntranceFee
        );
        require!(config.interval >= 0, RaffleError::InvalidInterval);
        require!(
            (1..=MAX_NUM_WORDS).contains(&config.oracle.num_words),
            RaffleError::InvalidWordCount
        );
        require!(
            config.oracle.coordinator != Pubkey::default(),
            RaffleError::InvalidCoordinator
        );

        self.bump = bump;
        self.authority = authority;
        self.entrance_fee = config.entrance_fee;
        self.interval = config.interval;
        self.oracle = config.oracle;
        self.state = RaffleState::Open;
        self.round = 1;
        self.players = Vec::new();
        self.balance = 0;
        self.last_timestamp = now;
        self.pending_request = None;
        self.recent_winner = None;
        Ok(())
    }

    /// Records one entry for `player`. Returns the fee to collect.
    ///
    /// `amount` is the most the entrant agreed to pay; only the entrance fee
    /// is ever charged.
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> Result<u64> {
        require!(amount >= self.entrance_fee, RaffleError::InsufficientFee);
        require!(self.state == RaffleState::Open, RaffleError::RoundNotOpen);
        require!(
            self.players.len() < MAX_PLAYERS as usize,
            RaffleError::RaffleFull
        );

        let balance = self
            .balance
            .checked_add(self.entrance_fee)
            .ok_or(RaffleError::MathOverflow)?;

        self.players.push(player);
        self.balance = balance;
        Ok(self.entrance_fee)
    }

    pub fn participant_count(&self) -> u64 {
        self.players.len() as u64
    }

    pub fn participant_at(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.players.get(index))
            .copied()
            .ok_or_else(|| error!(RaffleError::IndexOutOfRange))
    }

    pub fn is_upkeep_needed(&self, now: i64) -> bool {
        let is_open = self.state == RaffleState::Open;
        let time_passed = now.saturating_sub(self.last_timestamp) >= self.interval;
        let has_players = !self.players.is_empty();
        let has_balance = self.balance > 0;
        is_open && time_passed && has_players && has_balance
    }

    /// Echoes at most `MAX_PERFORM_DATA_LEN` bytes of `check_data`.
    pub fn check_upkeep(&self, now: i64, mut check_data: Vec<u8>) -> UpkeepCheck {
        check_data.truncate(MAX_PERFORM_DATA_LEN);
        UpkeepCheck {
            upkeep_needed: self.is_upkeep_needed(now),
            perform_data: check_data,
        }
    }

    pub fn random_words_request(&self) -> RandomWordsRequest {
        RandomWordsRequest {
            key_hash: self.oracle.key_hash,
            subscription_id: self.oracle.subscription_id,
            request_confirmations: self.oracle.request_confirmations,
            callback_gas_limit: self.oracle.callback_gas_limit,
            num_words: self.oracle.num_words,
        }
    }

    /// Closes entry and asks `coordinator` for randomness.
    ///
    /// Eligibility is re-checked here whatever the caller observed. The
    /// request is issued before any field changes, so a failing coordinator
    /// leaves the round untouched.
    pub fn perform_upkeep<C: RandomnessCoordinator>(
        &mut self,
        now: i64,
        coordinator: &mut C,
    ) -> Result<u64> {
        if !self.is_upkeep_needed(now) {
            msg!(
                "Upkeep not needed: balance={}, players={}, state={:?}",
                self.balance,
                self.players.len(),
                self.state
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        let request_id = coordinator.request_random_words(&self.random_words_request())?;

        self.state = RaffleState::Calculating;
        self.pending_request = Some(PendingRequest {
            request_id,
            round: self.round,
            players: self.players.len() as u32,
            balance: self.balance,
            seed_slot: 0,
        });
        Ok(request_id)
    }

    /// Binds the pending request to the Switchboard commit seen at upkeep.
    pub fn bind_commit(&mut self, seed_slot: u64) -> Result<()> {
        let pending = self
            .pending_request
            .as_mut()
            .ok_or(RaffleError::UnknownRequest)?;
        pending.seed_slot = seed_slot;
        Ok(())
    }

    /// A reveal is accepted only from the commit its request was bound to.
    pub fn verify_commit(&self, request_id: u64, seed_slot: u64) -> Result<()> {
        match &self.pending_request {
            Some(pending) if pending.request_id == request_id => {
                if pending.seed_slot != seed_slot {
                    msg!(
                        "Commit slot {} does not match {} bound at upkeep",
                        seed_slot,
                        pending.seed_slot
                    );
                    return err!(RaffleError::RandomnessAlreadyRevealed);
                }
                Ok(())
            }
            _ => err!(RaffleError::UnknownRequest),
        }
    }

    pub fn authorize_coordinator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.oracle.coordinator, RaffleError::Unauthorized);
        Ok(())
    }

    pub fn authorize_randomness_account(&self, account: &Pubkey) -> Result<()> {
        require!(
            self.oracle.randomness_account != Pubkey::default(),
            RaffleError::Unauthorized
        );
        require_keys_eq!(
            *account,
            self.oracle.randomness_account,
            RaffleError::Unauthorized
        );
        Ok(())
    }

    /// Matches a delivery against the pending request and draws the winner.
    /// Nothing is mutated; `settle` applies the outcome once the prize moved.
    pub fn resolve_winner(&self, request_id: u64, random_words: &[RandomWord]) -> Result<Fulfillment> {
        let pending = match &self.pending_request {
            Some(pending) if pending.request_id == request_id => pending,
            _ => {
                msg!("Rejected fulfillment for request {}", request_id);
                return err!(RaffleError::UnknownRequest);
            }
        };
        let word = random_words.first().ok_or(RaffleError::MissingRandomWords)?;

        if self.players.is_empty() {
            msg!("Request {} pending with an empty round", pending.request_id);
            return err!(RaffleError::NoParticipants);
        }

        let index = winner_index(word, self.participant_count())?;
        let winner = self.participant_at(index)?;

        Ok(Fulfillment {
            request_id,
            winner_index: index,
            winner,
            prize: self.balance,
        })
    }

    /// Closes the round after the prize reached the winner and opens the next.
    pub fn settle(&mut self, fulfillment: &Fulfillment, now: i64) -> Result<()> {
        require!(
            self.state == RaffleState::Calculating,
            RaffleError::UnknownRequest
        );
        require!(
            self.pending_request
                .as_ref()
                .is_some_and(|pending| pending.request_id == fulfillment.request_id),
            RaffleError::UnknownRequest
        );
        let next_round = self.round.checked_add(1).ok_or(RaffleError::MathOverflow)?;

        self.recent_winner = Some(WinnerRecord {
            winner: fulfillment.winner,
            round: self.round,
            prize: fulfillment.prize,
            players: std::mem::take(&mut self.players),
            paid_at: now,
        });
        self.balance = 0;
        self.last_timestamp = now;
        self.pending_request = None;
        self.state = RaffleState::Open;
        self.round = next_round;
        Ok(())
    }

    pub fn recent_winner(&self) -> Option<Pubkey> {
        self.recent_winner.as_ref().map(|record| record.winner)
    }
}

/// The last request handed to the oracle.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct QueuedRequest {
    pub request_id: u64,
    pub request: RandomWordsRequest,
    pub fulfilled: bool,
}

/// Where the oracle picks up work for one raffle.
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct RequestQueue {
    pub bump: u8,

    /// The raffle this queue serves.
    pub raffle: Pubkey,

    /// Last id handed out. Ids start at 1.
    pub request_counter: u64,

    pub last_request: Option<QueuedRequest>,
}

impl RequestQueue {
    pub fn mark_fulfilled(&mut self, request_id: u64) {
        if let Some(queued) = self.last_request.as_mut() {
            if queued.request_id == request_id {
                queued.fulfilled = true;
            }
        }
    }
}

impl RandomnessCoordinator for RequestQueue {
    fn request_random_words(&mut self, request: &RandomWordsRequest) -> Result<u64> {
        let request_id = self
            .request_counter
            .checked_add(1)
            .ok_or(RaffleError::MathOverflow)?;

        self.request_counter = request_id;
        self.last_request = Some(QueuedRequest {
            request_id,
            request: request.clone(),
            fulfilled: false,
        });
        Ok(request_id)
    }
}
