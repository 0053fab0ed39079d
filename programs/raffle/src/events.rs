use anchor_lang::prelude::*;

#[event]
pub struct Entered {
    pub player: Pubkey,
    pub round: u64,
    pub players: u32,
}

#[event]
pub struct RequestedRaffleWinner {
    pub request_id: u64,
    pub round: u64,
}

#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub round: u64,
    pub request_id: u64,
    pub prize: u64,
}
