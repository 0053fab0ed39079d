use anchor_lang::prelude::*;

use crate::error::RaffleError;
use crate::state::{Fulfillment, Raffle};

/// Pays the round's balance to the drawn winner and opens the next round.
///
/// The prize leaves the raffle PDA by direct lamport debit. On any error the
/// round stays `Calculating` with its request still pending.
pub fn pay_and_reset<'info>(
    raffle: &mut Account<'info, Raffle>,
    winner: &AccountInfo<'info>,
    fulfillment: &Fulfillment,
    now: i64,
) -> Result<()> {
    require_keys_eq!(
        *winner.key,
        fulfillment.winner,
        RaffleError::WinnerAccountMismatch
    );

    let raffle_info = raffle.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(raffle_info.data_len());
    let (raffle_lamports, winner_lamports) = prize_balances(
        raffle_info.lamports(),
        winner.lamports(),
        rent_floor,
        fulfillment.prize,
    )?;

    **raffle_info.try_borrow_mut_lamports()? = raffle_lamports;
    **winner.try_borrow_mut_lamports()? = winner_lamports;

    msg!("Paid {} lamports to {}", fulfillment.prize, fulfillment.winner);

    raffle.settle(fulfillment, now)
}

/// Balances of the raffle and the winner after moving `prize`.
/// The raffle must stay rent exempt.
fn prize_balances(
    raffle_lamports: u64,
    winner_lamports: u64,
    rent_floor: u64,
    prize: u64,
) -> Result<(u64, u64)> {
    let raffle_after = raffle_lamports
        .checked_sub(prize)
        .filter(|remaining| *remaining >= rent_floor)
        .ok_or(RaffleError::TransferFailed)?;
    let winner_after = winner_lamports
        .checked_add(prize)
        .ok_or(RaffleError::TransferFailed)?;

    Ok((raffle_after, winner_after))
}
