use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::*;
use crate::events::Entered;
use crate::state::Raffle;

/// Accounts required to enter the live round.
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The entrant; pays the entrance fee.
    #[account(mut)]
    pub player: Signer<'info>,

    /// Raffle state account; also holds the collected fees.
    #[account(
        mut,
        seeds = [RAFFLE_SEED.as_bytes()],
        bump = raffle.bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// System program for the fee transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the live round.
///
/// Steps performed:
/// 1. Check `amount` covers the entrance fee and the round is open.
/// 2. Append the caller to the player list.
/// 3. Transfer exactly the entrance fee from the caller to the raffle.
/// 4. Emit `Entered`.
///
/// # Arguments
/// * `ctx` - Context containing EnterRaffle accounts
/// * `amount` - Most the caller agrees to pay, in lamports
pub fn process_enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    let fee = ctx.accounts.raffle.enter(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.raffle.to_account_info(),
            },
        ),
        fee,
    )?;

    let raffle = &ctx.accounts.raffle;
    msg!(
        "Player {} entered round {} ({} entries)",
        player,
        raffle.round,
        raffle.players.len()
    );

    emit!(Entered {
        player,
        round: raffle.round,
        players: raffle.players.len() as u32,
    });

    Ok(())
}
