use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::engine::DrawOutcome;
use crate::ledger::AccountLedger;
use crate::randomness::SwitchboardRandomness;
use crate::state::Lottery;

/// Accounts required to draw the winner of the open round.
///
/// Every participant wallet of the round must be passed as a writable
/// remaining account so the prize can be paid to whichever one wins.
#[derive(Accounts)]
pub struct DrawWinner<'info> {
    /// The lottery owner; receives the commission.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The main lottery state account holding the prize pool.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// The randomness account committed for this round.
    /// CHECK: Matched against the committed key and parsed in the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Draws the winner and pays out the pool.
///
/// Steps:
/// 1. Verify the owner, the open round and the participant quorum.
/// 2. Read the revealed Switchboard value and map it to a ticket slot.
/// 3. Pay the commission to the owner and the rest of the pool to the winner.
/// 4. Close the round.
pub fn process_draw_winner<'info>(
    ctx: Context<'_, '_, '_, 'info, DrawWinner<'info>>,
) -> Result<DrawOutcome> {
    let clock = Clock::get()?;
    let pool = ctx.accounts.lottery.key();
    let owner = ctx.accounts.owner.key();
    let randomness_info = ctx.accounts.randomness_account_data.to_account_info();

    let mut accounts = vec![
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.lottery.to_account_info(),
    ];
    accounts.extend(ctx.remaining_accounts.iter().cloned());
    let mut ledger = AccountLedger::new(
        *ctx.program_id,
        ctx.accounts.system_program.to_account_info(),
        accounts,
    );

    let lottery = &mut ctx.accounts.lottery;
    let mut randomness =
        SwitchboardRandomness::new(&randomness_info, lottery.randomness_account, clock);
    let outcome = lottery.draw(&owner, &pool, &mut ledger, &mut randomness)?;

    emit!(WinnerDrawn::from(outcome));
    Ok(outcome)
}

#[event]
pub struct WinnerDrawn {
    pub id: u64,
    pub winner: Pubkey,
    pub winning_slot: u64,
    pub winner_prize: u64,
    pub commission: u64,
}

impl From<DrawOutcome> for WinnerDrawn {
    fn from(outcome: DrawOutcome) -> Self {
        Self {
            id: outcome.id,
            winner: outcome.winner,
            winning_slot: outcome.winning_slot,
            winner_prize: outcome.winner_prize,
            commission: outcome.commission,
        }
    }
}
