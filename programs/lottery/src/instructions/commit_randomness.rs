use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::state::Lottery;

/// Accounts required to commit a randomness account for the open round.
///
/// Ensures:
/// 1. Only the owner of the lottery can commit the randomness, once per round.
/// 2. The randomness account was seeded in the previous slot and has not
///    been revealed yet.
#[derive(Accounts)]
pub struct CommitRandomness<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_commit_randomness(ctx: Context<CommitRandomness>) -> Result<()> {
    let clock = Clock::get()?;
    let randomness_key = ctx.accounts.randomness_account_data.key();

    let lottery = &mut ctx.accounts.lottery;
    // Round checks run before the Switchboard parse so they take precedence.
    lottery.ensure_can_commit(ctx.accounts.owner.key)?;

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| LotteryError::IncorrectRandomnessAccount)?;
    if randomness_data.seed_slot != clock.slot.saturating_sub(1) {
        return err!(LotteryError::RandomnessAlreadyRevealed);
    }

    lottery.commit_randomness(ctx.accounts.owner.key, randomness_key)?;

    msg!("Round {} committed to randomness {}", lottery.id, randomness_key);
    Ok(())
}
