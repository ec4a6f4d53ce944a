use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::Lottery;

/// Read-only access to the lottery account for the view instructions.
#[derive(Accounts)]
pub struct ReadLottery<'info> {
    #[account(
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,
}

pub fn process_get_lottery_status(ctx: Context<ReadLottery>) -> Result<bool> {
    Ok(ctx.accounts.lottery.status())
}

pub fn process_get_ticket_price(ctx: Context<ReadLottery>) -> Result<u64> {
    Ok(ctx.accounts.lottery.ticket_price())
}

pub fn process_get_current_lottery_id(ctx: Context<ReadLottery>) -> Result<u64> {
    Ok(ctx.accounts.lottery.current_id())
}

pub fn process_get_prize_pool(ctx: Context<ReadLottery>) -> Result<u64> {
    Ok(ctx.accounts.lottery.prize_pool())
}

pub fn process_get_participant_tickets(
    ctx: Context<ReadLottery>,
    participant: Pubkey,
) -> Result<u64> {
    Ok(ctx.accounts.lottery.tickets_of(&participant))
}
