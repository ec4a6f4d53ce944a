use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::ledger::AccountLedger;
use crate::state::Lottery;

/// Accounts required to buy lottery tickets.
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The account paying for the tickets; it is credited with the entry.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Lottery state account; the ticket price is transferred into it.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program used to move lamports out of the payer.
    pub system_program: Program<'info, System>,
}

/// Buys `count` tickets in the open round.
///
/// Steps performed:
/// 1. Check the round is open and `count` is at least one.
/// 2. Check the payer can afford `count * ticket_price`.
/// 3. Transfer the lamports from the payer into the lottery account.
/// 4. Record the tickets and grow the prize pool.
///
/// Returns the payer's ticket total for the round.
pub fn process_buy_ticket(ctx: Context<BuyTicket>, count: u64) -> Result<u64> {
    let pool = ctx.accounts.lottery.key();
    let payer = ctx.accounts.payer.key();

    let mut ledger = AccountLedger::new(
        *ctx.program_id,
        ctx.accounts.system_program.to_account_info(),
        vec![
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.lottery.to_account_info(),
        ],
    );

    let lottery = &mut ctx.accounts.lottery;
    let tickets = lottery.buy_tickets(&payer, count, &pool, &mut ledger)?;

    emit!(TicketsPurchased {
        id: lottery.id,
        participant: payer,
        count,
        tickets,
        prize_pool: lottery.prize_pool,
    });
    Ok(tickets)
}

#[event]
pub struct TicketsPurchased {
    pub id: u64,
    pub participant: Pubkey,
    pub count: u64,
    pub tickets: u64,
    pub prize_pool: u64,
}
