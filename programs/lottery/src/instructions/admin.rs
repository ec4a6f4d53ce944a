use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::{Lottery, LotteryConfig};

/// Accounts required to deploy the lottery.
/// The payer becomes the owner allowed to start rounds and draw winners.
#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The lottery state account; it also holds the prize pool lamports.
    #[account(
        init,
        payer = payer,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Initializes the lottery with the deployment constants and sets the owner.
pub fn process_initialize_lottery(ctx: Context<InitializeLottery>) -> Result<()> {
    let owner = ctx.accounts.payer.key();
    let config = LotteryConfig::default();

    ctx.accounts
        .lottery
        .init(owner, config, ctx.bumps.lottery)?;

    msg!(
        "Lottery initialized: owner {}, ticket price {}, min participants {}, commission {} bps",
        owner,
        config.ticket_price,
        config.min_participants,
        config.commission_bps
    );
    Ok(())
}

/// Accounts required to open a new round.
#[derive(Accounts)]
pub struct StartLottery<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Opens the next round. Only the owner may call it, and only while idle.
pub fn process_start_lottery(ctx: Context<StartLottery>) -> Result<u64> {
    let id = ctx.accounts.lottery.start(ctx.accounts.owner.key)?;

    emit!(LotteryStarted {
        id,
        ticket_price: ctx.accounts.lottery.ticket_price,
    });
    Ok(id)
}

#[event]
pub struct LotteryStarted {
    pub id: u64,
    pub ticket_price: u64,
}
