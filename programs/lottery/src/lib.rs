use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod randomness;
pub mod state;

pub use engine::DrawOutcome;

declare_id!("2RTh2Y4e2N421EbSnUYTKdGqDHJH7etxZb3VrWDMpNMY");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize_lottery(ctx: Context<InitializeLottery>) -> Result<()> {
        process_initialize_lottery(ctx)
    }

    pub fn start_lottery(ctx: Context<StartLottery>) -> Result<u64> {
        process_start_lottery(ctx)
    }

    pub fn buy_ticket(ctx: Context<BuyTicket>, count: u64) -> Result<u64> {
        process_buy_ticket(ctx, count)
    }

    pub fn commit_randomness(ctx: Context<CommitRandomness>) -> Result<()> {
        process_commit_randomness(ctx)
    }

    pub fn draw_winner<'info>(
        ctx: Context<'_, '_, '_, 'info, DrawWinner<'info>>,
    ) -> Result<DrawOutcome> {
        process_draw_winner(ctx)
    }

    pub fn get_lottery_status(ctx: Context<ReadLottery>) -> Result<bool> {
        process_get_lottery_status(ctx)
    }

    pub fn get_ticket_price(ctx: Context<ReadLottery>) -> Result<u64> {
        process_get_ticket_price(ctx)
    }

    pub fn get_current_lottery_id(ctx: Context<ReadLottery>) -> Result<u64> {
        process_get_current_lottery_id(ctx)
    }

    pub fn get_prize_pool(ctx: Context<ReadLottery>) -> Result<u64> {
        process_get_prize_pool(ctx)
    }

    pub fn get_participant_tickets(ctx: Context<ReadLottery>, participant: Pubkey) -> Result<u64> {
        process_get_participant_tickets(ctx, participant)
    }
}
