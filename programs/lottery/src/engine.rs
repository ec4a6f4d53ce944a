//! Round transitions of the lottery.
//!
//! Every operation checks all of its preconditions first, stages the
//! lamport movements it needs, hands them to the [`Ledger`] in a single
//! `settle` call and only then mutates the [`Lottery`]. A rejected call
//! leaves the account exactly as it was.

use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_PARTICIPANTS};
use crate::error::LotteryError;
use crate::ledger::{Ledger, Transfer};
use crate::randomness::RandomnessSource;
use crate::state::{Entry, Lottery};

/// Result of a successful draw.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    pub id: u64,
    pub winner: Pubkey,
    pub winning_slot: u64,
    pub winner_prize: u64,
    pub commission: u64,
}

/// Splits `pool` into `(commission, winner_prize)`.
///
/// The commission is floored, so rounding dust always goes to the winner.
pub fn split_pool(pool: u64, commission_bps: u16) -> (u64, u64) {
    let commission =
        (u128::from(pool) * u128::from(commission_bps) / u128::from(BPS_DENOMINATOR)) as u64;
    (commission, pool - commission)
}

impl Lottery {
    /// Opens a new round and returns its id.
    pub fn start(&mut self, caller: &Pubkey) -> Result<u64> {
        require!(self.is_owner(caller), LotteryError::NotOwner);
        require!(!self.active, LotteryError::LotteryActive);

        let id = self.id.checked_add(1).ok_or(LotteryError::ArithmeticOverflow)?;

        self.id = id;
        self.active = true;
        self.prize_pool = 0;
        self.entries.clear();
        self.randomness_account = Pubkey::default();

        msg!("Lottery round {} started", id);
        Ok(id)
    }

    /// Buys `count` tickets for `caller`, paying into `pool`.
    ///
    /// Returns the caller's ticket total for the round.
    pub fn buy_tickets<L: Ledger>(
        &mut self,
        caller: &Pubkey,
        count: u64,
        pool: &Pubkey,
        ledger: &mut L,
    ) -> Result<u64> {
        require!(self.active, LotteryError::LotteryNotActive);
        require!(!self.is_committed(), LotteryError::RandomnessCommitted);
        require!(count >= 1, LotteryError::InvalidArgument);

        let cost = count
            .checked_mul(self.ticket_price)
            .ok_or(LotteryError::ArithmeticOverflow)?;
        let prize_pool = self
            .prize_pool
            .checked_add(cost)
            .ok_or(LotteryError::ArithmeticOverflow)?;
        require!(
            ledger.balance_of(caller) >= cost,
            LotteryError::InsufficientFunds
        );

        let position = self
            .entries
            .iter()
            .position(|entry| entry.participant == *caller);
        if position.is_none() {
            require!(
                self.entries.len() < MAX_PARTICIPANTS,
                LotteryError::ParticipantLimitReached
            );
        }

        ledger.settle(&[Transfer {
            from: *caller,
            to: *pool,
            amount: cost,
        }])?;

        let tickets = match position {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.tickets += count;
                entry.tickets
            }
            None => {
                self.entries.push(Entry {
                    participant: *caller,
                    tickets: count,
                });
                count
            }
        };
        self.prize_pool = prize_pool;

        msg!(
            "{} bought {} ticket(s), holds {}, pool {}",
            caller,
            count,
            tickets,
            prize_pool
        );
        Ok(tickets)
    }

    /// Fails unless `caller` may commit randomness for the open round.
    ///
    /// A round accepts a single commitment; ticket sales stop once it is made.
    pub fn ensure_can_commit(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_owner(caller), LotteryError::NotOwner);
        require!(self.active, LotteryError::LotteryNotActive);
        require!(!self.is_committed(), LotteryError::RandomnessCommitted);
        Ok(())
    }

    /// Records the randomness account the next draw must read from.
    pub fn commit_randomness(&mut self, caller: &Pubkey, randomness_account: Pubkey) -> Result<()> {
        self.ensure_can_commit(caller)?;
        require_keys_neq!(
            randomness_account,
            Pubkey::default(),
            LotteryError::InvalidArgument
        );

        self.randomness_account = randomness_account;
        Ok(())
    }

    /// Picks the winner, pays out from `pool` and closes the round.
    pub fn draw<L: Ledger, R: RandomnessSource>(
        &mut self,
        caller: &Pubkey,
        pool: &Pubkey,
        ledger: &mut L,
        randomness: &mut R,
    ) -> Result<DrawOutcome> {
        require!(self.is_owner(caller), LotteryError::NotOwner);
        require!(self.active, LotteryError::LotteryNotActive);
        require!(
            self.entries.len() >= usize::from(self.min_participants),
            LotteryError::MinParticipantsNotMet
        );

        let total_tickets = self.total_tickets();
        let winning_slot = randomness.index_below(total_tickets)?;
        require!(
            winning_slot < total_tickets,
            LotteryError::RandomnessOutOfRange
        );
        let winner = self
            .owner_of_slot(winning_slot)
            .ok_or(LotteryError::RandomnessOutOfRange)?;

        let (commission, winner_prize) = split_pool(self.prize_pool, self.commission_bps);
        let payouts: Vec<Transfer> = [(self.owner, commission), (winner, winner_prize)]
            .into_iter()
            .filter(|(_, amount)| *amount > 0)
            .map(|(to, amount)| Transfer {
                from: *pool,
                to,
                amount,
            })
            .collect();
        ledger.settle(&payouts)?;

        self.active = false;
        self.prize_pool = 0;
        self.entries.clear();
        self.randomness_account = Pubkey::default();

        msg!(
            "Round {} winner {} (slot {}), prize {}, commission {}",
            self.id,
            winner,
            winning_slot,
            winner_prize,
            commission
        );
        Ok(DrawOutcome {
            id: self.id,
            winner,
            winning_slot,
            winner_prize,
            commission,
        })
    }

    /// Participant holding ticket slot `slot`, counting tickets in entry order.
    pub fn owner_of_slot(&self, slot: u64) -> Option<Pubkey> {
        let mut upper = 0u64;
        self.entries.iter().find_map(|entry| {
            upper += entry.tickets;
            (slot < upper).then_some(entry.participant)
        })
    }
}
