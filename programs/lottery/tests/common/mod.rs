#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use lottery::error::LotteryError;
use lottery::ledger::{Ledger, Transfer};
use lottery::randomness::RandomnessSource;
use lottery::state::{Lottery, LotteryConfig};

pub const ONE_SOL: u64 = 1_000_000_000;

/// Balances kept in memory. `settle` applies a batch all-or-nothing.
#[derive(Default, Clone, Debug)]
pub struct MemoryLedger {
    balances: HashMap<Pubkey, u64>,
    pub settled: Vec<Transfer>,
}

impl MemoryLedger {
    pub fn fund(&mut self, owner: Pubkey, lamports: u64) {
        *self.balances.entry(owner).or_default() += lamports;
    }
}

impl Ledger for MemoryLedger {
    fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn settle(&mut self, transfers: &[Transfer]) -> Result<()> {
        let mut staged = self.balances.clone();
        for transfer in transfers {
            let from = staged.entry(transfer.from).or_default();
            *from = from
                .checked_sub(transfer.amount)
                .ok_or(LotteryError::InsufficientFunds)?;
            *staged.entry(transfer.to).or_default() += transfer.amount;
        }
        self.balances = staged;
        self.settled.extend_from_slice(transfers);
        Ok(())
    }
}

/// Ledger whose settlement always fails, for rollback checks.
pub struct RejectingLedger(pub MemoryLedger);

impl Ledger for RejectingLedger {
    fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.0.balance_of(owner)
    }

    fn settle(&mut self, _transfers: &[Transfer]) -> Result<()> {
        err!(LotteryError::InsufficientFunds)
    }
}

/// Replays a fixed list of indices, ignoring the bound.
pub struct FixedIndices(pub VecDeque<u64>);

impl FixedIndices {
    pub fn new(indices: &[u64]) -> Self {
        Self(indices.iter().copied().collect())
    }
}

impl RandomnessSource for FixedIndices {
    fn index_below(&mut self, _bound: u64) -> Result<u64> {
        self.0
            .pop_front()
            .ok_or_else(|| error!(LotteryError::RandomnessNotResolved))
    }
}

pub struct Harness {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub lottery: Lottery,
    pub ledger: MemoryLedger,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(LotteryConfig::default())
    }

    pub fn with_config(config: LotteryConfig) -> Self {
        let owner = Pubkey::new_unique();
        Self {
            owner,
            pool: Pubkey::new_unique(),
            lottery: Lottery::new(owner, config, 254).unwrap(),
            ledger: MemoryLedger::default(),
        }
    }

    /// A fresh participant holding `lamports`.
    pub fn participant(&mut self, lamports: u64) -> Pubkey {
        let key = Pubkey::new_unique();
        self.ledger.fund(key, lamports);
        key
    }

    pub fn start(&mut self) -> Result<u64> {
        let owner = self.owner;
        self.lottery.start(&owner)
    }

    pub fn buy(&mut self, who: Pubkey, count: u64) -> Result<u64> {
        self.lottery
            .buy_tickets(&who, count, &self.pool, &mut self.ledger)
    }

    pub fn draw_with(&mut self, caller: Pubkey, slot: u64) -> Result<lottery::DrawOutcome> {
        let mut randomness = FixedIndices::new(&[slot]);
        self.lottery
            .draw(&caller, &self.pool, &mut self.ledger, &mut randomness)
    }

    pub fn balance(&self, who: &Pubkey) -> u64 {
        self.ledger.balance_of(who)
    }

    /// `prize_pool` must always equal the tickets held times the price.
    pub fn assert_pool_invariant(&self) {
        assert_eq!(
            self.lottery.prize_pool(),
            self.lottery.total_tickets() * self.lottery.ticket_price()
        );
    }
}

/// Asserts `result` failed with `expected`.
pub fn assert_lottery_err<T: std::fmt::Debug>(result: Result<T>, expected: LotteryError) {
    let name = expected.name();
    let code = u32::from(expected);
    match result {
        Err(Error::AnchorError(error)) => {
            assert_eq!(
                error.error_code_number, code,
                "expected {}, got {}",
                name, error.error_name
            );
        }
        other => panic!("expected {}, got {:?}", name, other),
    }
}
