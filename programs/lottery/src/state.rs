use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::LotteryError;

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The only signer allowed to start a round and draw its winner.
    pub owner: Pubkey,

    /// Identifier of the latest round. `0` until the first `start`.
    pub id: u64,

    /// `true` between a successful `start` and the following `draw`.
    pub active: bool,

    /// The price (in lamports) of a single ticket.
    pub ticket_price: u64,

    /// Lamports collected for the open round.
    /// Always equals the sum of `tickets * ticket_price` over `entries`.
    pub prize_pool: u64,

    /// Distinct participants required before a draw is allowed.
    pub min_participants: u16,

    /// Owner commission in basis points.
    pub commission_bps: u16,

    /// Switchboard randomness account committed for the open round,
    /// `Pubkey::default()` when nothing has been committed.
    pub randomness_account: Pubkey,

    /// Participants of the open round, in the order they first bought.
    #[max_len(MAX_PARTICIPANTS)]
    pub entries: Vec<Entry>,
}

#[derive(InitSpace, AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub participant: Pubkey,
    pub tickets: u64,
}

/// Parameters fixed at deployment.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LotteryConfig {
    pub ticket_price: u64,
    pub min_participants: u16,
    pub commission_bps: u16,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            ticket_price: TICKET_PRICE,
            min_participants: MIN_PARTICIPANTS,
            commission_bps: COMMISSION_BPS,
        }
    }
}

impl LotteryConfig {
    pub fn validate(&self) -> Result<()> {
        require!(self.ticket_price > 0, LotteryError::InvalidArgument);
        require!(self.min_participants > 0, LotteryError::InvalidArgument);
        require!(
            u64::from(self.commission_bps) <= BPS_DENOMINATOR,
            LotteryError::InvalidArgument
        );
        Ok(())
    }
}

impl Lottery {
    /// Builds an idle lottery with no rounds played yet.
    pub fn new(owner: Pubkey, config: LotteryConfig, bump: u8) -> Result<Self> {
        let mut lottery = Self {
            bump: 0,
            owner: Pubkey::default(),
            id: 0,
            active: false,
            ticket_price: 0,
            prize_pool: 0,
            min_participants: 0,
            commission_bps: 0,
            randomness_account: Pubkey::default(),
            entries: Vec::new(),
        };
        lottery.init(owner, config, bump)?;
        Ok(lottery)
    }

    /// Resets every field for a freshly deployed lottery.
    pub fn init(&mut self, owner: Pubkey, config: LotteryConfig, bump: u8) -> Result<()> {
        config.validate()?;
        self.bump = bump;
        self.owner = owner;
        self.id = 0;
        self.active = false;
        self.ticket_price = config.ticket_price;
        self.prize_pool = 0;
        self.min_participants = config.min_participants;
        self.commission_bps = config.commission_bps;
        self.randomness_account = Pubkey::default();
        self.entries.clear();
        Ok(())
    }

    pub fn config(&self) -> LotteryConfig {
        LotteryConfig {
            ticket_price: self.ticket_price,
            min_participants: self.min_participants,
            commission_bps: self.commission_bps,
        }
    }

    pub fn status(&self) -> bool {
        self.active
    }

    pub fn ticket_price(&self) -> u64 {
        self.ticket_price
    }

    pub fn current_id(&self) -> u64 {
        self.id
    }

    pub fn prize_pool(&self) -> u64 {
        self.prize_pool
    }

    /// Tickets held by `participant` in the open round, `0` if absent.
    pub fn tickets_of(&self, participant: &Pubkey) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.participant == *participant)
            .map_or(0, |entry| entry.tickets)
    }

    pub fn participant_count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_tickets(&self) -> u64 {
        self.entries.iter().map(|entry| entry.tickets).sum()
    }

    /// `true` once randomness has been committed for the open round.
    pub fn is_committed(&self) -> bool {
        self.randomness_account != Pubkey::default()
    }

    pub fn is_owner(&self, caller: &Pubkey) -> bool {
        self.owner == *caller
    }
}
