use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::error::LotteryError;

/// Supplies the winning slot of a draw.
///
/// Implementations must return a value uniformly distributed over
/// `[0, bound)`; `bound` is the number of tickets sold and is never zero.
pub trait RandomnessSource {
    fn index_below(&mut self, bound: u64) -> Result<u64>;
}

impl<F> RandomnessSource for F
where
    F: FnMut(u64) -> Result<u64>,
{
    fn index_below(&mut self, bound: u64) -> Result<u64> {
        self(bound)
    }
}

/// Reduces a 32-byte random value to an index below `bound`.
///
/// Only the first 16 bytes are used; the modulo bias is at most
/// `bound / 2^128`.
pub fn index_from_seed(value: &[u8; 32], bound: u64) -> u64 {
    let mut head = [0u8; 16];
    head.copy_from_slice(&value[..16]);
    (u128::from_le_bytes(head) % u128::from(bound)) as u64
}

/// Reads the revealed value of a committed Switchboard on-demand
/// randomness account.
pub struct SwitchboardRandomness<'a, 'info> {
    account: &'a AccountInfo<'info>,
    committed: Pubkey,
    clock: Clock,
}

impl<'a, 'info> SwitchboardRandomness<'a, 'info> {
    pub fn new(account: &'a AccountInfo<'info>, committed: Pubkey, clock: Clock) -> Self {
        Self {
            account,
            committed,
            clock,
        }
    }
}

impl<'a, 'info> RandomnessSource for SwitchboardRandomness<'a, 'info> {
    fn index_below(&mut self, bound: u64) -> Result<u64> {
        require_keys_eq!(
            self.account.key(),
            self.committed,
            LotteryError::IncorrectRandomnessAccount
        );

        let randomness_data = RandomnessAccountData::parse(self.account.data.borrow())
            .map_err(|_| LotteryError::IncorrectRandomnessAccount)?;
        let revealed_random_value = randomness_data
            .get_value(&self.clock)
            .map_err(|_| LotteryError::RandomnessNotResolved)?;

        msg!("Randomness result: {}", revealed_random_value[0]);

        Ok(index_from_seed(&revealed_random_value, bound))
    }
}
