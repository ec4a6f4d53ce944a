use anchor_lang::prelude::*;
use solana_program::{program::invoke, system_instruction};

use crate::error::LotteryError;

/// A single lamport movement staged by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

/// Balances and fund movements the lottery depends on.
///
/// `settle` must apply every transfer or none of them: the engine only
/// updates its own state once settlement succeeds.
pub trait Ledger {
    fn balance_of(&self, owner: &Pubkey) -> u64;

    fn settle(&mut self, transfers: &[Transfer]) -> Result<()>;
}

/// Ledger backed by the lamports of the accounts passed to an instruction.
///
/// Accounts owned by this program (the lottery PDA) are debited directly;
/// any other source must be a signer and is debited through the System
/// Program. A failure anywhere aborts the transaction, which reverts the
/// transfers already applied.
pub struct AccountLedger<'info> {
    program_id: Pubkey,
    system_program: AccountInfo<'info>,
    accounts: Vec<AccountInfo<'info>>,
}

impl<'info> AccountLedger<'info> {
    pub fn new(
        program_id: Pubkey,
        system_program: AccountInfo<'info>,
        accounts: Vec<AccountInfo<'info>>,
    ) -> Self {
        Self {
            program_id,
            system_program,
            accounts,
        }
    }

    fn account(&self, key: &Pubkey) -> Result<&AccountInfo<'info>> {
        self.accounts
            .iter()
            .find(|info| info.key == key)
            .ok_or_else(|| error!(LotteryError::UnknownAccount))
    }

    fn apply(&self, transfer: &Transfer) -> Result<()> {
        let from = self.account(&transfer.from)?;
        let to = self.account(&transfer.to)?;

        if *from.owner == self.program_id {
            let remaining = from
                .lamports()
                .checked_sub(transfer.amount)
                .ok_or(LotteryError::InsufficientFunds)?;
            let credited = to
                .lamports()
                .checked_add(transfer.amount)
                .ok_or(LotteryError::ArithmeticOverflow)?;
            **from.try_borrow_mut_lamports()? = remaining;
            **to.try_borrow_mut_lamports()? = credited;
        } else {
            require!(
                from.lamports() >= transfer.amount,
                LotteryError::InsufficientFunds
            );
            invoke(
                &system_instruction::transfer(from.key, to.key, transfer.amount),
                &[from.clone(), to.clone(), self.system_program.clone()],
            )?;
        }
        Ok(())
    }
}

impl<'info> Ledger for AccountLedger<'info> {
    fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.account(owner).map_or(0, |info| info.lamports())
    }

    fn settle(&mut self, transfers: &[Transfer]) -> Result<()> {
        for transfer in transfers {
            self.apply(transfer)?;
        }
        Ok(())
    }
}
