//! In-memory stand-ins for the System and Token programs.

use std::collections::HashMap;
use std::fmt::Debug;

use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;

use crate::errors::GasServiceError;
use crate::utils::{Asset, ValueTransfer};

/// A value movement observed by the vault, the analog of a token `Transfer`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Movement {
    pub asset: Asset,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

/// Balances of every (asset, holder) pair. Moves fail like the real programs
/// do when the source holds too little.
pub struct MemoryVault {
    pub key: Pubkey,
    balances: HashMap<(Asset, Pubkey), u64>,
    pub movements: Vec<Movement>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self {
            key: Pubkey::new_unique(),
            balances: HashMap::new(),
            movements: Vec::new(),
        }
    }

    pub fn fund(&mut self, asset: Asset, holder: Pubkey, amount: u64) {
        *self.balances.entry((asset, holder)).or_default() += amount;
    }

    pub fn balance(&self, asset: Asset, holder: &Pubkey) -> u64 {
        self.balances.get(&(asset, *holder)).copied().unwrap_or(0)
    }

    pub fn vault_balance(&self, asset: Asset) -> u64 {
        self.balance(asset, &self.key)
    }

    fn move_value(&mut self, asset: Asset, from: Pubkey, to: Pubkey, amount: u64) -> Result<()> {
        let available = self.balance(asset, &from);
        if available < amount {
            return Err(ProgramError::InsufficientFunds.into());
        }

        self.balances.insert((asset, from), available - amount);
        *self.balances.entry((asset, to)).or_default() += amount;
        self.movements.push(Movement {
            asset,
            from,
            to,
            amount,
        });

        Ok(())
    }
}

impl ValueTransfer for MemoryVault {
    fn receive_native(&mut self, payer: &Pubkey, amount: u64) -> Result<()> {
        let vault = self.key;
        self.move_value(Asset::Native, *payer, vault, amount)
    }

    fn pull_token(&mut self, token: &Pubkey, payer: &Pubkey, amount: u64) -> Result<()> {
        let vault = self.key;
        self.move_value(Asset::Token(*token), *payer, vault, amount)
    }

    fn send(&mut self, asset: Asset, recipient: &Pubkey, amount: u64) -> Result<()> {
        let vault = self.key;
        self.move_value(asset, vault, *recipient, amount)
    }

    fn balance_of(&self, asset: Asset) -> Result<u64> {
        Ok(self.vault_balance(asset))
    }
}

pub fn assert_gas_service_error<T: Debug>(result: Result<T>, expected: GasServiceError) {
    match result {
        Err(Error::AnchorError(error)) => assert_eq!(
            error.error_code_number,
            expected as u32 + ERROR_CODE_OFFSET,
            "unexpected error {}",
            error.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
