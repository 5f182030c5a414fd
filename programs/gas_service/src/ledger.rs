//! Payment acceptance, refunds and fee collection.
//!
//! The ledger keeps no per-payment records. Every payment moves value into
//! the shared vault and yields exactly one event; relayers treat the event
//! stream as the source of truth for who paid what for which call.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GasServiceError;
use crate::events::*;
use crate::state::{GasService, MessageId, Ownable};
use crate::utils::{payload_hash, Asset, ValueTransfer};

/// A cross-chain contract call that has not been sent yet
#[derive(Clone, Copy, Debug)]
pub struct ContractCall<'a> {
    /// Address initiating the call on this chain
    pub sender: Pubkey,
    pub destination_chain: &'a str,
    pub destination_address: &'a str,
    pub payload: &'a [u8],
}

impl<'a> ContractCall<'a> {
    pub fn new(
        sender: Pubkey,
        destination_chain: &'a str,
        destination_address: &'a str,
        payload: &'a [u8],
    ) -> Self {
        Self {
            sender,
            destination_chain,
            destination_address,
            payload,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            !self.destination_chain.is_empty(),
            GasServiceError::EmptyDestinationChain
        );
        require!(
            self.destination_chain.len() <= MAX_DESTINATION_CHAIN_SIZE,
            GasServiceError::DestinationChainTooLong
        );
        require!(
            !self.destination_address.is_empty(),
            GasServiceError::EmptyDestinationAddress
        );
        require!(
            self.destination_address.len() <= MAX_DESTINATION_ADDRESS_SIZE,
            GasServiceError::DestinationAddressTooLong
        );
        Ok(())
    }

    pub fn payload_hash(&self) -> [u8; 32] {
        payload_hash(self.payload)
    }
}

/// The separate token transfer a call carries. Gas is never paid in it.
#[derive(Clone, Copy, Debug)]
pub struct TokenTransfer<'a> {
    pub symbol: &'a str,
    pub amount: u64,
}

impl<'a> TokenTransfer<'a> {
    pub fn new(symbol: &'a str, amount: u64) -> Self {
        Self { symbol, amount }
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            self.symbol.len() <= MAX_SYMBOL_SIZE,
            GasServiceError::SymbolTooLong
        );
        Ok(())
    }
}

/// Gas ledger operating on the persistent service state and a vault.
pub struct GasLedger<'a, V> {
    service: &'a GasService,
    vault: &'a mut V,
}

impl<'a, V: ValueTransfer> GasLedger<'a, V> {
    pub fn new(service: &'a GasService, vault: &'a mut V) -> Self {
        Self { service, vault }
    }

    pub fn pay_gas_for_contract_call(
        &mut self,
        payer: &Pubkey,
        call: &ContractCall,
        gas_token: Pubkey,
        gas_fee_amount: u64,
        refund_address: Pubkey,
    ) -> Result<GasPaidForContractCall> {
        call.validate()?;
        self.collect_token(payer, &gas_token, gas_fee_amount)?;

        Ok(GasPaidForContractCall {
            source_address: call.sender,
            destination_chain: call.destination_chain.to_string(),
            destination_address: call.destination_address.to_string(),
            payload_hash: call.payload_hash(),
            gas_token,
            gas_fee_amount,
            refund_address,
        })
    }

    pub fn pay_gas_for_contract_call_with_token(
        &mut self,
        payer: &Pubkey,
        call: &ContractCall,
        transfer: &TokenTransfer,
        gas_token: Pubkey,
        gas_fee_amount: u64,
        refund_address: Pubkey,
    ) -> Result<GasPaidForContractCallWithToken> {
        call.validate()?;
        transfer.validate()?;
        self.collect_token(payer, &gas_token, gas_fee_amount)?;

        Ok(GasPaidForContractCallWithToken {
            source_address: call.sender,
            destination_chain: call.destination_chain.to_string(),
            destination_address: call.destination_address.to_string(),
            payload_hash: call.payload_hash(),
            symbol: transfer.symbol.to_string(),
            amount: transfer.amount,
            gas_token,
            gas_fee_amount,
            refund_address,
        })
    }

    pub fn pay_gas_for_express_call_with_token(
        &mut self,
        payer: &Pubkey,
        call: &ContractCall,
        transfer: &TokenTransfer,
        gas_token: Pubkey,
        gas_fee_amount: u64,
        refund_address: Pubkey,
    ) -> Result<GasPaidForExpressCallWithToken> {
        call.validate()?;
        transfer.validate()?;
        self.collect_token(payer, &gas_token, gas_fee_amount)?;

        Ok(GasPaidForExpressCallWithToken {
            source_address: call.sender,
            destination_chain: call.destination_chain.to_string(),
            destination_address: call.destination_address.to_string(),
            payload_hash: call.payload_hash(),
            symbol: transfer.symbol.to_string(),
            amount: transfer.amount,
            gas_token,
            gas_fee_amount,
            refund_address,
        })
    }

    pub fn pay_native_gas_for_contract_call(
        &mut self,
        payer: &Pubkey,
        call: &ContractCall,
        value: u64,
        refund_address: Pubkey,
    ) -> Result<NativeGasPaidForContractCall> {
        call.validate()?;
        self.collect_native(payer, value)?;

        Ok(NativeGasPaidForContractCall {
            source_address: call.sender,
            destination_chain: call.destination_chain.to_string(),
            destination_address: call.destination_address.to_string(),
            payload_hash: call.payload_hash(),
            gas_fee_amount: value,
            refund_address,
        })
    }

    pub fn pay_native_gas_for_contract_call_with_token(
        &mut self,
        payer: &Pubkey,
        call: &ContractCall,
        transfer: &TokenTransfer,
        value: u64,
        refund_address: Pubkey,
    ) -> Result<NativeGasPaidForContractCallWithToken> {
        call.validate()?;
        transfer.validate()?;
        self.collect_native(payer, value)?;

        Ok(NativeGasPaidForContractCallWithToken {
            source_address: call.sender,
            destination_chain: call.destination_chain.to_string(),
            destination_address: call.destination_address.to_string(),
            payload_hash: call.payload_hash(),
            symbol: transfer.symbol.to_string(),
            amount: transfer.amount,
            gas_fee_amount: value,
            refund_address,
        })
    }

    pub fn pay_native_gas_for_express_call_with_token(
        &mut self,
        payer: &Pubkey,
        call: &ContractCall,
        transfer: &TokenTransfer,
        value: u64,
        refund_address: Pubkey,
    ) -> Result<NativeGasPaidForExpressCallWithToken> {
        call.validate()?;
        transfer.validate()?;
        self.collect_native(payer, value)?;

        Ok(NativeGasPaidForExpressCallWithToken {
            source_address: call.sender,
            destination_chain: call.destination_chain.to_string(),
            destination_address: call.destination_address.to_string(),
            payload_hash: call.payload_hash(),
            symbol: transfer.symbol.to_string(),
            amount: transfer.amount,
            gas_fee_amount: value,
            refund_address,
        })
    }

    pub fn add_gas(
        &mut self,
        payer: &Pubkey,
        message_id: MessageId,
        gas_token: Pubkey,
        gas_fee_amount: u64,
        refund_address: Pubkey,
    ) -> Result<GasAdded> {
        self.collect_token(payer, &gas_token, gas_fee_amount)?;

        Ok(GasAdded {
            tx_hash: message_id.tx_hash,
            log_index: message_id.log_index,
            gas_token,
            gas_fee_amount,
            refund_address,
        })
    }

    pub fn add_express_gas(
        &mut self,
        payer: &Pubkey,
        message_id: MessageId,
        gas_token: Pubkey,
        gas_fee_amount: u64,
        refund_address: Pubkey,
    ) -> Result<ExpressGasAdded> {
        self.collect_token(payer, &gas_token, gas_fee_amount)?;

        Ok(ExpressGasAdded {
            tx_hash: message_id.tx_hash,
            log_index: message_id.log_index,
            gas_token,
            gas_fee_amount,
            refund_address,
        })
    }

    pub fn add_native_gas(
        &mut self,
        payer: &Pubkey,
        message_id: MessageId,
        value: u64,
        refund_address: Pubkey,
    ) -> Result<NativeGasAdded> {
        self.collect_native(payer, value)?;

        Ok(NativeGasAdded {
            tx_hash: message_id.tx_hash,
            log_index: message_id.log_index,
            gas_fee_amount: value,
            refund_address,
        })
    }

    pub fn add_native_express_gas(
        &mut self,
        payer: &Pubkey,
        message_id: MessageId,
        value: u64,
        refund_address: Pubkey,
    ) -> Result<NativeExpressGasAdded> {
        self.collect_native(payer, value)?;

        Ok(NativeExpressGasAdded {
            tx_hash: message_id.tx_hash,
            log_index: message_id.log_index,
            gas_fee_amount: value,
            refund_address,
        })
    }

    /// Owner-directed withdrawal to `receiver`.
    ///
    /// Nothing ties `amount` to what was paid for `message_id`; the owner is
    /// trusted to refund only what relayers report as unspent.
    pub fn refund(
        &mut self,
        caller: &Pubkey,
        message_id: Option<MessageId>,
        receiver: Pubkey,
        token: Pubkey,
        amount: u64,
    ) -> Result<Refunded> {
        self.service.ensure_owner(caller)?;
        let asset = Asset::from(token);
        self.release(asset, &receiver, amount)?;

        let message_id = message_id.unwrap_or_default();
        Ok(Refunded {
            tx_hash: message_id.tx_hash,
            log_index: message_id.log_index,
            receiver,
            token: asset.address(),
            amount,
        })
    }

    /// Sweeps `amounts[i]` of `tokens[i]` to `receiver` for every `i`.
    pub fn collect_fees(
        &mut self,
        caller: &Pubkey,
        receiver: Pubkey,
        tokens: &[Pubkey],
        amounts: &[u64],
    ) -> Result<()> {
        self.service.ensure_owner(caller)?;
        require_eq!(tokens.len(), amounts.len(), GasServiceError::InvalidAmounts);
        require!(
            tokens.len() <= MAX_COLLECT_FEES_TOKENS,
            GasServiceError::TooManyFeeTokens
        );

        for (token, amount) in tokens.iter().zip(amounts) {
            self.release(Asset::from(*token), &receiver, *amount)?;
        }

        Ok(())
    }

    fn collect_token(&mut self, payer: &Pubkey, gas_token: &Pubkey, amount: u64) -> Result<()> {
        self.vault.pull_token(gas_token, payer, amount)
    }

    fn collect_native(&mut self, payer: &Pubkey, value: u64) -> Result<()> {
        require!(value > 0, GasServiceError::NothingReceived);
        self.vault.receive_native(payer, value)
    }

    fn release(&mut self, asset: Asset, receiver: &Pubkey, amount: u64) -> Result<()> {
        require_gte!(
            self.vault.balance_of(asset)?,
            amount,
            GasServiceError::InsufficientBalance
        );
        self.vault.send(asset, receiver, amount)
    }
}
