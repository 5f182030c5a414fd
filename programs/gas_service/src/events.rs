//! Events consumed by relayers as the record of every payment.
//!
//! Field order is part of the wire contract with relayer software.

use anchor_lang::prelude::*;

use crate::state::TxHash;

/// Token-funded gas paid for a contract call
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct GasPaidForContractCall {
    pub source_address: Pubkey,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload_hash: [u8; 32],
    pub gas_token: Pubkey,
    pub gas_fee_amount: u64,
    pub refund_address: Pubkey,
}

/// Token-funded gas paid for a contract call that also transfers a token
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct GasPaidForContractCallWithToken {
    pub source_address: Pubkey,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload_hash: [u8; 32],
    pub symbol: String,
    pub amount: u64,
    pub gas_token: Pubkey,
    pub gas_fee_amount: u64,
    pub refund_address: Pubkey,
}

/// Native gas paid for a contract call
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct NativeGasPaidForContractCall {
    pub source_address: Pubkey,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload_hash: [u8; 32],
    pub gas_fee_amount: u64,
    pub refund_address: Pubkey,
}

/// Native gas paid for a contract call that also transfers a token
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct NativeGasPaidForContractCallWithToken {
    pub source_address: Pubkey,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload_hash: [u8; 32],
    pub symbol: String,
    pub amount: u64,
    pub gas_fee_amount: u64,
    pub refund_address: Pubkey,
}

/// Token-funded gas paid for an express call with token
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct GasPaidForExpressCallWithToken {
    pub source_address: Pubkey,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload_hash: [u8; 32],
    pub symbol: String,
    pub amount: u64,
    pub gas_token: Pubkey,
    pub gas_fee_amount: u64,
    pub refund_address: Pubkey,
}

/// Native gas paid for an express call with token
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct NativeGasPaidForExpressCallWithToken {
    pub source_address: Pubkey,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload_hash: [u8; 32],
    pub symbol: String,
    pub amount: u64,
    pub gas_fee_amount: u64,
    pub refund_address: Pubkey,
}

/// Token-funded gas added to an already sent call
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct GasAdded {
    pub tx_hash: TxHash,
    pub log_index: u64,
    pub gas_token: Pubkey,
    pub gas_fee_amount: u64,
    pub refund_address: Pubkey,
}

/// Native gas added to an already sent call
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct NativeGasAdded {
    pub tx_hash: TxHash,
    pub log_index: u64,
    pub gas_fee_amount: u64,
    pub refund_address: Pubkey,
}

/// Token-funded express gas added to an already sent call
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressGasAdded {
    pub tx_hash: TxHash,
    pub log_index: u64,
    pub gas_token: Pubkey,
    pub gas_fee_amount: u64,
    pub refund_address: Pubkey,
}

/// Native express gas added to an already sent call
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct NativeExpressGasAdded {
    pub tx_hash: TxHash,
    pub log_index: u64,
    pub gas_fee_amount: u64,
    pub refund_address: Pubkey,
}

/// Event emitted when the owner returns funds from the vault
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct Refunded {
    pub tx_hash: TxHash,
    pub log_index: u64,
    pub receiver: Pubkey,
    pub token: Pubkey,
    pub amount: u64,
}

/// Program code replaced by the owner
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct Upgraded {
    pub implementation: Pubkey,
}

/// Owner capability handed to a new address
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct OwnershipTransferred {
    pub new_owner: Pubkey,
}
