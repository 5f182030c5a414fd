/// Constants for the gas service
pub const GAS_SERVICE_SEED: &[u8] = b"gas_service";
pub const GAS_VAULT_SEED: &[u8] = b"gas_vault";
pub const UPGRADE_AUTHORITY_SEED: &[u8] = b"upgrade";

/// Layout version of the `GasService` account
pub const STATE_VERSION: u8 = 1;

/// Maximum sizes for DOS protection
pub const MAX_DESTINATION_CHAIN_SIZE: usize = 64;
pub const MAX_DESTINATION_ADDRESS_SIZE: usize = 128;
pub const MAX_SYMBOL_SIZE: usize = 32;

/// Fee collection batch limit
pub const MAX_COLLECT_FEES_TOKENS: usize = 8;
