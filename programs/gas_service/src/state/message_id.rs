/// Source chain transaction hash. Wide enough for a Solana signature; shorter
/// hashes are left-aligned and zero padded.
pub type TxHash = [u8; 64];

/// Identifies a cross-chain call that was already sent, by the transaction
/// that sent it and the position of its log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageId {
    pub tx_hash: TxHash,
    pub log_index: u64,
}

impl MessageId {
    /// Reported by refunds that are not tied to a message
    pub const ZERO: MessageId = MessageId {
        tx_hash: [0; 64],
        log_index: 0,
    };

    pub fn new(tx_hash: TxHash, log_index: u64) -> Self {
        Self { tx_hash, log_index }
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::ZERO
    }
}
