use anchor_lang::solana_program::keccak;

/// Key of a call that has not been sent yet: keccak256 of its payload.
/// Relayers match it together with the destination chain and address.
pub fn payload_hash(payload: &[u8]) -> [u8; 32] {
    keccak::hash(payload).to_bytes()
}
