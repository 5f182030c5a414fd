pub mod hash;
pub mod transfer;

pub use hash::*;
pub use transfer::*;
