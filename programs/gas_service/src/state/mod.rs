pub mod gas_service;
pub mod message_id;
pub mod ownable;

pub use gas_service::*;
pub use message_id::*;
pub use ownable::*;
