pub mod admin;
pub mod collect_fees;
pub mod initialize;
pub mod pay_gas;
pub mod pay_native_gas;
pub mod refund;
pub mod upgrade;

pub use admin::*;
pub use collect_fees::*;
pub use initialize::*;
pub use pay_gas::*;
pub use pay_native_gas::*;
pub use refund::*;
pub use upgrade::*;
