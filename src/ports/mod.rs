pub mod booking_ledger;
pub mod fleet_registry;

pub use booking_ledger::*;
pub use fleet_registry::*;
