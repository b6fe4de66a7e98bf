pub mod booking_ledger;
pub mod fleet_registry;

pub use booking_ledger::BookingLedger;
pub use fleet_registry::FleetRegistry;
