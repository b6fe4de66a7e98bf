pub mod booking;
pub mod commands;
pub mod customer;
pub mod errors;
pub mod value_objects;
pub mod vehicle;

pub use booking::Booking;
pub use customer::Customer;
pub use errors::*;
pub use value_objects::*;
pub use vehicle::{EngineType, Vehicle, VehicleStatus};
