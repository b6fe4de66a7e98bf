mod errors;
mod queries;
mod rental_service;

pub use errors::{RentalApplicationError, Result};
pub use queries::{
    AvailabilityReport, BookingView, FleetSummary, UnavailableVehicle, VehicleSummary,
    availability_report, fleet_summary, get_booking, list_bookings,
};
pub use rental_service::{
    RentalContext, ServiceDependencies, available_vehicles, find_vehicle, list_vehicles,
    register_booking, rented_vehicles,
};
