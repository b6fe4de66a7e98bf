use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, available_vehicles, create_booking, get_availability, get_booking, get_summary,
    get_vehicle, list_bookings, list_vehicles, rented_vehicles,
};

/// Creates the API router with all rental endpoints
///
/// Command endpoints (Write operations):
/// - POST /bookings - Register a booking
///
/// Query endpoints (Read operations):
/// - GET /vehicles, /vehicles/:plate, /vehicles/available, /vehicles/rented
/// - GET /availability - Availability report for a date range
/// - GET /bookings, /bookings/:id - Booking history and booking sheet
/// - GET /summary - Fleet totals
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/bookings", post(create_booking).get(list_bookings))
        // Query endpoints (Read operations)
        .route("/bookings/:id", get(get_booking))
        .route("/vehicles", get(list_vehicles))
        .route("/vehicles/available", get(available_vehicles))
        .route("/vehicles/rented", get(rented_vehicles))
        .route("/vehicles/:plate", get(get_vehicle))
        .route("/availability", get(get_availability))
        .route("/summary", get(get_summary))
        // Add tracing middleware
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
