use rusty_fleet_rental::{
    api::{handlers::AppState, router::create_router},
    application::rental::{RentalContext, ServiceDependencies},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rusty_fleet_rental=debug,tower_http=debug,axum=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize adapters (fixed fleet, empty ledger)
    let service_deps = ServiceDependencies::in_memory();
    tracing::info!(
        vehicles = service_deps.fleet_registry.list_all().len(),
        "Fleet registry initialized"
    );

    // Create application state
    let app_state = Arc::new(AppState {
        rental: RentalContext::new(service_deps),
    });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
