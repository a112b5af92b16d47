use axum::Router;
use std::sync::Arc;

pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod patch;
pub mod router;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;

pub use state::AppState;

/// Builds the application router over a fresh in-memory store.
pub fn app(config: config::Config) -> Router {
    let store = Arc::new(store::InMemoryCustomerStore::new());

    if config.seed_data {
        seed::load_customers(store.as_ref());
    }

    router::create_router(AppState::new(config, store))
}
