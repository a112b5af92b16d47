use crate::state::AppState;
use axum::Router;

pub mod customers;

pub fn all_routes() -> Router<AppState> {
    Router::new().merge(customers::create_route())
}
