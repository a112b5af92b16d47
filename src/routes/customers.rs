use crate::{
    errors,
    extract::{AppJson, AppPath, PatchRequest},
    models::customers::{Customer, CustomerId},
    services, AppState,
};
use axum::{extract, http, routing, Json, Router};

pub async fn list_customers(
    extract::State(state): extract::State<AppState>,
) -> Json<Vec<Customer>> {
    Json(services::customers::list_customers(state.store.as_ref()))
}

pub async fn get_customer(
    extract::State(state): extract::State<AppState>,
    AppPath(id): AppPath<CustomerId>,
) -> Result<Json<Customer>, errors::AppError> {
    let customer = services::customers::get_customer(state.store.as_ref(), id)?;
    Ok(Json(customer))
}

pub async fn create_customer(
    extract::State(state): extract::State<AppState>,
    AppJson(customer): AppJson<Customer>,
) -> Json<Customer> {
    Json(services::customers::create_customer(
        state.store.as_ref(),
        customer,
    ))
}

pub async fn replace_customer(
    extract::State(state): extract::State<AppState>,
    AppPath(id): AppPath<CustomerId>,
    AppJson(customer): AppJson<Customer>,
) -> Result<Json<Customer>, errors::AppError> {
    let customer = services::customers::replace_customer(state.store.as_ref(), id, customer)?;
    Ok(Json(customer))
}

pub async fn patch_customer(
    extract::State(state): extract::State<AppState>,
    AppPath(id): AppPath<CustomerId>,
    request: PatchRequest,
) -> Result<Json<Customer>, errors::AppError> {
    let customer = services::customers::patch_customer(state.store.as_ref(), id, &request)?;
    Ok(Json(customer))
}

pub async fn delete_customer(
    extract::State(state): extract::State<AppState>,
    AppPath(id): AppPath<CustomerId>,
) -> Result<http::StatusCode, errors::AppError> {
    services::customers::delete_customer(state.store.as_ref(), id)?;
    Ok(http::StatusCode::NO_CONTENT)
}

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/customers", routing::get(list_customers))
        .route("/customers", routing::post(create_customer))
        .route("/customers/{id}", routing::get(get_customer))
        .route("/customers/{id}", routing::put(replace_customer))
        .route("/customers/{id}", routing::patch(patch_customer))
        .route("/customers/{id}", routing::delete(delete_customer))
}
