//! Customer API handlers.
//!
//! | Method | Path              | Success                         |
//! |--------|-------------------|---------------------------------|
//! | GET    | `/customers`      | 200, array of customers         |
//! | GET    | `/customers/{id}` | 200, customer                   |
//! | POST   | `/customers`      | 201, created customer           |
//! | PUT    | `/customers/{id}` | 200, updated customer           |
//! | DELETE | `/customers/{id}` | 200, remaining customers by id  |
//!
//! Unknown ids answer 404 `Customer not found`. Request bodies are decoded
//! as JSON whatever their `Content-Type`.

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Serialize;

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::store::{Customer, CustomerDraft};

pub async fn list_customers(State(state): State<AppState>) -> Json<Vec<Customer>> {
    Json(state.store.list().await)
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.store.get(&id).await?))
}

fn decode_draft(body: &[u8]) -> Result<CustomerDraft, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

pub async fn create_customer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let draft = decode_draft(&body)?;
    let customer = state.store.create(draft).await;
    tracing::info!(id = %customer.id, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Customer>, ApiError> {
    let draft = decode_draft(&body)?;
    let customer = state.store.update(&id, draft).await?;
    tracing::info!(id = %customer.id, "Customer updated");
    Ok(Json(customer))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BTreeMap<String, Customer>>, ApiError> {
    let remaining = state.store.delete(&id).await?;
    tracing::info!(id = %id, remaining = remaining.len(), "Customer deleted");
    Ok(Json(remaining))
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub customers: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        customers: state.store.len().await,
    })
}

const INDEX_HTML: &str = "\
<h1>Customer API</h1>\
<h2>Endpoints</h2>\
<h3>GET /customers</h3><p>Returns all customers</p>\
<h3>GET /customers/{id}</h3><p>Returns a single customer</p>\
<h3>POST /customers</h3><p>Adds a new customer</p>\
<h3>PUT /customers/{id}</h3><p>Updates an existing customer</p>\
<h3>DELETE /customers/{id}</h3><p>Deletes a customer</p>";

/// Endpoint overview for humans.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
