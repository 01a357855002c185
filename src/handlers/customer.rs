//! Customer handlers: list, read with address, create.

use super::finish;
use crate::db::CustomerCrud;
use crate::error::AppError;
use crate::extractors::{DbConn, IdPath, JsonBody};
use crate::models::NewCustomer;
use crate::response::{success_many, success_one, success_one_ok};
use crate::schema::{CustomerCreate, CustomerResponse, CustomerWithAddressResponse};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// GET /customers/
#[utoipa::path(
    get,
    path = "/customers/",
    tag = "customers",
    responses((status = 200, description = "All customers under `data`, with `meta.count`", body = [CustomerResponse]))
)]
pub async fn list_customers(DbConn(mut conn): DbConn) -> Result<impl IntoResponse, AppError> {
    let customers = CustomerCrud::get_all(&mut conn).await?;
    Ok(success_many(customers.iter().map(CustomerResponse::from).collect()))
}

/// GET /customers/:id
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = uuid::Uuid, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer and its address under `data`", body = CustomerWithAddressResponse),
        (status = 400, description = "Id is not a UUID"),
        (status = 404, description = "No such customer")
    )
)]
pub async fn read_customer(
    IdPath(id): IdPath,
    DbConn(mut conn): DbConn,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerCrud::get_by_id_with_address(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {}", id)))?;
    Ok(success_one_ok(CustomerWithAddressResponse::from(&customer)))
}

/// POST /customers/
#[utoipa::path(
    post,
    path = "/customers/",
    tag = "customers",
    request_body = CustomerCreate,
    responses(
        (status = 201, description = "Created customer under `data`", body = CustomerResponse),
        (status = 409, description = "address_bid does not reference an existing address"),
        (status = 400, description = "Body is not a JSON object"),
        (status = 422, description = "Missing, mistyped, blank or NUL-bearing field")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let new: NewCustomer = CustomerCreate::from_body(body)?.into();
    let mut tx = state.pool.begin().await?;
    let result = CustomerCrud::create(&mut tx, &new).await;
    let customer = finish(tx, result).await?;
    Ok(success_one(CustomerResponse::from(&customer)))
}
