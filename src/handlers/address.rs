//! Address handlers: list, read with customers, create.

use super::finish;
use crate::db::AddressCrud;
use crate::error::AppError;
use crate::extractors::{DbConn, IdPath, JsonBody};
use crate::models::NewAddress;
use crate::response::{success_many, success_one, success_one_ok};
use crate::schema::{AddressCreate, AddressResponse, AddressWithCustomersResponse};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// GET /addresses/
#[utoipa::path(
    get,
    path = "/addresses/",
    tag = "addresses",
    responses((status = 200, description = "All addresses under `data`, with `meta.count`", body = [AddressResponse]))
)]
pub async fn list_addresses(DbConn(mut conn): DbConn) -> Result<impl IntoResponse, AppError> {
    let addresses = AddressCrud::get_all(&mut conn).await?;
    Ok(success_many(addresses.iter().map(AddressResponse::from).collect()))
}

/// GET /addresses/:id
#[utoipa::path(
    get,
    path = "/addresses/{id}",
    tag = "addresses",
    params(("id" = uuid::Uuid, Path, description = "Address id")),
    responses(
        (status = 200, description = "Address and its customers under `data`", body = AddressWithCustomersResponse),
        (status = 400, description = "Id is not a UUID"),
        (status = 404, description = "No such address")
    )
)]
pub async fn read_address(
    IdPath(id): IdPath,
    DbConn(mut conn): DbConn,
) -> Result<impl IntoResponse, AppError> {
    let address = AddressCrud::get_by_id_with_customers(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("address {}", id)))?;
    Ok(success_one_ok(AddressWithCustomersResponse::from(&address)))
}

/// POST /addresses/
#[utoipa::path(
    post,
    path = "/addresses/",
    tag = "addresses",
    request_body = AddressCreate,
    responses(
        (status = 201, description = "Created address under `data`", body = AddressResponse),
        (status = 400, description = "Body is not a JSON object"),
        (status = 422, description = "Missing, mistyped, blank or NUL-bearing field")
    )
)]
pub async fn create_address(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let new: NewAddress = AddressCreate::from_body(body)?.into();
    let mut tx = state.pool.begin().await?;
    let result = AddressCrud::create(&mut tx, &new).await;
    let address = finish(tx, result).await?;
    Ok(success_one(AddressResponse::from(&address)))
}
