//! Queries for `addresses`, including the has-many join to `customers`.

use super::rows::{fold_address_rows, AddressCustomerRow, AddressRow};
use super::{ADDRESSES_TABLE, CUSTOMERS_TABLE};
use crate::error::AppError;
use crate::models::{Address, AddressWithCustomers, NewAddress};
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str = "id, street, city, state, zip_code, created_at, updated_at";

pub struct AddressCrud;

impl AddressCrud {
    /// Insert one address. Id and timestamps come from the column defaults.
    pub async fn create(conn: &mut PgConnection, new: &NewAddress) -> Result<Address, AppError> {
        let sql = format!(
            "INSERT INTO {} (street, city, state, zip_code) VALUES ($1, $2, $3, $4) RETURNING {}",
            ADDRESSES_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row: AddressRow = sqlx::query_as(&sql)
            .bind(&new.street)
            .bind(&new.city)
            .bind(&new.state)
            .bind(&new.zip_code)
            .fetch_one(&mut *conn)
            .await
            .map_err(AppError::from_db)?;
        tracing::info!(address_id = %row.id, "address created");
        Ok(row.into())
    }

    pub async fn get_all(conn: &mut PgConnection) -> Result<Vec<Address>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY created_at, id", COLUMNS, ADDRESSES_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<AddressRow> = sqlx::query_as(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(AppError::from_db)?;
        Ok(rows.into_iter().map(Address::from).collect())
    }

    pub async fn get_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Option<Address>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, ADDRESSES_TABLE);
        tracing::debug!(sql = %sql, %id, "query");
        let row: Option<AddressRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(AppError::from_db)?;
        Ok(row.map(Address::from))
    }

    /// Address plus every customer referencing it. `None` only when the address itself is missing.
    pub async fn get_by_id_with_customers(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<AddressWithCustomers>, AppError> {
        let sql = format!(
            r#"
            SELECT a.id, a.street, a.city, a.state, a.zip_code, a.created_at, a.updated_at,
                   c.id AS customer_id,
                   c.first_name AS customer_first_name,
                   c.last_name AS customer_last_name,
                   c.address_id AS customer_address_id,
                   c.created_at AS customer_created_at,
                   c.updated_at AS customer_updated_at
            FROM {} a
            LEFT JOIN {} c ON c.address_id = a.id
            WHERE a.id = $1
            ORDER BY c.created_at, c.id
            "#,
            ADDRESSES_TABLE, CUSTOMERS_TABLE
        );
        tracing::debug!(sql = %sql, %id, "query");
        let rows: Vec<AddressCustomerRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_all(&mut *conn)
            .await
            .map_err(AppError::from_db)?;
        Ok(fold_address_rows(rows))
    }
}
