//! Queries for `customers`, including the has-one join to `addresses`.

use super::rows::{CustomerAddressRow, CustomerRow};
use super::{ADDRESSES_TABLE, CUSTOMERS_TABLE};
use crate::error::AppError;
use crate::models::{Customer, CustomerWithAddress, NewCustomer};
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str = "id, first_name, last_name, address_id, created_at, updated_at";

pub struct CustomerCrud;

impl CustomerCrud {
    /// Insert one customer. An `address_id` with no matching address fails with
    /// `AppError::Integrity`; the caller's transaction is then unusable and must be rolled back.
    pub async fn create(conn: &mut PgConnection, new: &NewCustomer) -> Result<Customer, AppError> {
        let sql = format!(
            "INSERT INTO {} (first_name, last_name, address_id) VALUES ($1, $2, $3) RETURNING {}",
            CUSTOMERS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row: CustomerRow = sqlx::query_as(&sql)
            .bind(&new.first_name)
            .bind(&new.last_name)
            .bind(new.address_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(AppError::from_db)?;
        tracing::info!(customer_id = %row.id, address_id = ?row.address_id, "customer created");
        Ok(row.into())
    }

    pub async fn get_all(conn: &mut PgConnection) -> Result<Vec<Customer>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY created_at, id", COLUMNS, CUSTOMERS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<CustomerRow> = sqlx::query_as(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(AppError::from_db)?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    pub async fn get_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Option<Customer>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, CUSTOMERS_TABLE);
        tracing::debug!(sql = %sql, %id, "query");
        let row: Option<CustomerRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(AppError::from_db)?;
        Ok(row.map(Customer::from))
    }

    /// Customer with its address resolved through a left join. `None` when the customer is missing.
    pub async fn get_by_id_with_address(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<CustomerWithAddress>, AppError> {
        let sql = format!(
            r#"
            SELECT c.id, c.first_name, c.last_name, c.address_id, c.created_at, c.updated_at,
                   a.id AS joined_address_id,
                   a.street AS address_street,
                   a.city AS address_city,
                   a.state AS address_state,
                   a.zip_code AS address_zip_code,
                   a.created_at AS address_created_at,
                   a.updated_at AS address_updated_at
            FROM {} c
            LEFT JOIN {} a ON a.id = c.address_id
            WHERE c.id = $1
            "#,
            CUSTOMERS_TABLE, ADDRESSES_TABLE
        );
        tracing::debug!(sql = %sql, %id, "query");
        let row: Option<CustomerAddressRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(AppError::from_db)?;
        Ok(row.map(CustomerWithAddress::from))
    }
}
