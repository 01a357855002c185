//! Data-access layer: every query against `addresses` and `customers`.
//!
//! All operations take a caller-owned `&mut PgConnection` (a pooled connection or an open
//! `sqlx::Transaction`, which derefs to one) and do no transaction management of their own.
//! Absent rows come back as `Ok(None)`; every other failure propagates as `AppError`.
//! Lists and nested collections are ordered by `created_at, id`.

mod address;
mod customer;
mod rows;

pub use address::AddressCrud;
pub use customer::CustomerCrud;

pub(crate) const ADDRESSES_TABLE: &str = "addresses";
pub(crate) const CUSTOMERS_TABLE: &str = "customers";
