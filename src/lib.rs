//! customer-registry: customers and their addresses over HTTP, stored in PostgreSQL.

pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod schema;
pub mod settings;
pub mod state;
pub mod store;

pub use db::{AddressCrud, CustomerCrud};
pub use error::{AppError, SettingsError};
pub use models::{Address, AddressWithCustomers, Customer, CustomerWithAddress, NewAddress, NewCustomer};
pub use routes::{app, common_routes, registry_routes};
pub use settings::Settings;
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists, ensure_tables};
