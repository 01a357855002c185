//! Address and customer routes. Collection paths answer with and without the trailing slash.

use crate::handlers::address::{create_address, list_addresses, read_address};
use crate::handlers::customer::{create_customer, list_customers, read_customer};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn registry_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/", get(list_customers).post(create_customer))
        .route("/customers/:id", get(read_customer))
        .route("/addresses", get(list_addresses).post(create_address))
        .route("/addresses/", get(list_addresses).post(create_address))
        .route("/addresses/:id", get(read_address))
        .with_state(state)
}
