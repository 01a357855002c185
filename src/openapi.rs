//! OpenAPI description of the address and customer endpoints, served at `/openapi.json`.

use crate::handlers::{address, customer};
use crate::schema::{
    AddressCreate, AddressResponse, AddressWithCustomersResponse, CustomerCreate, CustomerResponse,
    CustomerWithAddressResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "customer-registry", description = "Customers and their addresses"),
    paths(
        customer::list_customers,
        customer::read_customer,
        customer::create_customer,
        address::list_addresses,
        address::read_address,
        address::create_address,
    ),
    components(schemas(
        AddressCreate,
        AddressResponse,
        AddressWithCustomersResponse,
        CustomerCreate,
        CustomerResponse,
        CustomerWithAddressResponse,
    )),
    tags(
        (name = "customers", description = "Customers with an optional address"),
        (name = "addresses", description = "Addresses and the customers living there")
    )
)]
pub struct ApiDoc;

pub fn openapi_document() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_all_six_operations() {
        let doc = serde_json::to_value(openapi_document()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths["/customers/"]["get"].is_object());
        assert!(paths["/customers/"]["post"].is_object());
        assert!(paths["/customers/{id}"]["get"].is_object());
        assert!(paths["/addresses/"]["get"].is_object());
        assert!(paths["/addresses/"]["post"].is_object());
        assert!(paths["/addresses/{id}"]["get"].is_object());
        assert!(doc["components"]["schemas"]["CustomerCreate"].is_object());
    }
}
