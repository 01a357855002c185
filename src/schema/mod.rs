//! Wire documents: create requests in, response documents out.

mod request;
mod response;

pub use request::{AddressCreate, CustomerCreate, RequestValidator};
pub use response::{AddressResponse, AddressWithCustomersResponse, CustomerResponse, CustomerWithAddressResponse};
