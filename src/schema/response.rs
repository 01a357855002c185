//! Response documents: a field-for-field projection of the domain records.

use crate::models::{Address, AddressWithCustomers, Customer, CustomerWithAddress};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct AddressResponse {
    pub bid: Uuid,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub bid: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Always present; `null` when the customer has no address.
    pub address_bid: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct AddressWithCustomersResponse {
    #[serde(flatten)]
    pub address: AddressResponse,
    pub customers: Vec<CustomerResponse>,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct CustomerWithAddressResponse {
    #[serde(flatten)]
    pub customer: CustomerResponse,
    pub address: Option<AddressResponse>,
}

impl From<&Address> for AddressResponse {
    fn from(a: &Address) -> Self {
        AddressResponse {
            bid: a.id,
            street: a.street.clone(),
            city: a.city.clone(),
            state: a.state.clone(),
            zip_code: a.zip_code.clone(),
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

impl From<&Customer> for CustomerResponse {
    fn from(c: &Customer) -> Self {
        CustomerResponse {
            bid: c.id,
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            address_bid: c.address_id,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<&AddressWithCustomers> for AddressWithCustomersResponse {
    fn from(a: &AddressWithCustomers) -> Self {
        AddressWithCustomersResponse {
            address: (&a.address).into(),
            customers: a.customers.iter().map(CustomerResponse::from).collect(),
        }
    }
}

impl From<&CustomerWithAddress> for CustomerWithAddressResponse {
    fn from(c: &CustomerWithAddress) -> Self {
        CustomerWithAddressResponse {
            customer: (&c.customer).into(),
            address: c.address.as_ref().map(AddressResponse::from),
        }
    }
}
