//! Domain records handed from the data-access layer to the wire mapper. Immutable once built.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    pub id: Uuid,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub address_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An address and every customer referencing it, ordered by creation. Empty when none do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressWithCustomers {
    pub address: Address,
    pub customers: Vec<Customer>,
}

/// A customer and its resolved address. `None` when unset or the referenced row is gone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerWithAddress {
    pub customer: Customer,
    pub address: Option<Address>,
}

/// Field values for inserting an address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Field values for inserting a customer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub address_id: Option<Uuid>,
}
