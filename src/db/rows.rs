//! Row shapes returned by the queries, and their mapping into domain records.

use crate::models::{Address, AddressWithCustomers, Customer, CustomerWithAddress};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Clone, Debug, FromRow)]
pub(crate) struct AddressRow {
    pub id: Uuid,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AddressRow> for Address {
    fn from(r: AddressRow) -> Self {
        Address {
            id: r.id,
            street: r.street,
            city: r.city,
            state: r.state,
            zip_code: r.zip_code,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Clone, Debug, FromRow)]
pub(crate) struct CustomerRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub address_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(r: CustomerRow) -> Self {
        Customer {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            address_id: r.address_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// One row of `addresses LEFT JOIN customers`. Customer columns are all NULL when the
/// address has no customers.
#[derive(Clone, Debug, FromRow)]
pub(crate) struct AddressCustomerRow {
    #[sqlx(flatten)]
    pub address: AddressRow,
    pub customer_id: Option<Uuid>,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub customer_address_id: Option<Uuid>,
    pub customer_created_at: Option<DateTime<Utc>>,
    pub customer_updated_at: Option<DateTime<Utc>>,
}

impl AddressCustomerRow {
    /// The joined customer, if the outer join matched one.
    fn customer(self) -> Option<Customer> {
        Some(Customer {
            id: self.customer_id?,
            first_name: self.customer_first_name?,
            last_name: self.customer_last_name?,
            address_id: self.customer_address_id,
            created_at: self.customer_created_at?,
            updated_at: self.customer_updated_at?,
        })
    }
}

/// Fold the has-many join into one composite. The first row seeds the address; every row
/// with a non-null customer id contributes one customer. No rows means no address.
pub(crate) fn fold_address_rows(rows: Vec<AddressCustomerRow>) -> Option<AddressWithCustomers> {
    let address: Address = rows.first()?.address.clone().into();
    let customers = rows.into_iter().filter_map(AddressCustomerRow::customer).collect();
    Some(AddressWithCustomers { address, customers })
}

/// One row of `customers LEFT JOIN addresses`. Address columns are NULL when the customer
/// has no reference or the referenced row is missing.
#[derive(Clone, Debug, FromRow)]
pub(crate) struct CustomerAddressRow {
    #[sqlx(flatten)]
    pub customer: CustomerRow,
    pub joined_address_id: Option<Uuid>,
    pub address_street: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip_code: Option<String>,
    pub address_created_at: Option<DateTime<Utc>>,
    pub address_updated_at: Option<DateTime<Utc>>,
}

impl CustomerAddressRow {
    /// Keyed on the joined address id, not `customers.address_id`, so a dangling
    /// reference resolves to no address.
    fn address(&mut self) -> Option<Address> {
        Some(Address {
            id: self.joined_address_id?,
            street: self.address_street.take()?,
            city: self.address_city.take()?,
            state: self.address_state.take()?,
            zip_code: self.address_zip_code.take()?,
            created_at: self.address_created_at?,
            updated_at: self.address_updated_at?,
        })
    }
}

impl From<CustomerAddressRow> for CustomerWithAddress {
    fn from(mut r: CustomerAddressRow) -> Self {
        let address = r.address();
        CustomerWithAddress {
            customer: r.customer.into(),
            address,
        }
    }
}
