//! Create-request documents and their validation. Runs before any persistence call.

use crate::error::AppError;
use crate::models::{NewAddress, NewCustomer};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct AddressCreate {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CustomerCreate {
    pub first_name: String,
    pub last_name: String,
    /// Id of an existing address. Omit or send `null` for none.
    #[serde(default)]
    pub address_bid: Option<Uuid>,
}

pub struct RequestValidator;

impl RequestValidator {
    /// Parse a JSON body into `T`. Non-objects are a bad request; missing fields and
    /// wrong types are validation failures.
    pub fn parse<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
        if !body.is_object() {
            return Err(AppError::BadRequest("body must be a JSON object".into()));
        }
        serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
    }

    /// Required string fields must carry something other than whitespace, and no NUL
    /// (PostgreSQL TEXT cannot store it).
    fn check_required_strings(fields: &[(&str, &str)]) -> Result<(), AppError> {
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{} must not be blank", name)));
            }
            if value.contains('\0') {
                return Err(AppError::Validation(format!("{} must not contain NUL", name)));
            }
        }
        Ok(())
    }
}

impl AddressCreate {
    pub fn from_body(body: Value) -> Result<Self, AppError> {
        let req: Self = RequestValidator::parse(body)?;
        RequestValidator::check_required_strings(&[
            ("street", req.street.as_str()),
            ("city", req.city.as_str()),
            ("state", req.state.as_str()),
            ("zip_code", req.zip_code.as_str()),
        ])?;
        Ok(req)
    }
}

impl From<AddressCreate> for NewAddress {
    fn from(r: AddressCreate) -> Self {
        NewAddress {
            street: r.street,
            city: r.city,
            state: r.state,
            zip_code: r.zip_code,
        }
    }
}

impl CustomerCreate {
    pub fn from_body(body: Value) -> Result<Self, AppError> {
        let req: Self = RequestValidator::parse(body)?;
        RequestValidator::check_required_strings(&[
            ("first_name", req.first_name.as_str()),
            ("last_name", req.last_name.as_str()),
        ])?;
        Ok(req)
    }
}

impl From<CustomerCreate> for NewCustomer {
    fn from(r: CustomerCreate) -> Self {
        NewCustomer {
            first_name: r.first_name,
            last_name: r.last_name,
            address_id: r.address_bid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn address_accepts_complete_body_verbatim() {
        let req = AddressCreate::from_body(json!({
            "street": " 123 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip_code": "62701",
            "extra": true
        }))
        .unwrap();
        let new: NewAddress = req.into();
        assert_eq!(new.street, " 123 Main St");
        assert_eq!(new.zip_code, "62701");
    }

    #[test]
    fn address_missing_field_is_validation_error() {
        let err = AddressCreate::from_body(json!({
            "street": "123 Main St",
            "city": "Springfield",
            "state": "IL"
        }))
        .unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("zip_code"), "{}", msg),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn address_wrong_type_is_validation_error() {
        let err = AddressCreate::from_body(json!({
            "street": "123 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip_code": 62701
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn blank_strings_are_rejected() {
        let err = CustomerCreate::from_body(json!({ "first_name": "  ", "last_name": "Doe" })).unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "first_name must not be blank"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn nul_characters_are_rejected() {
        let err = AddressCreate::from_body(json!({
            "street": "a\u{0}b",
            "city": "Springfield",
            "state": "IL",
            "zip_code": "62701"
        }))
        .unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "street must not contain NUL"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            CustomerCreate::from_body(json!({ "first_name": "Jane", "last_name": "Do\u{0}e" })),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn non_object_body_is_bad_request() {
        assert!(matches!(
            CustomerCreate::from_body(json!(["Jane", "Doe"])),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn address_reference_is_optional() {
        let absent = CustomerCreate::from_body(json!({ "first_name": "Jane", "last_name": "Doe" })).unwrap();
        assert!(absent.address_bid.is_none());
        let null = CustomerCreate::from_body(json!({
            "first_name": "Jane", "last_name": "Doe", "address_bid": null
        }))
        .unwrap();
        assert!(null.address_bid.is_none());

        let id = Uuid::new_v4();
        let set = CustomerCreate::from_body(json!({
            "first_name": "Jane", "last_name": "Doe", "address_bid": id.to_string()
        }))
        .unwrap();
        let new: NewCustomer = set.into();
        assert_eq!(new.address_id, Some(id));
    }

    #[test]
    fn malformed_address_reference_is_validation_error() {
        let err = CustomerCreate::from_body(json!({
            "first_name": "Jane", "last_name": "Doe", "address_bid": "not-a-uuid"
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
