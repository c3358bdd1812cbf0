//! DTOs for the `/customer` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::PHONE_REGEX;
use super::resource::ApiResource;
use crate::domain::entities::{Customer, NewCustomer};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CustomerRequest {
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,

    #[validate(
        email(message = "Invalid email address"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: String,
}

impl From<CustomerRequest> for NewCustomer {
    fn from(req: CustomerRequest) -> Self {
        NewCustomer {
            full_name: req.full_name,
            phone: req.phone,
            email: req.email,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerItem {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerItem {
    fn from(c: Customer) -> Self {
        CustomerItem {
            id: c.id,
            full_name: c.full_name,
            phone: c.phone,
            email: c.email,
            created_at: c.created_at,
        }
    }
}

impl ApiResource for Customer {
    type Request = CustomerRequest;
    type Response = CustomerItem;

    const COLLECTION: &'static str = "customers";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(phone: &str, email: &str) -> CustomerRequest {
        CustomerRequest {
            full_name: "Dilnoza Rashidova".to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_customer() {
        assert!(request("+998901112233", "dilnoza@example.com").validate().is_ok());
        assert!(request("901112233", "d@example.uz").validate().is_ok());
    }

    #[test]
    fn test_invalid_phone() {
        assert!(request("call me", "dilnoza@example.com").validate().is_err());
        assert!(request("+12", "dilnoza@example.com").validate().is_err());
    }

    #[test]
    fn test_invalid_email() {
        let errors = request("+998901112233", "not-an-email")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    /// `local@b*63.c*63.<tld>` with a 64-character local part.
    fn long_email(tld_len: usize) -> String {
        format!(
            "{}@{}.{}.{}",
            "a".repeat(64),
            "b".repeat(63),
            "c".repeat(63),
            "d".repeat(tld_len)
        )
    }

    #[test]
    fn test_email_length_fits_column() {
        let fits = long_email(62);
        assert_eq!(fits.len(), 255);
        assert!(request("+998901112233", &fits).validate().is_ok());

        let too_long = long_email(63);
        assert_eq!(too_long.len(), 256);
        let errors = request("+998901112233", &too_long)
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
