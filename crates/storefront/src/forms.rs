//! Validated form types for the order and catalog screens.
//!
//! Validation happens here, before any backend call; the messages are the
//! ones the screens render next to each field.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use fundraiser_core::{Price, ProductNumber};

use crate::api::types::{Customer, ProductPayload};
use crate::error::AppError;

/// Phone numbers: digits plus common separators.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-()+]+$").expect("Invalid regex"));

/// Product numbers: uppercase alphanumeric codes like `FUN001`.
static PRODUCT_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]+$").expect("Invalid regex"));

/// Customer details posted with the order form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CustomerForm {
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: String,
    #[validate(regex(path = *PHONE_RE, message = "Invalid phone number format"))]
    pub phone: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 10, message = "Please enter a complete address"))]
    pub address: String,
}

impl From<&CustomerForm> for Customer {
    fn from(form: &CustomerForm) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            address: form.address.clone(),
        }
    }
}

/// Product fields posted from the catalog editor modal.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(regex(
        path = *PRODUCT_NUMBER_RE,
        message = "Product number should only contain uppercase letters and numbers"
    ))]
    pub product_number: String,
    #[validate(length(min = 3, message = "Description must be at least 3 characters"))]
    pub product_description: String,
    #[validate(custom(function = validate_price_field))]
    pub price: String,
}

impl TryFrom<&ProductForm> for ProductPayload {
    type Error = AppError;

    /// Convert validated form input into the wire payload.
    ///
    /// Parsing cannot fail once `validate()` has passed; failures here mean
    /// the form was submitted around validation and map to a bad request.
    fn try_from(form: &ProductForm) -> Result<Self, Self::Error> {
        let product_number = ProductNumber::parse(&form.product_number)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let price = form
            .price
            .trim()
            .parse::<Decimal>()
            .map_err(|e| AppError::BadRequest(format!("invalid price: {e}")))?;

        Ok(Self {
            product_number,
            product_description: form.product_description.clone(),
            price: Price::new(price),
        })
    }
}

/// Validate the price field: required, greater than $0.00, at most $999.99.
fn validate_price_field(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        let mut err = ValidationError::new("price_required");
        err.message = Some("Price is required".into());
        return Err(err);
    }

    let Ok(amount) = trimmed.parse::<Decimal>() else {
        let mut err = ValidationError::new("price_min");
        err.message = Some("Price must be greater than $0.00".into());
        return Err(err);
    };

    if amount <= Decimal::ZERO {
        let mut err = ValidationError::new("price_min");
        err.message = Some("Price must be greater than $0.00".into());
        return Err(err);
    }

    if amount > Decimal::new(99_999, 2) {
        let mut err = ValidationError::new("price_max");
        err.message = Some("Price must be less than $999.99".into());
        return Err(err);
    }

    Ok(())
}

/// Flatten validator output to one message per field for template rendering.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map_or_else(|| "Invalid value".to_string(), ToString::to_string);
            (field.to_string(), message)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_customer() -> CustomerForm {
        CustomerForm {
            first_name: "Pat".to_string(),
            last_name: "Jones".to_string(),
            phone: "(555) 867-5309".to_string(),
            email: "pat@example.com".to_string(),
            address: "123 Maple Street, Springfield".to_string(),
        }
    }

    fn valid_product() -> ProductForm {
        ProductForm {
            product_number: "FUN001".to_string(),
            product_description: "Chocolate Candy Bar".to_string(),
            price: "2.50".to_string(),
        }
    }

    fn first_message(errors: &ValidationErrors, field: &str) -> String {
        field_errors(errors).get(field).cloned().unwrap_or_default()
    }

    #[test]
    fn test_valid_customer_passes() {
        assert!(valid_customer().validate().is_ok());
    }

    #[test]
    fn test_short_first_name() {
        let mut form = valid_customer();
        form.first_name = "P".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, "first_name"),
            "First name must be at least 2 characters"
        );
    }

    #[test]
    fn test_short_last_name() {
        let mut form = valid_customer();
        form.last_name = String::new();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, "last_name"),
            "Last name must be at least 2 characters"
        );
    }

    #[test]
    fn test_phone_accepts_digits_and_separators() {
        for phone in ["5558675309", "555-867-5309", "(02) 1234 5678", "+1 555 000 1111"] {
            let mut form = valid_customer();
            form.phone = phone.to_string();
            assert!(form.validate().is_ok(), "rejected {phone}");
        }
    }

    #[test]
    fn test_phone_rejects_letters() {
        let mut form = valid_customer();
        form.phone = "555-CALL-NOW".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(first_message(&errors, "phone"), "Invalid phone number format");
    }

    #[test]
    fn test_invalid_email() {
        let mut form = valid_customer();
        form.email = "not-an-email".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(first_message(&errors, "email"), "Invalid email address");
    }

    #[test]
    fn test_short_address() {
        let mut form = valid_customer();
        form.address = "12 Main".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, "address"),
            "Please enter a complete address"
        );
    }

    #[test]
    fn test_customer_conversion() {
        let form = valid_customer();
        let customer = Customer::from(&form);
        assert_eq!(customer.first_name, "Pat");
        assert_eq!(customer.email, "pat@example.com");
    }

    #[test]
    fn test_valid_product_passes() {
        assert!(valid_product().validate().is_ok());
    }

    #[test]
    fn test_lowercase_product_number_rejected() {
        let mut form = valid_product();
        form.product_number = "fun1".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, "product_number"),
            "Product number should only contain uppercase letters and numbers"
        );
    }

    #[test]
    fn test_short_description_rejected() {
        let mut form = valid_product();
        form.product_description = "Ab".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, "product_description"),
            "Description must be at least 3 characters"
        );
    }

    #[test]
    fn test_price_required() {
        let mut form = valid_product();
        form.price = "  ".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(first_message(&errors, "price"), "Price is required");
    }

    #[test]
    fn test_price_must_be_positive() {
        for price in ["0", "-1.50", "abc"] {
            let mut form = valid_product();
            form.price = price.to_string();
            let errors = form.validate().unwrap_err();
            assert_eq!(
                first_message(&errors, "price"),
                "Price must be greater than $0.00",
                "price {price}"
            );
        }
    }

    #[test]
    fn test_price_upper_bound() {
        let mut form = valid_product();
        form.price = "1000".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, "price"),
            "Price must be less than $999.99"
        );

        form.price = "999.99".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_product_payload_conversion() {
        let form = valid_product();
        let payload = ProductPayload::try_from(&form).unwrap();
        assert_eq!(payload.product_number.as_str(), "FUN001");
        assert_eq!(payload.price, Price::from_cents(250));
    }
}
