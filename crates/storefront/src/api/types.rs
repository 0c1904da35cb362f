//! Wire types for the fundraiser backend API.
//!
//! Field names follow the backend's camelCase JSON. Response types ignore
//! fields this app never reads.

use fundraiser_core::{CustomerId, OrderId, Price, ProductId, ProductNumber};
use serde::{Deserialize, Serialize};

/// A sellable product in the fundraiser catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub product_number: ProductNumber,
    pub product_description: String,
    pub price: Price,
}

/// Fields submitted when creating or updating a catalog product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub product_number: ProductNumber,
    pub product_description: String,
    pub price: Price,
}

/// Customer contact details submitted with an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// A single order line, priced from the loaded product list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Price,
}

/// Order submission payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub customer: Customer,
    pub items: Vec<OrderItem>,
}

/// An order as listed by the orders backend.
///
/// The dashboard renders only the identifier and customer reference; the
/// rest of the backend's shape is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: OrderId,
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
}

/// Error body returned by the backend on failed requests.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_product() {
        let json = r#"{"id":1,"productNumber":"FUN001","productDescription":"Chocolate Candy Bar","price":2.5}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.product_number.as_str(), "FUN001");
        assert_eq!(product.product_description, "Chocolate Candy Bar");
        assert_eq!(product.price, Price::from_cents(250));
    }

    #[test]
    fn test_deserialize_product_with_integer_price() {
        let json = r#"{"id":2,"productNumber":"FUN002","productDescription":"Cookie Dough","price":5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Price::from_cents(500));
    }

    #[test]
    fn test_deserialize_product_ignores_extra_fields() {
        let json = r#"{"id":3,"productNumber":"FUN003","productDescription":"Popcorn","price":3.0,"createdAt":"2024-09-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<Product>(json).is_ok());
    }

    #[test]
    fn test_serialize_order_request() {
        let request = OrderRequest {
            customer: Customer {
                first_name: "Pat".to_string(),
                last_name: "Jones".to_string(),
                phone: "555-867-5309".to_string(),
                email: "pat@example.com".to_string(),
                address: "123 Maple Street, Springfield".to_string(),
            },
            items: vec![OrderItem {
                product_id: ProductId::new(1),
                quantity: 3,
                price: Price::from_cents(250),
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "customer": {
                    "firstName": "Pat",
                    "lastName": "Jones",
                    "phone": "555-867-5309",
                    "email": "pat@example.com",
                    "address": "123 Maple Street, Springfield"
                },
                "items": [
                    {"productId": 1, "quantity": 3, "price": 2.5}
                ]
            })
        );
    }

    #[test]
    fn test_serialize_product_payload() {
        let payload = ProductPayload {
            product_number: ProductNumber::parse("FUN001").unwrap(),
            product_description: "Chocolate Candy Bar".to_string(),
            price: Price::from_cents(250),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "productNumber": "FUN001",
                "productDescription": "Chocolate Candy Bar",
                "price": 2.5
            })
        );
    }

    #[test]
    fn test_deserialize_order_summary() {
        let json = r#"{"id":17,"customerId":4,"total":"12.50","createdAt":"2024-10-02T12:00:00Z"}"#;
        let order: OrderSummary = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, OrderId::new(17));
        assert_eq!(order.customer_id, Some(CustomerId::new(4)));
    }

    #[test]
    fn test_deserialize_order_summary_without_customer() {
        let json = r#"{"id":18}"#;
        let order: OrderSummary = serde_json::from_str(json).unwrap();
        assert_eq!(order.customer_id, None);
    }

    #[test]
    fn test_deserialize_error_response() {
        let json = r#"{"error":"Product not found"}"#;
        let body: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.error, "Product not found");
    }
}
