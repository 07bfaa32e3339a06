//! Customer domain and transfer types.

use serde::{Deserialize, Serialize};

use pet_store_core::{CustomerId, Email};

/// A customer row (domain type).
///
/// Store membership lives in the `pet_store_customer` association table, not
/// on the row itself.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Customer {
    /// Unique customer ID.
    pub customer_id: CustomerId,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    /// Unique, validated email address.
    pub customer_email: Email,
}

/// Customer transfer record.
///
/// The email is a plain optional string here; the service validates it into
/// an [`Email`] before anything touches the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetStoreCustomer {
    pub customer_id: Option<CustomerId>,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub customer_email: Option<String>,
}

impl From<Customer> for PetStoreCustomer {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: Some(customer.customer_id),
            customer_first_name: customer.customer_first_name,
            customer_last_name: customer.customer_last_name,
            customer_email: Some(customer.customer_email.into_inner()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let customer = Customer {
            customer_id: CustomerId::new(12),
            customer_first_name: Some("Ana".to_string()),
            customer_last_name: Some("Silva".to_string()),
            customer_email: Email::parse("ana@example.com").unwrap(),
        };

        let json = serde_json::to_value(PetStoreCustomer::from(customer)).unwrap();

        assert_eq!(json["customerId"], 12);
        assert_eq!(json["customerFirstName"], "Ana");
        assert_eq!(json["customerEmail"], "ana@example.com");
    }

    #[test]
    fn test_deserializes_without_id() {
        let customer: PetStoreCustomer =
            serde_json::from_str(r#"{"customerEmail":"ana@example.com"}"#).unwrap();

        assert_eq!(customer.customer_id, None);
        assert_eq!(customer.customer_email.as_deref(), Some("ana@example.com"));
        assert_eq!(customer.customer_first_name, None);
    }
}
