//! Shared types for the order session

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Product;

// ============================================================================
// Workflow Stage
// ============================================================================

/// Order workflow stage
///
/// The stage only moves forward: `Browsing → Reviewing → Confirmed`.
/// The single path back to `Browsing` is a full session reset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    /// Selecting products
    #[default]
    Browsing,
    /// Editing the cart and filling the customer form
    Reviewing,
    /// Snapshot created, read-only view
    Confirmed,
}

impl Stage {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Stage::Confirmed)
    }
}

// ============================================================================
// Line Items
// ============================================================================

/// One product entry in the cart
///
/// Name, unit and price are captured from the product at selection time.
/// Products are immutable for the session, so the captured fields always
/// match a lookup through `product_id`; carrying them keeps the confirmed
/// snapshot self-contained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product reference (lookup key, unique within the cart)
    pub product_id: String,
    pub name: String,
    pub unit: String,
    /// Unit price in PLN
    pub price: f64,
    /// Always >= 1; a zero-quantity line is removed, never stored
    pub quantity: i32,
}

impl LineItem {
    /// Capture a line item from a product selection.
    pub fn from_product(product: &Product, quantity: i32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit: product.unit.clone(),
            price: product.price,
            quantity,
        }
    }
}

// ============================================================================
// Customer Form
// ============================================================================

/// Customer information collected by the order form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerInfo {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub delivery_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================================================
// Validation Errors
// ============================================================================

/// A single field validation failure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    /// Form field key (e.g. `customer_email`)
    pub field: String,
    /// Human-readable message in the storefront locale
    pub message: String,
}

/// Field-keyed validation failures
///
/// A value, not a fault: returned to the caller for per-field display and
/// never thrown. An empty set means the input passed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: "Schab wieprzowy".to_string(),
            category: "mięso".to_string(),
            subcategory: "wieprzowina".to_string(),
            description: String::new(),
            price,
            unit: "kg".to_string(),
            image_url: None,
            availability: Availability::Available,
        }
    }

    #[test]
    fn line_item_captures_product_fields() {
        let item = LineItem::from_product(&product("prod_001", 32.99), 3);
        assert_eq!(item.product_id, "prod_001");
        assert_eq!(item.price, 32.99);
        assert_eq!(item.unit, "kg");
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn field_errors_keyed_lookup() {
        let mut errors = FieldErrors::new();
        errors.add("customer_email", "Nieprawidłowy adres email.");
        assert!(!errors.is_empty());
        assert_eq!(
            errors.get("customer_email"),
            Some("Nieprawidłowy adres email.")
        );
        assert_eq!(errors.get("customer_name"), None);
    }
}
