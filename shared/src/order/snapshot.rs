//! Confirmed order - immutable snapshot taken at submission time
//!
//! The snapshot is detached from the cart: later cart mutation (there is
//! none on the happy path, but `reset` discards everything) can never
//! change a confirmed order's items or total.

use serde::{Deserialize, Serialize};

use super::types::{CustomerInfo, LineItem};
use crate::util::now_millis;

/// Order snapshot created exactly once per successful submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmedOrder {
    /// Order number assigned at submission, `ZAM-YYYYMMDD-NNNN`
    pub order_number: String,
    /// Customer form input captured at submission time
    pub customer: CustomerInfo,
    /// Copy of the cart at submission time
    pub line_items: Vec<LineItem>,
    /// Frozen sum of line subtotals (2 decimal places)
    pub total_amount: f64,
    /// Submission timestamp (Unix milliseconds)
    pub order_date: i64,
}

impl ConfirmedOrder {
    /// Freeze an order at submission time.
    ///
    /// The caller computes `total_amount` from the items it passes in; the
    /// snapshot stores it verbatim and stamps the submission time.
    pub fn new(
        order_number: String,
        customer: CustomerInfo,
        line_items: Vec<LineItem>,
        total_amount: f64,
    ) -> Self {
        Self {
            order_number,
            customer,
            line_items,
            total_amount,
            order_date: now_millis(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.line_items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            customer_name: "Jan Kowalski".to_string(),
            customer_email: "jan.kowalski@example.com".to_string(),
            customer_phone: "123456789".to_string(),
            delivery_address: "ul. Przykładowa 1, 00-000 Warszawa".to_string(),
            delivery_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn snapshot_is_detached_from_source_items() {
        let mut items = vec![LineItem {
            product_id: "prod_001".to_string(),
            name: "Schab wieprzowy".to_string(),
            unit: "kg".to_string(),
            price: 10.0,
            quantity: 1,
        }];

        let order = ConfirmedOrder::new("ZAM-20260807-0001".to_string(), customer(), items.clone(), 10.0);

        // Mutating the source list leaves the snapshot untouched
        items[0].quantity = 99;
        assert_eq!(order.line_items[0].quantity, 1);
        assert_eq!(order.total_amount, 10.0);
        assert_eq!(order.item_count(), 1);
        assert!(order.order_date > 0);
    }
}
