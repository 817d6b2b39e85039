//! Product Model

use serde::{Deserialize, Serialize};

/// Product availability
///
/// Wire values are the Polish labels used by the catalog data file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    #[serde(rename = "dostępny")]
    Available,
    #[serde(rename = "mało")]
    Low,
    #[serde(rename = "niedostępny")]
    Unavailable,
}

impl Availability {
    /// Display label (same as the wire value)
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "dostępny",
            Availability::Low => "mało",
            Availability::Unavailable => "niedostępny",
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Availability::Unavailable)
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Product entity (read-only reference data)
///
/// Loaded once per session from the catalog data file and never mutated
/// by the order workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Stable identifier, `prod_NNN` shape
    pub id: String,
    pub name: String,
    /// Top-level category (e.g. "mięso")
    pub category: String,
    /// Subcategory within the category (e.g. "wieprzowina")
    pub subcategory: String,
    pub description: String,
    /// Unit price in PLN (2 decimal places)
    pub price: f64,
    /// Sale unit (e.g. "kg")
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub availability: Availability,
}

impl Product {
    /// Short product code: the part of the id after the `prod_` prefix.
    pub fn code(&self) -> &str {
        self.id.split_once('_').map(|(_, c)| c).unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_round_trips_polish_wire_values() {
        let json = r#""mało""#;
        let a: Availability = serde_json::from_str(json).unwrap();
        assert_eq!(a, Availability::Low);
        assert_eq!(serde_json::to_string(&a).unwrap(), json);
    }

    #[test]
    fn product_code_strips_prefix() {
        let p = Product {
            id: "prod_014".to_string(),
            name: "Schab wieprzowy".to_string(),
            category: "mięso".to_string(),
            subcategory: "wieprzowina".to_string(),
            description: String::new(),
            price: 32.99,
            unit: "kg".to_string(),
            image_url: None,
            availability: Availability::Available,
        };
        assert_eq!(p.code(), "014");
    }
}
