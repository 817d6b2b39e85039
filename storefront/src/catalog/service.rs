//! Catalog service
//!
//! Loads the static product list once per run and serves lookups over it.
//! The catalog is never mutated or re-fetched mid-session; the order
//! workflow only reads from it.

use std::path::Path;

use shared::models::Product;

use crate::core::Config;
use crate::utils::{AppError, AppResult};

/// Embedded seed catalog, used when no external file is configured
const SEED_PRODUCTS: &str = include_str!("../../data/products.json");

/// The loaded product catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog per configuration: an operator-supplied JSON file
    /// when `PRODUCTS_PATH` is set, the embedded seed data otherwise.
    pub fn load(config: &Config) -> AppResult<Self> {
        match &config.products_path {
            Some(path) => {
                let catalog = Self::from_file(path)?;
                tracing::info!(path = %path, products = catalog.len(), "catalog loaded from file");
                Ok(catalog)
            }
            None => {
                let catalog = Self::from_json(SEED_PRODUCTS)?;
                tracing::info!(products = catalog.len(), "catalog loaded from embedded seed data");
                Ok(catalog)
            }
        }
    }

    /// Parse a catalog from a JSON document (ordered array of products).
    pub fn from_json(json: &str) -> AppResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        if products.is_empty() {
            return Err(AppError::validation("catalog contains no products"));
        }
        Ok(Self { products })
    }

    /// Read and parse a catalog file.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Lookup by product id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for p in &self.products {
            if !seen.contains(&p.category.as_str()) {
                seen.push(p.category.as_str());
            }
        }
        seen
    }

    /// Distinct subcategories in first-seen order.
    pub fn subcategories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for p in &self.products {
            if !seen.contains(&p.subcategory.as_str()) {
                seen.push(p.subcategory.as_str());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn seed_catalog_parses_and_is_ordered() {
        let catalog = Catalog::from_json(SEED_PRODUCTS).unwrap();
        assert!(catalog.len() >= 12);
        assert_eq!(catalog.products()[0].id, "prod_001");
        assert!(catalog.get("prod_001").is_some());
        assert!(catalog.get("prod_999").is_none());
    }

    #[test]
    fn categories_are_distinct_and_in_first_seen_order() {
        let catalog = Catalog::from_json(SEED_PRODUCTS).unwrap();
        let categories = catalog.categories();
        assert_eq!(categories, vec!["mięso", "wędliny"]);

        let subs = catalog.subcategories();
        assert_eq!(subs[0], "wieprzowina");
        // no duplicates
        let mut deduped = subs.clone();
        deduped.dedup();
        assert_eq!(subs, deduped);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let result = Catalog::from_json("{ not json ]");
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let result = Catalog::from_json("[]");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn loads_from_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED_PRODUCTS.as_bytes()).unwrap();

        let config = Config {
            products_path: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        let catalog = Catalog::load(&config).unwrap();
        assert_eq!(catalog.len(), 16);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Catalog::from_file("/nonexistent/products.json");
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
