//! Catalog view filter
//!
//! Narrows the displayed product list. Purely a view-layer concern: the
//! filter never touches order-session state and the catalog itself stays
//! untouched.

use shared::models::{Availability, Product};

/// Active filter criteria, combined conjunctively
///
/// `None` means "all" for that criterion, matching the original
/// storefront's filter dropdowns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    /// Case-insensitive substring match on the product name
    pub search: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub availability: Option<Availability>,
}

impl CatalogFilter {
    /// Whether a single product passes every active criterion.
    pub fn matches(&self, product: &Product) -> bool {
        let search = self.search.trim();
        if !search.is_empty()
            && !product
                .name
                .to_lowercase()
                .contains(&search.to_lowercase())
        {
            return false;
        }
        if let Some(category) = &self.category
            && &product.category != category
        {
            return false;
        }
        if let Some(subcategory) = &self.subcategory
            && &product.subcategory != subcategory
        {
            return false;
        }
        if let Some(availability) = self.availability
            && product.availability != availability
        {
            return false;
        }
        true
    }

    /// Filtered view over a product slice, preserving catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Whether any criterion is active.
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || self.category.is_some()
            || self.subcategory.is_some()
            || self.availability.is_some()
    }

    /// Clear all criteria back to "all".
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str, subcategory: &str, availability: Availability) -> Product {
        Product {
            id: format!("prod_{}", name.to_lowercase().replace(' ', "-")),
            name: name.to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            description: String::new(),
            price: 10.0,
            unit: "kg".to_string(),
            image_url: None,
            availability,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("Schab wieprzowy", "mięso", "wieprzowina", Availability::Available),
            product("Filet z kurczaka", "mięso", "drób", Availability::Available),
            product("Szynka wędzona", "wędliny", "szynki", Availability::Low),
            product("Serce wołowe", "mięso", "podroby", Availability::Unavailable),
        ]
    }

    #[test]
    fn default_filter_matches_everything() {
        let products = sample();
        let filter = CatalogFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&products).len(), products.len());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let products = sample();
        let filter = CatalogFilter {
            search: "SCHAB".to_string(),
            ..Default::default()
        };
        let hits = filter.apply(&products);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Schab wieprzowy");
    }

    #[test]
    fn category_and_availability_match_exactly() {
        let products = sample();
        let filter = CatalogFilter {
            category: Some("mięso".to_string()),
            availability: Some(Availability::Available),
            ..Default::default()
        };
        let hits = filter.apply(&products);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.category == "mięso"));
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let products = sample();
        let filter = CatalogFilter {
            search: "w".to_string(),
            category: Some("mięso".to_string()),
            subcategory: Some("podroby".to_string()),
            ..Default::default()
        };
        let hits = filter.apply(&products);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Serce wołowe");
    }

    #[test]
    fn no_match_yields_an_empty_view() {
        let products = sample();
        let filter = CatalogFilter {
            search: "golonka".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&products).is_empty());
    }

    #[test]
    fn clear_resets_to_all() {
        let mut filter = CatalogFilter {
            search: "schab".to_string(),
            category: Some("mięso".to_string()),
            ..Default::default()
        };
        filter.clear();
        assert!(!filter.is_active());
    }
}
