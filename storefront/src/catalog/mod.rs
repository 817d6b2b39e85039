//! Product catalog: one-time load, id lookup, view filtering

pub mod filter;
pub mod service;

pub use filter::CatalogFilter;
pub use service::Catalog;
