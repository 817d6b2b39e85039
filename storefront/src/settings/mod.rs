//! Company settings: profile, certifications, social links

pub mod store;

pub use store::SettingsStore;
