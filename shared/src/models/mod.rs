//! Data models shared across the workspace

pub mod product;
pub mod settings;

pub use product::{Availability, Product};
pub use settings::{
    Certification, CompanyProfile, CompanyProfileUpdate, SocialLinks, SocialLinksUpdate,
};
