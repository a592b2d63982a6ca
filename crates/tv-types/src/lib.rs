//! Shared types and validation for the vendor catalog

pub mod errors;
pub mod vendor;

pub use errors::ValidationError;
pub use vendor::{AntennaSpec, VendorRecord};
