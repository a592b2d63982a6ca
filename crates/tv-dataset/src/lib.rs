//! Static vendor dataset loader
//!
//! Reads the vendors artifact once, validates every record, and caches the
//! result for the life of the process.

pub mod store;

pub use store::{DatasetError, VendorStore};
