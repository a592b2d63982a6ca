//! Route handlers

pub mod health;
pub mod vendors;

pub use health::health;
pub use vendors::list_vendors;
