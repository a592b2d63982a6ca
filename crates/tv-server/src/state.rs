//! Server state
//!
//! The vendor store is injected here once at startup and shared by every
//! handler; there is no other mutable state in the server.

use std::sync::Arc;

use tv_dataset::VendorStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<VendorStore>,
}

impl AppState {
    pub fn new(store: Arc<VendorStore>) -> Self {
        Self { store }
    }
}
