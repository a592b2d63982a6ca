//! GET /api/vendors

use axum::{extract::State, Json};

use tv_types::VendorRecord;

use crate::error::ApiResult;
use crate::state::AppState;

/// List the full vendor catalog in source order.
///
/// The first request triggers the load-and-validate pass; afterwards the
/// cached set is served. Takes no parameters: no filtering, pagination, or
/// sorting.
pub async fn list_vendors(State(state): State<AppState>) -> ApiResult<Json<Vec<VendorRecord>>> {
    let vendors = state.store.load()?;
    Ok(Json(vendors.as_ref().clone()))
}
