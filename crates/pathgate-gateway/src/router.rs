//! Axum router wiring.
//!
//! Ops endpoints are served directly; everything under `gateway.mount` goes
//! through the gate before reaching the document store.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, ops, services::store};

pub fn build_router(state: AppState) -> Router {
    let mount = state.cfg().gateway.mount.clone();
    let mut files = Router::new();
    if mount == "/" {
        files = files.route("/", any(store::handle)).route("/*rest", any(store::handle));
    } else {
        // "{mount}/" resolves to "/" just like the bare mount, so it is gated too.
        files = files
            .route(&mount, any(store::handle))
            .route(&format!("{mount}/"), any(store::handle))
            .route(&format!("{mount}/*rest"), any(store::handle));
    }
    let files = files.with_state(state.store());
    let files = state.gate().guard(files);

    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
        .merge(files)
}
