//! Shared application state for the pathGate gateway.
//!
//! Collaborators are chosen from config once at startup and shared by every
//! request through the `Gate`.

use std::sync::Arc;

use pathgate_core::error::Result;

use crate::collaborators::{
    FileGrantSource, GrantSource, MountPathResolver, StaticGrantSource, UserHeader,
};
use crate::config::{GatewayConfig, GrantSourceConfig};
use crate::gate::Gate;
use crate::obs::GateMetrics;
use crate::services::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<GateMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    gate: Gate,
    store: DocumentStore,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        cfg.validate()?;

        let identity = UserHeader::new(cfg.identity.header_name()?);
        let grants: Arc<dyn GrantSource> = match &cfg.grants {
            GrantSourceConfig::Static { users } => Arc::new(StaticGrantSource::new(
                identity,
                users.iter().map(|(u, g)| (u.clone(), g.clone())),
            )),
            GrantSourceConfig::File { path } => Arc::new(FileGrantSource::new(identity, path)),
        };
        let paths = MountPathResolver::new(cfg.gateway.mount.clone());

        let metrics = Arc::new(GateMetrics::default());
        let gate = Gate::new(grants, Arc::new(paths.clone())).with_metrics(Arc::clone(&metrics));
        let store = DocumentStore::new(paths, cfg.gateway.max_body_bytes);

        tracing::info!(
            grant_source = cfg.grants.kind(),
            mount = %cfg.gateway.mount,
            user_header = %cfg.identity.user_header,
            "gate configured"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, gate, store }),
            metrics,
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn gate(&self) -> Gate {
        self.inner.gate.clone()
    }

    pub fn store(&self) -> DocumentStore {
        self.inner.store.clone()
    }

    pub fn metrics(&self) -> Arc<GateMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Mark the gateway as shutting down; `/readyz` starts failing.
    pub fn begin_drain(&self) {
        self.metrics.set_draining();
    }
}
