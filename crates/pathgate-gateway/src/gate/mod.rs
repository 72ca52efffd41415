//! The gate: resolve grants, resolve the canonical path, decide.
//!
//! Each request is evaluated from scratch. A collaborator failure ends the
//! evaluation immediately; the downstream handler only runs on `Allow`, and
//! it receives the request exactly as it arrived.

pub mod rejection;

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::{self, Next},
    response::Response,
    Router,
};

use pathgate_core::{decide, matching_grant, Decision, OperationKind, PathGateError};

use crate::collaborators::{GrantSource, PathResolver};
use crate::obs::GateMetrics;

/// Terminal outcome of evaluating one request.
#[derive(Debug)]
pub enum GateOutcome {
    GrantSourceFailure(PathGateError),
    PathResolverFailure(PathGateError),
    Deny,
    Allow,
}

impl GateOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateOutcome::GrantSourceFailure(_) => "grant_source_failure",
            GateOutcome::PathResolverFailure(_) => "path_resolver_failure",
            GateOutcome::Deny => Decision::Deny.as_str(),
            GateOutcome::Allow => Decision::Allow.as_str(),
        }
    }

    /// Rejection response, or `None` when the request may pass.
    pub fn rejection(&self) -> Option<Response> {
        match self {
            GateOutcome::GrantSourceFailure(e) | GateOutcome::PathResolverFailure(e) => {
                Some(rejection::collaborator_error(e))
            }
            GateOutcome::Deny => Some(rejection::unauthorized()),
            GateOutcome::Allow => None,
        }
    }
}

/// Authorization gate. Construct once and share; holds no mutable state.
#[derive(Clone)]
pub struct Gate {
    grants: Arc<dyn GrantSource>,
    paths: Arc<dyn PathResolver>,
    metrics: Option<Arc<GateMetrics>>,
}

impl Gate {
    pub fn new(grants: Arc<dyn GrantSource>, paths: Arc<dyn PathResolver>) -> Self {
        Self {
            grants,
            paths,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<GateMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Put every route of `router` behind the gate. Requests that match no
    /// route never reach the gate and get the router's fallback.
    pub fn guard<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.route_layer(middleware::from_fn_with_state(self, gate_middleware))
    }

    pub async fn evaluate(&self, req: &Parts) -> GateOutcome {
        let started = Instant::now();
        let outcome = self.evaluate_inner(req).await;

        if let Some(m) = &self.metrics {
            let label = [("outcome", outcome.as_str())];
            m.decisions.inc(&label);
            m.gate_duration.observe(&label, started.elapsed());
            match &outcome {
                GateOutcome::GrantSourceFailure(e) => m.collaborator_failures.inc(&[
                    ("collaborator", "grant_source"),
                    ("class", e.class().as_str()),
                ]),
                GateOutcome::PathResolverFailure(e) => m.collaborator_failures.inc(&[
                    ("collaborator", "path_resolver"),
                    ("class", e.class().as_str()),
                ]),
                GateOutcome::Deny | GateOutcome::Allow => {}
            }
        }
        outcome
    }

    async fn evaluate_inner(&self, req: &Parts) -> GateOutcome {
        let method = req.method.as_str();
        let uri = &req.uri;

        let grants = match self.grants.resolve_grants(req).await {
            Ok(g) => g,
            Err(e) => {
                log_failure("grant_source", method, uri, &e);
                return GateOutcome::GrantSourceFailure(e);
            }
        };

        let path = match self.paths.resolve_path(req).await {
            Ok(p) => p,
            Err(e) => {
                log_failure("path_resolver", method, uri, &e);
                return GateOutcome::PathResolverFailure(e);
            }
        };

        match decide(&grants, &path, method) {
            Decision::Allow => {
                if tracing::enabled!(tracing::Level::DEBUG) {
                    let grant = OperationKind::from_method(method)
                        .and_then(|op| matching_grant(&grants, &path, op));
                    if let Some(grant) = grant {
                        tracing::debug!(%method, %path, grant_path = %grant.path, access = ?grant.access, "gate allow");
                    }
                }
                GateOutcome::Allow
            }
            Decision::Deny => {
                tracing::info!(%method, %path, grants = grants.len(), "gate deny");
                GateOutcome::Deny
            }
        }
    }
}

fn log_failure(collaborator: &'static str, method: &str, uri: &axum::http::Uri, e: &PathGateError) {
    match e.status() {
        Some(status) => {
            tracing::warn!(collaborator, %method, %uri, status, error = %e, "gate collaborator failed")
        }
        None => {
            tracing::error!(collaborator, %method, %uri, error = %e, "gate collaborator failed (unclassified)")
        }
    }
}

/// axum middleware entry (`middleware::from_fn_with_state`).
pub async fn gate_middleware(State(gate): State<Gate>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let outcome = gate.evaluate(&parts).await;
    match outcome.rejection() {
        Some(resp) => resp,
        None => next.run(Request::from_parts(parts, body)).await,
    }
}
