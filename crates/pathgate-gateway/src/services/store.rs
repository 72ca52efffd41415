//! In-memory document store used as the gated downstream chain.
//!
//! Documents are keyed by canonical path (the URI path with the mount
//! stripped, same as the gate sees it).
//!
//! - `GET`    : read (404 if absent)
//! - `PUT`    : create or replace (201 / 200)
//! - `POST`   : create only (201, 409 if present)
//! - `PATCH`  : append (404 if absent)
//! - `DELETE` : remove (204 / 404)

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use dashmap::{mapref::entry::Entry, DashMap};

use crate::collaborators::MountPathResolver;

#[derive(Clone)]
pub struct DocumentStore {
    docs: Arc<DashMap<String, Bytes>>,
    paths: MountPathResolver,
    max_body_bytes: usize,
}

impl DocumentStore {
    pub fn new(paths: MountPathResolver, max_body_bytes: usize) -> Self {
        Self {
            docs: Arc::new(DashMap::new()),
            paths,
            max_body_bytes,
        }
    }

    pub fn get(&self, path: &str) -> Option<Bytes> {
        self.docs.get(path).map(|d| d.value().clone())
    }

    pub fn put(&self, path: impl Into<String>, body: Bytes) -> bool {
        self.docs.insert(path.into(), body).is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

pub async fn handle(State(store): State<DocumentStore>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let path = match store.paths.resolve(parts.uri.path()) {
        Ok(p) => p,
        Err(_) => return (StatusCode::BAD_REQUEST, "400 - Bad Request").into_response(),
    };

    let body = match axum::body::to_bytes(body, store.max_body_bytes).await {
        Ok(b) => b,
        Err(e) => {
            tracing::debug!(error = %e, %path, "store body rejected");
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };

    match parts.method {
        Method::GET => match store.get(&path) {
            Some(doc) => (StatusCode::OK, doc).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        },
        Method::PUT => {
            if store.put(path, body) {
                StatusCode::CREATED.into_response()
            } else {
                StatusCode::OK.into_response()
            }
        }
        Method::POST => match store.docs.entry(path) {
            Entry::Occupied(_) => StatusCode::CONFLICT.into_response(),
            Entry::Vacant(v) => {
                v.insert(body);
                StatusCode::CREATED.into_response()
            }
        },
        Method::PATCH => match store.docs.get_mut(&path) {
            Some(mut doc) => {
                let mut merged = Vec::with_capacity(doc.len() + body.len());
                merged.extend_from_slice(&doc);
                merged.extend_from_slice(&body);
                *doc = Bytes::from(merged);
                StatusCode::OK.into_response()
            }
            None => StatusCode::NOT_FOUND.into_response(),
        },
        Method::DELETE => match store.docs.remove(&path) {
            Some(_) => StatusCode::NO_CONTENT.into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        },
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}
