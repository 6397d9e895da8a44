//! Shared types for the API layer.

use std::sync::Arc;

use rusqlite::Connection;
use serde::Serialize;

use crate::config::ServiceConfig;
use crate::db::{self, DatabaseError};

/// Shared context for all routes. Built once at startup and holds
/// configuration only — no mutable state is shared between requests.
#[derive(Clone)]
pub struct ApiContext {
    config: Arc<ServiceConfig>,
}

impl ApiContext {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Open a fresh database connection for a single persistence operation.
    /// Dropping the connection closes it, on every exit path.
    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        db::connect(&self.config.database_path)
    }
}

/// Uniform response envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status_code: u16,
    pub description: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(description: &str, data: T) -> Self {
        Self {
            status_code: 200,
            description: description.to_string(),
            data,
        }
    }
}

/// Success response for single-text processing. Carries the raw and cleaned
/// text instead of a `data` field.
#[derive(Debug, Serialize)]
pub struct ProcessedResponse {
    pub status_code: u16,
    pub description: String,
    pub data_raw: String,
    pub data_clean: String,
}
