// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by resource services, stores, and the CLI.
//!
//! Every variant renders as a single human-readable message. Stores copy that
//! message into their `error` field, so `Display` must never leak transport
//! internals such as raw response bodies.

use thiserror::Error;

/// A single failed field reported by a 422 validation response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted location of the offending field, e.g. `body.email`.
    pub path: String,
    /// Backend-provided message for this field.
    pub message: String,
}

impl FieldError {
    /// Renders the pair as `path - message`.
    pub fn display_line(&self) -> String {
        if self.path.is_empty() {
            self.message.clone()
        } else {
            format!("{} - {}", self.path, self.message)
        }
    }
}

/// The primary error type used across Hireloop services and stores.
#[derive(Debug, Error)]
pub enum HireloopError {
    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("{message}")]
    Network {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The backend rejected the payload (HTTP 422).
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// The backend rejected the credentials (HTTP 401). The stored token has
    /// already been cleared when this is returned.
    #[error("{message}")]
    Unauthorized { message: String },

    /// A record with the given id does not exist.
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: String, id: String },

    /// A local precondition failed before any request was made.
    #[error("{0}")]
    Application(String),

    /// Configuration errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// Local persistence errors (token file I/O).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("{message}")]
    Decode {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl HireloopError {
    /// Builds a `Validation` error whose message joins every field error on its own line.
    pub fn validation(fields: Vec<FieldError>) -> Self {
        let message = fields
            .iter()
            .map(FieldError::display_line)
            .collect::<Vec<_>>()
            .join("\n");
        Self::Validation { message, fields }
    }

    /// Shorthand for a `NotFound` error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    /// HTTP status associated with the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Validation { .. } => Some(422),
            Self::Unauthorized { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// True when the failure never reached the server.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
