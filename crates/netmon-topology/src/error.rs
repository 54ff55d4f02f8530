//! Error types for neighbor resolution.

use netmon_rpc::RpcError;
use thiserror::Error;

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors that can occur while resolving neighbors.
///
/// An empty result is not an error: it means no neighbor or site matched.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// The item query failed (transport, auth or protocol). Never retried here.
    #[error(transparent)]
    Collaborator(#[from] RpcError),

    /// A returned item record lacks a field or has one of the wrong type.
    #[error("Malformed item record #{index}: field '{field}' {reason}")]
    MalformedRecord {
        /// Position of the record in the query result.
        index: usize,
        /// The offending field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A site family table failed validation.
    #[error("Invalid site family table: {0}")]
    InvalidFamilyTable(String),
}

impl TopologyError {
    /// Creates a malformed record error.
    pub fn malformed(index: usize, field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            field: field.into(),
            reason: reason.into(),
        }
    }
}
