// Copyright 2023 The RocketMQ Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unified error system for the Kafka MCP gateway
//!
//! All errors are categorized into logical groups so that the result
//! normalization layer can map each group onto a stable user-facing message.

mod cluster;
mod config;
mod tools;
mod transport;

pub use cluster::ClusterError;
pub use config::ConfigError;
use thiserror::Error;
pub use tools::ToolsError;
pub use transport::TransportError;

/// Main error type for all Kafka MCP operations
///
/// # Examples
///
/// ```rust
/// use kafka_mcp_error::ClusterError;
/// use kafka_mcp_error::KafkaMcpError;
///
/// let err: KafkaMcpError = ClusterError::topic_already_exists("orders").into();
/// assert!(err.is_cluster());
/// assert_eq!(err.to_string(), "Topic 'orders' already exists");
/// ```
#[derive(Debug, Error)]
pub enum KafkaMcpError {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Connection properties could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    // ============================================================================
    // Tools/Validation Errors
    // ============================================================================
    /// Locally detected invalid arguments or session misuse
    #[error(transparent)]
    Tools(#[from] ToolsError),

    // ============================================================================
    // Cluster Errors
    // ============================================================================
    /// Errors reported by the Kafka cluster
    #[error(transparent)]
    Cluster(#[from] ClusterError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// Client construction, network and timeout failures
    #[error(transparent)]
    Transport(#[from] TransportError),

    // ============================================================================
    // System Errors
    // ============================================================================
    /// An operation completed with an error result
    #[error("Operation '{operation}' failed: {message}")]
    OperationFailed { operation: &'static str, message: String },

    /// Value could not be serialized for the wire
    #[error("Serialization failed: {reason}")]
    SerializationFailed { reason: String },

    /// Internal error (should be rare)
    #[error("Internal error: {0}")]
    Internal(String),
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl KafkaMcpError {
    /// Create a validation error
    #[inline]
    pub fn validation_error(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Tools(ToolsError::validation_error(field, reason))
    }

    /// Create a client creation error
    #[inline]
    pub fn client_creation(role: &'static str, reason: impl Into<String>) -> Self {
        Self::Transport(TransportError::client_creation(role, reason))
    }

    /// Create an operation timeout error
    #[inline]
    pub fn timeout(operation: &'static str, timeout_ms: u64) -> Self {
        Self::Transport(TransportError::timeout(operation, timeout_ms))
    }

    /// Create an operation failed error
    #[inline]
    pub fn operation_failed(operation: &'static str, message: impl Into<String>) -> Self {
        Self::OperationFailed {
            operation,
            message: message.into(),
        }
    }

    /// Create a serialization error
    #[inline]
    pub fn serialization_failed(reason: impl Into<String>) -> Self {
        Self::SerializationFailed { reason: reason.into() }
    }

    /// Whether the error was reported by the cluster
    #[inline]
    pub fn is_cluster(&self) -> bool {
        matches!(self, Self::Cluster(_))
    }

    /// Whether the error is a local transport or client failure
    #[inline]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The cluster error, if this is one
    pub fn as_cluster(&self) -> Option<&ClusterError> {
        match self {
            Self::Cluster(err) => Some(err),
            _ => None,
        }
    }
}

// ============================================================================
// Type Aliases
// ============================================================================

/// Result type alias for Kafka MCP operations
///
/// # Examples
///
/// ```rust
/// use kafka_mcp_error::KafkaMcpResult;
///
/// fn describe() -> KafkaMcpResult<()> {
///     Ok(())
/// }
/// ```
pub type KafkaMcpResult<T> = std::result::Result<T, KafkaMcpError>;
