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

//! Tools and admin operation specific errors
//!
//! This module contains errors detected locally by the admin tools before any
//! request reaches the cluster.

use thiserror::Error;

/// Tools-specific errors for admin operations
#[derive(Debug, Error)]
pub enum ToolsError {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    /// Input validation failed
    #[error("Validation failed for '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    /// Validation error with a ready-made message
    #[error("{message}")]
    ValidationFailed { message: String },

    // ============================================================================
    // Topic Errors
    // ============================================================================
    /// Topic not found in metadata
    #[error("Topic '{topic}' not found")]
    TopicNotFound { topic: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ToolsError {
    // ============================================================================
    // Convenience Constructors
    // ============================================================================

    /// Create a validation error
    #[inline]
    pub fn validation_error(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a validation error carrying a complete message
    #[inline]
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    /// Create a topic not found error
    #[inline]
    pub fn topic_not_found(topic: impl Into<String>) -> Self {
        Self::TopicNotFound { topic: topic.into() }
    }

    /// Create an internal error
    #[inline]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors() {
        let err = ToolsError::validation_error("topic", "Topic name cannot be empty");
        assert_eq!(err.to_string(), "Validation failed for 'topic': Topic name cannot be empty");

        let err = ToolsError::validation_failed("Number of partitions must be at least 1.");
        assert_eq!(err.to_string(), "Number of partitions must be at least 1.");
    }

    #[test]
    fn test_topic_and_internal_errors() {
        assert_eq!(
            ToolsError::topic_not_found("orders").to_string(),
            "Topic 'orders' not found"
        );
        assert_eq!(ToolsError::internal("oops").to_string(), "Internal error: oops");
    }
}
