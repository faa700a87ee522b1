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

//! Transport-related errors for Kafka operations

use thiserror::Error;

/// Client, network and timeout failures
#[derive(Debug, Error)]
pub enum TransportError {
    /// Operation did not complete in time
    #[error("Operation '{operation}' timed out after {timeout_ms}ms")]
    Timeout { operation: &'static str, timeout_ms: u64 },

    /// Client handle could not be constructed
    #[error("Failed to create {role} client: {reason}")]
    ClientCreation { role: &'static str, reason: String },

    /// Handles were released by close()
    #[error("Connection is closed")]
    Closed,

    /// Any other client-side failure
    #[error("{message}")]
    Client { message: String },
}

impl TransportError {
    /// Create an operation timeout error
    #[inline]
    pub fn timeout(operation: &'static str, timeout_ms: u64) -> Self {
        Self::Timeout { operation, timeout_ms }
    }

    /// Create a client creation error
    #[inline]
    pub fn client_creation(role: &'static str, reason: impl Into<String>) -> Self {
        Self::ClientCreation {
            role,
            reason: reason.into(),
        }
    }

    /// Create a generic client error
    #[inline]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        assert_eq!(
            TransportError::timeout("send_message", 10_000).to_string(),
            "Operation 'send_message' timed out after 10000ms"
        );
        assert_eq!(
            TransportError::client_creation("admin", "No such configuration property: \"foo\"").to_string(),
            "Failed to create admin client: No such configuration property: \"foo\""
        );
        assert_eq!(TransportError::Closed.to_string(), "Connection is closed");
        assert_eq!(
            TransportError::client("Local: Broker transport failure").to_string(),
            "Local: Broker transport failure"
        );
    }
}
