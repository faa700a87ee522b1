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

//! Normalized operation results
//!
//! Every [`ClusterManager`](crate::core::cluster::ClusterManager) operation
//! returns an [`OperationResult`]. Serialized, it is a JSON object with the
//! keys `status`, `message` and, on success, an operation specific payload
//! key (`topic`, `topics` or `metadata`):
//!
//! ```json
//! {
//!   "status": "success",
//!   "message": "Topic 'orders' created successfully",
//!   "topic": { "name": "orders", "partitions": 3, "replication_factor": 1 }
//! }
//! ```

use std::fmt;

use kafka_mcp_error::KafkaMcpError;
use kafka_mcp_error::KafkaMcpResult;
use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;

use crate::core::message::types::PublishMetadata;
use crate::core::topic::types::TopicDetails;
use crate::core::topic::types::TopicSummary;

const FALLBACK_ERROR_MESSAGE: &str = "Operation failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload carried by a successful result
///
/// `FIELD` is the JSON key the payload is serialized under; `None` means the
/// result carries no payload key at all.
pub trait Payload: Serialize {
    const FIELD: Option<&'static str>;
}

impl Payload for () {
    const FIELD: Option<&'static str> = None;
}

impl Payload for TopicSummary {
    const FIELD: Option<&'static str> = Some("topic");
}

impl Payload for TopicDetails {
    const FIELD: Option<&'static str> = Some("topic");
}

impl Payload for Vec<TopicSummary> {
    const FIELD: Option<&'static str> = Some("topics");
}

impl Payload for PublishMetadata {
    const FIELD: Option<&'static str> = Some("metadata");
}

/// Outcome of one cluster operation
///
/// The payload only exists on success; the message is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult<T> {
    Success { message: String, payload: T },
    Error { message: String },
}

impl<T> OperationResult<T> {
    #[inline]
    pub fn success(message: impl Into<String>, payload: T) -> Self {
        OperationResult::Success {
            message: message.into(),
            payload,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        OperationResult::Error {
            message: if message.is_empty() {
                FALLBACK_ERROR_MESSAGE.to_string()
            } else {
                message
            },
        }
    }

    pub fn status(&self) -> Status {
        match self {
            OperationResult::Success { .. } => Status::Success,
            OperationResult::Error { .. } => Status::Error,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success { .. })
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, OperationResult::Error { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            OperationResult::Success { message, .. } | OperationResult::Error { message } => message,
        }
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            OperationResult::Success { payload, .. } => Some(payload),
            OperationResult::Error { .. } => None,
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            OperationResult::Success { payload, .. } => Some(payload),
            OperationResult::Error { .. } => None,
        }
    }
}

impl<T: Payload> OperationResult<T> {
    /// Render as JSON indented with two spaces
    pub fn to_json_pretty(&self) -> KafkaMcpResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| KafkaMcpError::serialization_failed(e.to_string()))
    }
}

impl<T: Payload> Serialize for OperationResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let field = match self {
            OperationResult::Success { payload, .. } => T::FIELD.map(|field| (field, payload)),
            OperationResult::Error { .. } => None,
        };
        let mut map = serializer.serialize_map(Some(2 + usize::from(field.is_some())))?;
        map.serialize_entry("status", &self.status())?;
        map.serialize_entry("message", self.message())?;
        if let Some((key, payload)) = field {
            map.serialize_entry(key, payload)?;
        }
        map.end()
    }
}
