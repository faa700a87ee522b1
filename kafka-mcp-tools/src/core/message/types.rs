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

//! Message-related types

use cheetah_string::CheetahString;
use kafka_mcp_error::KafkaMcpError;
use kafka_mcp_error::KafkaMcpResult;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// A record ready to be handed to a publisher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRecord {
    pub topic: CheetahString,
    pub key: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

impl PublishRecord {
    /// Encode `value` as JSON text
    ///
    /// An empty key produces a keyless record.
    pub fn json(topic: impl Into<CheetahString>, value: &Value, key: Option<&str>) -> KafkaMcpResult<Self> {
        let payload = serde_json::to_vec(value).map_err(|e| KafkaMcpError::serialization_failed(e.to_string()))?;
        Ok(Self {
            topic: topic.into(),
            key: key.filter(|k| !k.is_empty()).map(|k| k.as_bytes().to_vec()),
            payload,
        })
    }
}

/// Broker acknowledgment of a published record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordAck {
    pub partition: i32,
    pub offset: i64,
}

/// Where a sent message landed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishMetadata {
    pub topic: CheetahString,
    pub partition: i32,
    pub offset: i64,
}

impl PublishMetadata {
    pub fn new(topic: impl Into<CheetahString>, ack: RecordAck) -> Self {
        Self {
            topic: topic.into(),
            partition: ack.partition,
            offset: ack.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_record_without_key() {
        let record = PublishRecord::json("orders", &json!({"id": 7}), None).unwrap();
        assert_eq!(record.topic.as_str(), "orders");
        assert_eq!(record.key, None);
        assert_eq!(record.payload, br#"{"id":7}"#.to_vec());
    }

    #[test]
    fn test_json_record_with_key() {
        let record = PublishRecord::json("orders", &json!("hello"), Some("cust-ü")).unwrap();
        assert_eq!(record.key.as_deref(), Some("cust-ü".as_bytes()));
        assert_eq!(record.payload, br#""hello""#.to_vec());
    }

    #[test]
    fn test_empty_key_is_keyless() {
        let record = PublishRecord::json("orders", &json!(null), Some("")).unwrap();
        assert_eq!(record.key, None);
        assert_eq!(record.payload, b"null".to_vec());
    }
}
