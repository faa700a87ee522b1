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

//! CLI input validators
//!
//! Provides validation for command-line arguments

use serde_json::Value;

use crate::core::KafkaMcpError;
use crate::core::KafkaMcpResult;

const MAX_TOPIC_NAME_LENGTH: usize = 249;

/// Validate topic name
///
/// Kafka accepts ASCII alphanumerics, `.`, `_` and `-`, up to 249 characters.
pub fn validate_topic_name(topic: &str) -> KafkaMcpResult<()> {
    if topic.is_empty() {
        return Err(KafkaMcpError::validation_error("topic", "Topic name cannot be empty"));
    }

    if topic.len() > MAX_TOPIC_NAME_LENGTH {
        return Err(KafkaMcpError::validation_error(
            "topic",
            format!("Name exceeds maximum length of {MAX_TOPIC_NAME_LENGTH} characters"),
        ));
    }

    if let Some(ch) = topic
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(KafkaMcpError::validation_error(
            "topic",
            format!("Name '{topic}' contains invalid character '{ch}'"),
        ));
    }

    Ok(())
}

/// Parse a `key=value` pair, used as a clap value parser
pub fn parse_key_value(entry: &str) -> Result<(String, String), String> {
    let (key, value) = entry
        .split_once('=')
        .ok_or_else(|| format!("invalid entry '{entry}', expected key=value"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid entry '{entry}', key cannot be empty"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Interpret a message argument as JSON, falling back to a JSON string
pub fn parse_message_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_validate_topic_name() {
        // Valid
        assert!(validate_topic_name("orders").is_ok());
        assert!(validate_topic_name("orders.v2_eu-west").is_ok());

        // Invalid: empty
        assert!(validate_topic_name("").is_err());

        // Invalid: too long
        assert!(validate_topic_name(&"a".repeat(249)).is_ok());
        assert!(validate_topic_name(&"a".repeat(250)).is_err());

        // Invalid: invalid characters
        assert!(validate_topic_name("orders/eu").is_err());
        assert!(validate_topic_name("orders eu").is_err());
        assert!(validate_topic_name("bestellungen-ü").is_err());

        let err = validate_topic_name("orders/eu").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed for 'topic': Name 'orders/eu' contains invalid character '/'"
        );
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("retention.ms=86400000"),
            Ok(("retention.ms".to_string(), "86400000".to_string()))
        );
        assert_eq!(
            parse_key_value("cleanup.policy = compact,delete"),
            Ok(("cleanup.policy".to_string(), "compact,delete".to_string()))
        );
        assert_eq!(parse_key_value("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_key_value("no-separator").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn test_parse_message_value() {
        assert_eq!(parse_message_value(r#"{"id": 7}"#), json!({"id": 7}));
        assert_eq!(parse_message_value("42"), json!(42));
        assert_eq!(parse_message_value("hello world"), json!("hello world"));
    }
}
