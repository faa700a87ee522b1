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

//! Client settings resolved from connection options
//!
//! - [`ClientSettingsBuilder`] - Fluent builder for client configuration
//! - [`ClientSettings`] - What a [`ClientFactory`](crate::admin::ClientFactory) receives

use std::collections::BTreeMap;

use kafka_mcp_common::properties::BOOTSTRAP_SERVERS;
use kafka_mcp_common::properties::CLIENT_ID;
use kafka_mcp_common::properties::DEFAULT_BOOTSTRAP_SERVERS;
use kafka_mcp_common::properties::DEFAULT_CLIENT_ID;
use kafka_mcp_common::ConnectionOptions;

/// Builder for client settings
///
/// # Examples
///
/// ```rust
/// use kafka_mcp_tools::core::admin::ClientSettingsBuilder;
///
/// let settings = ClientSettingsBuilder::new()
///     .bootstrap_servers("broker-1:9092,broker-2:9092")
///     .client_id("ops-console")
///     .param("request.timeout.ms", "15000")
///     .build();
///
/// assert_eq!(settings.bootstrap_servers(), "broker-1:9092,broker-2:9092");
/// assert_eq!(settings.params().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientSettingsBuilder {
    bootstrap_servers: Option<String>,
    client_id: Option<String>,
    params: BTreeMap<String, String>,
}

impl ClientSettingsBuilder {
    /// Create a new builder with default configuration
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder from loaded connection options
    ///
    /// `bootstrap.servers` and `client.id` are only taken when present; every
    /// other entry becomes a tuning parameter.
    pub fn options(mut self, options: &ConnectionOptions) -> Self {
        if let Some(servers) = options.get(BOOTSTRAP_SERVERS) {
            self.bootstrap_servers = Some(servers.to_string());
        }
        if let Some(client_id) = options.get(CLIENT_ID) {
            self.client_id = Some(client_id.to_string());
        }
        for (key, value) in options.tuning_params() {
            self.params.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Set the cluster entry points
    ///
    /// Comma separated: `"broker-1:9092,broker-2:9092"`
    #[inline]
    pub fn bootstrap_servers(mut self, servers: impl Into<String>) -> Self {
        self.bootstrap_servers = Some(servers.into());
        self
    }

    /// Set the session identifier
    ///
    /// If not set, defaults to `"kafka-mcp-server"`
    #[inline]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set one tuning parameter, overriding any earlier value
    #[inline]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> ClientSettings {
        ClientSettings {
            bootstrap_servers: self
                .bootstrap_servers
                .unwrap_or_else(|| DEFAULT_BOOTSTRAP_SERVERS.to_string()),
            client_id: self.client_id.unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string()),
            params: self.params,
        }
    }
}

/// Resolved settings shared by the admin and publish handles of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    bootstrap_servers: String,
    client_id: String,
    params: BTreeMap<String, String>,
}

impl ClientSettings {
    pub fn from_options(options: &ConnectionOptions) -> Self {
        ClientSettingsBuilder::new().options(options).build()
    }

    #[inline]
    pub fn bootstrap_servers(&self) -> &str {
        &self.bootstrap_servers
    }

    #[inline]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Tuning parameters, excluding bootstrap servers and client id
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_default() {
        let settings = ClientSettingsBuilder::default().build();
        assert_eq!(settings.bootstrap_servers(), "localhost:9092");
        assert_eq!(settings.client_id(), "kafka-mcp-server");
        assert_eq!(settings.params().count(), 0);
    }

    #[test]
    fn test_builder_chaining() {
        let settings = ClientSettingsBuilder::new()
            .bootstrap_servers("addr1:9092")
            .bootstrap_servers("addr2:9092")
            .build();

        assert_eq!(settings.bootstrap_servers(), "addr2:9092");
    }

    #[test]
    fn test_from_options_splits_connection_keys() {
        let options = ConnectionOptions::parse(
            "bootstrap.servers=kafka:29092\nclient.id=ops\nsecurity.protocol=PLAINTEXT\nlinger.ms=5",
        );
        let settings = ClientSettings::from_options(&options);

        assert_eq!(settings.bootstrap_servers(), "kafka:29092");
        assert_eq!(settings.client_id(), "ops");
        let params: Vec<_> = settings.params().collect();
        assert_eq!(params, vec![("linger.ms", "5"), ("security.protocol", "PLAINTEXT")]);
    }

    #[test]
    fn test_from_options_applies_defaults() {
        let settings = ClientSettings::from_options(&ConnectionOptions::parse("acks=all"));
        assert_eq!(settings.bootstrap_servers(), "localhost:9092");
        assert_eq!(settings.client_id(), "kafka-mcp-server");
    }

    #[test]
    fn test_explicit_override_after_options() {
        let options = ConnectionOptions::parse("bootstrap.servers=kafka:29092\nacks=1");
        let settings = ClientSettingsBuilder::new()
            .options(&options)
            .bootstrap_servers("override:9092")
            .param("acks", "all")
            .build();

        assert_eq!(settings.bootstrap_servers(), "override:9092");
        assert_eq!(settings.params().collect::<Vec<_>>(), vec![("acks", "all")]);
    }
}
