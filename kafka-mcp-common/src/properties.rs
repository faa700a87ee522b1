/*
 * Licensed to the Apache Software Foundation (ASF) under one or more
 * contributor license agreements.  See the NOTICE file distributed with
 * this work for additional information regarding copyright ownership.
 * The ASF licenses this file to You under the Apache License, Version 2.0
 * (the "License"); you may not use this file except in compliance with
 * the License.  You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Connection properties loading
//!
//! The source is plain UTF-8 text with one `key=value` pair per line:
//!
//! ```text
//! # cluster entry points
//! bootstrap.servers=broker-1:9092,broker-2:9092
//! client.id=ops-console
//! security.protocol=PLAINTEXT
//! ```
//!
//! Lines are trimmed; blank lines and lines starting with `#` are skipped and
//! lines without `=` are ignored. Keys and values stay strings.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use kafka_mcp_error::ConfigError;
use tracing::error;
use tracing::info;

pub const BOOTSTRAP_SERVERS: &str = "bootstrap.servers";
pub const CLIENT_ID: &str = "client.id";
pub const DEFAULT_BOOTSTRAP_SERVERS: &str = "localhost:9092";
pub const DEFAULT_CLIENT_ID: &str = "kafka-mcp-server";

/// Flat, immutable mapping of client options loaded from a properties source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionOptions {
    entries: BTreeMap<String, String>,
}

impl ConnectionOptions {
    /// Read and parse the properties file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            error!("Failed to load config file {}: {}", path.display(), e);
            ConfigError::from_io(path.display().to_string(), e)
        })?;
        let options = Self::parse(&text);
        info!("Loaded Kafka config from {}", path.display());
        Ok(options)
    }

    /// Parse properties text. Later duplicates overwrite earlier ones.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// `bootstrap.servers`, or `localhost:9092` when absent
    pub fn bootstrap_servers(&self) -> &str {
        self.get(BOOTSTRAP_SERVERS).unwrap_or(DEFAULT_BOOTSTRAP_SERVERS)
    }

    /// `client.id`, or `kafka-mcp-server` when absent
    pub fn client_id(&self) -> &str {
        self.get(CLIENT_ID).unwrap_or(DEFAULT_CLIENT_ID)
    }

    /// Every entry except the bootstrap servers and client id.
    pub fn tuning_params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter(|(key, _)| *key != BOOTSTRAP_SERVERS && *key != CLIENT_ID)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for ConnectionOptions {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConnectionOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into().trim().to_string(), v.into().trim().to_string()))
                .collect(),
        }
    }
}

impl IntoIterator for ConnectionOptions {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
