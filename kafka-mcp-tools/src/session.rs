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

//! Tool-style dispatch session
//!
//! [`ToolSession`] is the thin request surface in front of a
//! [`ClusterManager`]: one named call per tool, string in and string out.
//! It scopes exactly one manager per connection lifetime and refuses calls
//! made before `initialize_connection`.

use std::collections::BTreeMap;
use std::sync::Arc;

use kafka_mcp_common::ConnectionOptions;
use parking_lot::Mutex;
use serde_json::Value;
use tracing::info;
use tracing::warn;

use crate::admin::ClientFactory;
use crate::admin::KafkaClientFactory;
use crate::core::cluster::ClusterManager;
use crate::core::result::OperationResult;
use crate::core::result::Payload;
use crate::core::topic::types::DEFAULT_PARTITIONS;
use crate::core::topic::types::DEFAULT_REPLICATION_FACTOR;

pub const NOT_CONNECTED_MESSAGE: &str = "Error: Not connected to Kafka. Please use kafka_initialize_connection first.";
pub const MISSING_MESSAGE_ERROR: &str = "Error: 'message' must be provided.";
pub const NO_TOPICS_MESSAGE: &str = "No topics found in the Kafka cluster.";

pub struct ToolSession<F: ClientFactory + Clone = KafkaClientFactory> {
    factory: F,
    manager: Mutex<Option<Arc<ClusterManager<F>>>>,
}

impl ToolSession {
    pub fn new() -> Self {
        Self::with_factory(KafkaClientFactory)
    }
}

impl Default for ToolSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ClientFactory + Clone> ToolSession<F> {
    pub fn with_factory(factory: F) -> Self {
        Self {
            factory,
            manager: Mutex::new(None),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.manager.lock().is_some()
    }

    fn manager(&self) -> Option<Arc<ClusterManager<F>>> {
        self.manager.lock().clone()
    }

    /// Load `config_file` and make the resulting manager current
    ///
    /// A previously held manager is closed.
    pub fn initialize_connection(&self, config_file: &str) -> String {
        let options = match ConnectionOptions::load(config_file) {
            Ok(options) => options,
            Err(e) => {
                warn!("Connection initialization failed: {}", e);
                return format!("Failed to connect to Kafka: {e}");
            }
        };
        let manager = Arc::new(ClusterManager::with_factory(options, self.factory.clone()));
        if let Some(previous) = self.manager.lock().replace(manager) {
            info!("Replacing existing Kafka session");
            previous.close();
        }
        format!("Successfully connected to Kafka using config file: {config_file}")
    }

    pub async fn list_topics(&self) -> String {
        let Some(manager) = self.manager() else {
            return NOT_CONNECTED_MESSAGE.to_string();
        };
        match manager.list_topics().await {
            OperationResult::Success { payload: topics, .. } if topics.is_empty() => NO_TOPICS_MESSAGE.to_string(),
            OperationResult::Success { payload: topics, .. } => {
                let lines: Vec<String> = topics
                    .iter()
                    .map(|topic| {
                        format!(
                            "• {} (partitions: {}, replication: {})",
                            topic.name, topic.partitions, topic.replication_factor
                        )
                    })
                    .collect();
                format!("Topics in Kafka cluster:\n{}", lines.join("\n"))
            }
            OperationResult::Error { message } => format!("Error listing topics: {message}"),
        }
    }

    /// Create a topic; partitions and replication factor default to 1
    pub async fn create_topic(
        &self,
        name: &str,
        partitions: Option<i32>,
        replication_factor: Option<i32>,
        config: Option<BTreeMap<String, String>>,
    ) -> String {
        let Some(manager) = self.manager() else {
            return NOT_CONNECTED_MESSAGE.to_string();
        };
        let result = manager
            .create_topic(
                name,
                partitions.unwrap_or(DEFAULT_PARTITIONS),
                replication_factor.unwrap_or(DEFAULT_REPLICATION_FACTOR),
                config,
            )
            .await;
        render(&result, "Error creating topic")
    }

    pub async fn delete_topic(&self, name: &str) -> String {
        let Some(manager) = self.manager() else {
            return NOT_CONNECTED_MESSAGE.to_string();
        };
        render(&manager.delete_topic(name).await, "Error deleting topic")
    }

    pub async fn get_topic_info(&self, name: &str) -> String {
        let Some(manager) = self.manager() else {
            return NOT_CONNECTED_MESSAGE.to_string();
        };
        render(&manager.get_topic_info(name).await, "Error getting topic info")
    }

    /// Send one message; a missing or `null` message is rejected before the
    /// connection check
    pub async fn send_message(&self, topic: &str, message: Option<&Value>, key: Option<&str>) -> String {
        let Some(message) = message.filter(|value| !value.is_null()) else {
            return MISSING_MESSAGE_ERROR.to_string();
        };
        let Some(manager) = self.manager() else {
            return NOT_CONNECTED_MESSAGE.to_string();
        };
        render(&manager.send_message(topic, message, key).await, "Error sending message")
    }

    /// Close the current manager, if any
    pub fn close(&self) {
        if let Some(manager) = self.manager.lock().take() {
            manager.close();
            info!("Kafka session closed");
        }
    }
}

fn render<T: Payload>(result: &OperationResult<T>, failure_prefix: &str) -> String {
    result
        .to_json_pretty()
        .unwrap_or_else(|e| format!("{failure_prefix}: {e}"))
}
