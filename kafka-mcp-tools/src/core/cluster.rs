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

//! Session-scoped cluster manager
//!
//! A [`ClusterManager`] owns at most one admin handle and one publish handle.
//! Both are created on first use and reused until [`ClusterManager::close`].
//! Every operation returns an [`OperationResult`]; failures never escape as
//! errors.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use kafka_mcp_common::ConnectionOptions;
use kafka_mcp_error::ClusterError;
use kafka_mcp_error::ConfigError;
use kafka_mcp_error::KafkaMcpError;
use kafka_mcp_error::KafkaMcpResult;
use kafka_mcp_error::ToolsError;
use kafka_mcp_error::TransportError;
use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::admin::ClientFactory;
use crate::admin::KafkaClientFactory;
use crate::admin::MessagePublisher;
use crate::admin::TopicAdmin;
use crate::core::admin::ClientSettings;
use crate::core::message::types::PublishMetadata;
use crate::core::message::types::PublishRecord;
use crate::core::message::MessageService;
use crate::core::result::OperationResult;
use crate::core::topic::types::NewTopicRequest;
use crate::core::topic::types::TopicDetails;
use crate::core::topic::types::TopicSummary;
use crate::core::topic::TopicService;

/// Upper bound on waiting for a publish acknowledgment
pub const SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub const BROKER_INVALID_REPLICATION_FACTOR_MESSAGE: &str =
    "Invalid replication factor. It must be at least 1 or -1 for default.";
pub const BROKER_INVALID_PARTITIONS_MESSAGE: &str = "Invalid number of partitions. It must be a positive integer.";

pub struct ClusterManager<F: ClientFactory = KafkaClientFactory> {
    options: ConnectionOptions,
    settings: ClientSettings,
    factory: F,
    admin: Mutex<Option<Arc<F::Admin>>>,
    publisher: Mutex<Option<Arc<F::Publisher>>>,
    closed: AtomicBool,
}

impl ClusterManager {
    /// Load the properties file at `path` and prepare an rdkafka-backed session.
    ///
    /// No connection is made until the first operation.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        ConnectionOptions::load(path).map(Self::from_options)
    }

    pub fn from_options(options: ConnectionOptions) -> Self {
        Self::with_factory(options, KafkaClientFactory)
    }
}

impl<F: ClientFactory> ClusterManager<F> {
    pub fn with_factory(options: ConnectionOptions, factory: F) -> Self {
        let settings = ClientSettings::from_options(&options);
        Self {
            options,
            settings,
            factory,
            admin: Mutex::new(None),
            publisher: Mutex::new(None),
            closed: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn options(&self) -> &ConnectionOptions {
        &self.options
    }

    #[inline]
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn admin(&self) -> KafkaMcpResult<Arc<F::Admin>> {
        let mut slot = self.admin.lock();
        if self.is_closed() {
            return Err(TransportError::Closed.into());
        }
        if let Some(admin) = slot.as_ref() {
            return Ok(Arc::clone(admin));
        }
        let admin = Arc::new(self.factory.create_admin(&self.settings)?);
        info!("Kafka admin handle created for {}", self.settings.bootstrap_servers());
        *slot = Some(Arc::clone(&admin));
        Ok(admin)
    }

    fn publisher(&self) -> KafkaMcpResult<Arc<F::Publisher>> {
        let mut slot = self.publisher.lock();
        if self.is_closed() {
            return Err(TransportError::Closed.into());
        }
        if let Some(publisher) = slot.as_ref() {
            return Ok(Arc::clone(publisher));
        }
        let publisher = Arc::new(self.factory.create_publisher(&self.settings)?);
        info!("Kafka publish handle created for {}", self.settings.bootstrap_servers());
        *slot = Some(Arc::clone(&publisher));
        Ok(publisher)
    }

    /// Summaries of every topic, sorted by name
    pub async fn list_topics(&self) -> OperationResult<Vec<TopicSummary>> {
        let outcome = match self.admin() {
            Ok(admin) => TopicService::list_topics(admin.as_ref()).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(topics) => {
                let message = match topics.len() {
                    0 => "No topics found".to_string(),
                    1 => "Found 1 topic".to_string(),
                    n => format!("Found {n} topics"),
                };
                OperationResult::success(message, topics)
            }
            Err(e) => {
                error!("Failed to list topics: {}", e);
                OperationResult::error(e.to_string())
            }
        }
    }

    pub async fn create_topic(
        &self,
        name: &str,
        num_partitions: i32,
        replication_factor: i32,
        config: Option<BTreeMap<String, String>>,
    ) -> OperationResult<TopicSummary> {
        if let Err(e) = TopicService::validate_new_topic(num_partitions, replication_factor) {
            warn!(topic = %name, "Rejected topic creation: {}", e);
            return OperationResult::error(e.to_string());
        }
        let request =
            NewTopicRequest::new(name, num_partitions, replication_factor).with_configs(config.unwrap_or_default());
        let outcome = match self.admin() {
            Ok(admin) => TopicService::create_topic(admin.as_ref(), &request).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(topic) => {
                info!(topic = %name, "Topic created");
                OperationResult::success(format!("Topic '{name}' created successfully"), topic)
            }
            Err(e) => {
                error!(topic = %name, "Failed to create topic: {}", e);
                OperationResult::error(create_failure_message(&e))
            }
        }
    }

    /// Request deletion of a topic
    ///
    /// Success means the cluster accepted the request, not that removal finished.
    pub async fn delete_topic(&self, name: &str) -> OperationResult<()> {
        let outcome = match self.admin() {
            Ok(admin) => TopicService::delete_topic(admin.as_ref(), name).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(()) => {
                info!(topic = %name, "Topic deletion accepted");
                OperationResult::success(format!("Topic '{name}' deleted successfully"), ())
            }
            Err(e) => {
                error!(topic = %name, "Failed to delete topic: {}", e);
                OperationResult::error(delete_failure_message(name, &e))
            }
        }
    }

    pub async fn get_topic_info(&self, name: &str) -> OperationResult<TopicDetails> {
        let outcome = match self.admin() {
            Ok(admin) => TopicService::describe_topic(admin.as_ref(), name).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(details) => OperationResult::success(format!("Topic '{name}' info retrieved successfully"), details),
            Err(e) => {
                error!(topic = %name, "Failed to get topic info: {}", e);
                OperationResult::error(describe_failure_message(name, &e))
            }
        }
    }

    /// Publish `message` as JSON text, keyed by `key` when it is non-empty
    pub async fn send_message(&self, topic: &str, message: &Value, key: Option<&str>) -> OperationResult<PublishMetadata> {
        let outcome = match PublishRecord::json(topic, message, key) {
            Ok(record) => match self.publisher() {
                Ok(publisher) => MessageService::send(publisher.as_ref(), &record, SEND_TIMEOUT).await,
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };
        match outcome {
            Ok(metadata) => {
                debug!(
                    topic = %topic,
                    "Message delivered to partition {} at offset {}",
                    metadata.partition,
                    metadata.offset
                );
                OperationResult::success(format!("Message sent to topic '{topic}'"), metadata)
            }
            Err(e) => {
                error!(topic = %topic, "Failed to send message: {}", e);
                OperationResult::error(format!("Failed to send message: {e}"))
            }
        }
    }

    /// Release both handles
    ///
    /// Idempotent. Later operations fail with a closed-connection error.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            debug!("Cluster manager already closed");
            return;
        }
        if let Some(admin) = self.admin.lock().take() {
            admin.close();
            info!("Kafka admin handle closed");
        }
        if let Some(publisher) = self.publisher.lock().take() {
            publisher.close();
            info!("Kafka publish handle closed");
        }
    }
}

fn create_failure_message(err: &KafkaMcpError) -> String {
    match err {
        KafkaMcpError::Tools(ToolsError::ValidationFailed { message }) => message.clone(),
        KafkaMcpError::Cluster(cluster) => match cluster {
            ClusterError::TopicAlreadyExists { .. } => cluster.to_string(),
            ClusterError::InvalidReplicationFactor { .. } => BROKER_INVALID_REPLICATION_FACTOR_MESSAGE.to_string(),
            ClusterError::InvalidPartitions { .. } => BROKER_INVALID_PARTITIONS_MESSAGE.to_string(),
            other => format!("Kafka error: {other}"),
        },
        other => format!("Unexpected error: {other}"),
    }
}

fn delete_failure_message(name: &str, err: &KafkaMcpError) -> String {
    match err {
        KafkaMcpError::Cluster(ClusterError::UnknownTopicOrPartition { .. }) => {
            format!("Topic '{name}' does not exist or already deleted.")
        }
        KafkaMcpError::Cluster(other) => format!("Kafka error: {other}"),
        other => format!("Failed to initiate topic deletion: {other}"),
    }
}

fn describe_failure_message(name: &str, err: &KafkaMcpError) -> String {
    match err {
        KafkaMcpError::Tools(ToolsError::TopicNotFound { .. })
        | KafkaMcpError::Cluster(ClusterError::UnknownTopicOrPartition { .. }) => {
            format!("Topic '{name}' not found")
        }
        other => format!("Failed to get topic info for '{name}': {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_failure_messages() {
        let err = ClusterError::topic_already_exists("orders").into();
        assert_eq!(create_failure_message(&err), "Topic 'orders' already exists");

        let err = ClusterError::invalid_replication_factor("orders").into();
        assert_eq!(create_failure_message(&err), BROKER_INVALID_REPLICATION_FACTOR_MESSAGE);

        let err = ClusterError::invalid_partitions("orders").into();
        assert_eq!(create_failure_message(&err), BROKER_INVALID_PARTITIONS_MESSAGE);

        let err = ClusterError::broker(87, "Broker: Policy violation").into();
        assert_eq!(create_failure_message(&err), "Kafka error: Broker: Policy violation");

        let err = TransportError::Closed.into();
        assert_eq!(create_failure_message(&err), "Unexpected error: Connection is closed");
    }

    #[test]
    fn test_delete_failure_messages() {
        let err = ClusterError::unknown_topic("orders").into();
        assert_eq!(
            delete_failure_message("orders", &err),
            "Topic 'orders' does not exist or already deleted."
        );

        let err = ClusterError::broker(29, "Broker: Topic authorization failed").into();
        assert_eq!(
            delete_failure_message("orders", &err),
            "Kafka error: Broker: Topic authorization failed"
        );

        let err = TransportError::client("Local: Broker transport failure").into();
        assert_eq!(
            delete_failure_message("orders", &err),
            "Failed to initiate topic deletion: Local: Broker transport failure"
        );
    }

    #[test]
    fn test_describe_failure_messages() {
        let err = ToolsError::topic_not_found("orders").into();
        assert_eq!(describe_failure_message("orders", &err), "Topic 'orders' not found");

        let err = ClusterError::unknown_topic("orders").into();
        assert_eq!(describe_failure_message("orders", &err), "Topic 'orders' not found");

        let err = TransportError::timeout("describe_topics", 10_000).into();
        assert_eq!(
            describe_failure_message("orders", &err),
            "Failed to get topic info for 'orders': Operation 'describe_topics' timed out after 10000ms"
        );
    }

    #[test]
    fn test_client_errors_reach_failure_messages() {
        use rdkafka::error::KafkaError;
        use rdkafka::error::RDKafkaErrorCode;

        use crate::admin::default_kafka_admin_ext::map_kafka_error;

        let timed_out = KafkaError::AdminOp(RDKafkaErrorCode::OperationTimedOut);
        let err = map_kafka_error(timed_out.clone());
        assert_eq!(create_failure_message(&err), format!("Kafka error: {timed_out}"));

        let denied = KafkaError::AdminOp(RDKafkaErrorCode::TopicAuthorizationFailed);
        let err = map_kafka_error(denied.clone());
        assert_eq!(delete_failure_message("orders", &err), format!("Kafka error: {denied}"));

        let fetch = KafkaError::MetadataFetch(RDKafkaErrorCode::BrokerTransportFailure);
        let err = map_kafka_error(fetch.clone());
        assert_eq!(
            describe_failure_message("orders", &err),
            format!("Failed to get topic info for 'orders': {fetch}")
        );

        let produce = KafkaError::MessageProduction(RDKafkaErrorCode::MessageSizeTooLarge);
        let err = map_kafka_error(produce.clone());
        assert_eq!(create_failure_message(&err), format!("Kafka error: {produce}"));

        let canceled = map_kafka_error(KafkaError::Canceled);
        assert!(delete_failure_message("orders", &canceled).starts_with("Failed to initiate topic deletion: "));
    }

    #[test]
    fn test_from_options_defers_connection() {
        let manager = ClusterManager::from_options(ConnectionOptions::parse("bootstrap.servers=kafka:29092"));
        assert_eq!(manager.settings().bootstrap_servers(), "kafka:29092");
        assert!(manager.admin.lock().is_none());
        assert!(manager.publisher.lock().is_none());
        manager.close();
        manager.close();
        assert!(manager.is_closed());
    }
}
