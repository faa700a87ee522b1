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

//! rdkafka-backed client handles

use std::sync::Arc;
use std::time::Duration;

use cheetah_string::CheetahString;
use kafka_mcp_error::ClusterError;
use kafka_mcp_error::KafkaMcpError;
use kafka_mcp_error::KafkaMcpResult;
use kafka_mcp_error::ToolsError;
use kafka_mcp_error::TransportError;
use rdkafka::admin::AdminClient;
use rdkafka::admin::AdminOptions;
use rdkafka::admin::NewTopic;
use rdkafka::admin::TopicReplication;
use rdkafka::admin::TopicResult;
use rdkafka::client::DefaultClientContext;
use rdkafka::config::ClientConfig;
use rdkafka::error::KafkaError;
use rdkafka::error::RDKafkaErrorCode;
use rdkafka::metadata::Metadata;
use rdkafka::producer::FutureProducer;
use rdkafka::producer::FutureRecord;
use rdkafka::producer::Producer;
use rdkafka::util::Timeout;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::admin::kafka_admin_ext::ClientFactory;
use crate::admin::kafka_admin_ext::MessagePublisher;
use crate::admin::kafka_admin_ext::TopicAdmin;
use crate::core::admin::ClientSettings;
use crate::core::message::types::PublishRecord;
use crate::core::message::types::RecordAck;
use crate::core::topic::types::NewTopicRequest;
use crate::core::topic::types::PartitionMetadata;
use crate::core::topic::types::TopicMetadata;

pub const METADATA_TIMEOUT: Duration = Duration::from_secs(10);
pub const ADMIN_OPERATION_TIMEOUT: Duration = Duration::from_secs(30);
pub const PRODUCER_FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the librdkafka configuration for a session.
///
/// Tuning parameters are passed through verbatim; librdkafka rejects unknown
/// keys when the client is created.
pub fn client_config(settings: &ClientSettings) -> ClientConfig {
    let mut config = ClientConfig::new();
    config
        .set("bootstrap.servers", settings.bootstrap_servers())
        .set("client.id", settings.client_id());
    for (key, value) in settings.params() {
        config.set(key, value);
    }
    config
}

/// Configuration for the admin handle.
///
/// librdkafka lets producer-type clients, which `AdminClient` is, auto-create
/// topics on a single-topic metadata request. Describing a missing topic must
/// not create it.
pub fn admin_client_config(settings: &ClientSettings) -> ClientConfig {
    let mut config = client_config(settings);
    config.set("allow.auto.create.topics", "false");
    config
}

/// Map a broker error code onto the cluster error taxonomy.
pub fn map_error_code(topic: &str, code: RDKafkaErrorCode) -> ClusterError {
    match code {
        RDKafkaErrorCode::TopicAlreadyExists => ClusterError::topic_already_exists(topic),
        RDKafkaErrorCode::UnknownTopicOrPartition | RDKafkaErrorCode::UnknownTopic => {
            ClusterError::unknown_topic(topic)
        }
        RDKafkaErrorCode::InvalidPartitions => ClusterError::invalid_partitions(topic),
        RDKafkaErrorCode::InvalidReplicationFactor => ClusterError::invalid_replication_factor(topic),
        other => ClusterError::broker(other as i32, other.to_string()),
    }
}

/// Errors carrying a librdkafka code are cluster errors, the rest are local.
///
/// `AdminOp` carries a code but `rdkafka_error_code` does not expose it.
pub fn map_kafka_error(err: KafkaError) -> KafkaMcpError {
    let code = match &err {
        KafkaError::AdminOp(code) => Some(*code),
        other => other.rdkafka_error_code(),
    };
    match code {
        Some(code) => ClusterError::broker(code as i32, err.to_string()).into(),
        None => TransportError::client(err.to_string()).into(),
    }
}

fn map_topic_results(results: Vec<TopicResult>) -> KafkaMcpResult<()> {
    for result in results {
        if let Err((topic, code)) = result {
            return Err(map_error_code(&topic, code).into());
        }
    }
    Ok(())
}

fn convert_metadata(metadata: &Metadata, requested: Option<&str>) -> KafkaMcpResult<Vec<TopicMetadata>> {
    let mut topics = Vec::with_capacity(metadata.topics().len());
    for topic in metadata.topics() {
        if let Some(err) = topic.error() {
            let code = RDKafkaErrorCode::from(err);
            match code {
                RDKafkaErrorCode::UnknownTopicOrPartition | RDKafkaErrorCode::UnknownTopic => continue,
                _ if requested.is_some() => {
                    return Err(ClusterError::broker(code as i32, code.to_string()).into());
                }
                _ => warn!("Topic {} reported metadata error: {}", topic.name(), code),
            }
        }
        topics.push(TopicMetadata {
            name: CheetahString::from(topic.name()),
            partitions: topic
                .partitions()
                .iter()
                .map(|partition| PartitionMetadata {
                    id: partition.id(),
                    leader: partition.leader(),
                    replicas: partition.replicas().to_vec(),
                    isr: partition.isr().to_vec(),
                })
                .collect(),
        });
    }
    Ok(topics)
}

/// Admin handle over an rdkafka [`AdminClient`].
pub struct DefaultKafkaAdminExt {
    admin: Arc<AdminClient<DefaultClientContext>>,
}

impl DefaultKafkaAdminExt {
    pub fn new(settings: &ClientSettings) -> KafkaMcpResult<Self> {
        let admin: AdminClient<DefaultClientContext> = admin_client_config(settings)
            .create()
            .map_err(|e| KafkaMcpError::client_creation("admin", e.to_string()))?;
        info!(
            "Created Kafka admin client {} for {}",
            settings.client_id(),
            settings.bootstrap_servers()
        );
        Ok(Self { admin: Arc::new(admin) })
    }

    fn admin_options() -> AdminOptions {
        AdminOptions::new().operation_timeout(Some(ADMIN_OPERATION_TIMEOUT))
    }
}

impl TopicAdmin for DefaultKafkaAdminExt {
    async fn describe_topics(&self, topic: Option<&str>) -> KafkaMcpResult<Vec<TopicMetadata>> {
        let admin = Arc::clone(&self.admin);
        let topic = topic.map(str::to_owned);
        // librdkafka metadata requests block the calling thread
        tokio::task::spawn_blocking(move || {
            let metadata = admin
                .inner()
                .fetch_metadata(topic.as_deref(), METADATA_TIMEOUT)
                .map_err(map_kafka_error)?;
            convert_metadata(&metadata, topic.as_deref())
        })
        .await
        .map_err(|e| KafkaMcpError::Tools(ToolsError::internal(format!("metadata task failed: {e}"))))?
    }

    async fn create_topic(&self, request: &NewTopicRequest) -> KafkaMcpResult<()> {
        let mut topic = NewTopic::new(
            request.name.as_str(),
            request.num_partitions,
            TopicReplication::Fixed(request.replication_factor),
        );
        for (key, value) in &request.configs {
            topic = topic.set(key.as_str(), value.as_str());
        }
        let results = self
            .admin
            .create_topics([&topic], &Self::admin_options())
            .await
            .map_err(map_kafka_error)?;
        debug!("Create topics response: {:?}", results);
        map_topic_results(results)
    }

    async fn delete_topic(&self, topic: &str) -> KafkaMcpResult<()> {
        let results = self
            .admin
            .delete_topics(&[topic], &Self::admin_options())
            .await
            .map_err(map_kafka_error)?;
        debug!("Delete topics response: {:?}", results);
        map_topic_results(results)
    }

    fn close(&self) {
        debug!("Kafka admin client released");
    }
}

/// Publish handle over an rdkafka [`FutureProducer`].
pub struct DefaultKafkaProducer {
    producer: FutureProducer,
}

impl DefaultKafkaProducer {
    pub fn new(settings: &ClientSettings) -> KafkaMcpResult<Self> {
        let producer: FutureProducer = client_config(settings)
            .create()
            .map_err(|e| KafkaMcpError::client_creation("producer", e.to_string()))?;
        info!(
            "Created Kafka producer {} for {}",
            settings.client_id(),
            settings.bootstrap_servers()
        );
        Ok(Self { producer })
    }
}

impl MessagePublisher for DefaultKafkaProducer {
    async fn publish(&self, record: &PublishRecord, timeout: Duration) -> KafkaMcpResult<RecordAck> {
        let mut future_record = FutureRecord::<[u8], [u8]>::to(record.topic.as_str()).payload(record.payload.as_slice());
        if let Some(key) = record.key.as_deref() {
            future_record = future_record.key(key);
        }
        match self.producer.send(future_record, Timeout::After(timeout)).await {
            Ok((partition, offset)) => Ok(RecordAck { partition, offset }),
            Err((err, _)) => Err(map_kafka_error(err)),
        }
    }

    fn close(&self) {
        if let Err(e) = self.producer.flush(Timeout::After(PRODUCER_FLUSH_TIMEOUT)) {
            warn!("Failed to flush Kafka producer on close: {}", e);
        }
        debug!("Kafka producer released");
    }
}

/// Creates rdkafka admin clients and producers.
#[derive(Debug, Clone, Copy, Default)]
pub struct KafkaClientFactory;

impl ClientFactory for KafkaClientFactory {
    type Admin = DefaultKafkaAdminExt;
    type Publisher = DefaultKafkaProducer;

    fn create_admin(&self, settings: &ClientSettings) -> KafkaMcpResult<Self::Admin> {
        DefaultKafkaAdminExt::new(settings)
    }

    fn create_publisher(&self, settings: &ClientSettings) -> KafkaMcpResult<Self::Publisher> {
        DefaultKafkaProducer::new(settings)
    }
}
