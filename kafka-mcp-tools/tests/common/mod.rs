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

//! In-memory cluster double shared by the integration tests

#![allow(dead_code)]

use std::future;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use kafka_mcp_common::ConnectionOptions;
use kafka_mcp_error::ClusterError;
use kafka_mcp_error::KafkaMcpResult;
use kafka_mcp_error::TransportError;
use kafka_mcp_tools::admin::default_kafka_admin_ext::map_kafka_error;
use kafka_mcp_tools::admin::ClientFactory;
use kafka_mcp_tools::admin::MessagePublisher;
use kafka_mcp_tools::admin::TopicAdmin;
use kafka_mcp_tools::core::admin::ClientSettings;
use kafka_mcp_tools::core::cluster::ClusterManager;
use kafka_mcp_tools::core::message::types::PublishRecord;
use kafka_mcp_tools::core::message::types::RecordAck;
use kafka_mcp_tools::core::topic::types::NewTopicRequest;
use kafka_mcp_tools::core::topic::types::PartitionMetadata;
use kafka_mcp_tools::core::topic::types::TopicMetadata;
use parking_lot::Mutex;
use rdkafka::error::KafkaError;

pub const BROKER_COUNT: i32 = 3;

#[derive(Default)]
pub struct ClusterState {
    topics: Mutex<Vec<TopicMetadata>>,
    records: Mutex<Vec<PublishRecord>>,
    pub admin_created: AtomicUsize,
    pub publisher_created: AtomicUsize,
    pub admin_closed: AtomicUsize,
    pub publisher_closed: AtomicUsize,
    pub admin_calls: AtomicUsize,
    pub fail_admin_creation: AtomicBool,
    pub stall_publish: AtomicBool,
    request_failure: Mutex<Option<KafkaError>>,
}

/// Cluster double acting as its own client factory; clones share state
#[derive(Clone, Default)]
pub struct FakeCluster {
    pub state: Arc<ClusterState>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manager(&self) -> ClusterManager<FakeCluster> {
        ClusterManager::with_factory(ConnectionOptions::parse("bootstrap.servers=fake:9092"), self.clone())
    }

    /// Seed a topic directly, bypassing the admin handle
    pub fn seed_topic(&self, name: &str, partitions: i32, replicas: i32) {
        self.state.topics.lock().push(topic_metadata(name, partitions, replicas));
    }

    pub fn topic_names(&self) -> Vec<String> {
        self.state.topics.lock().iter().map(|t| t.name.to_string()).collect()
    }

    pub fn records(&self) -> Vec<PublishRecord> {
        self.state.records.lock().clone()
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    /// Fail every admin and publish request the way the rdkafka client would
    pub fn fail_requests_with(&self, err: KafkaError) {
        *self.state.request_failure.lock() = Some(err);
    }

    fn request_failure(&self) -> KafkaMcpResult<()> {
        match self.state.request_failure.lock().clone() {
            Some(err) => Err(map_kafka_error(err)),
            None => Ok(()),
        }
    }
}

fn topic_metadata(name: &str, partitions: i32, replicas: i32) -> TopicMetadata {
    let replica_ids: Vec<i32> = (1..=replicas.max(0)).collect();
    TopicMetadata {
        name: name.into(),
        partitions: (0..partitions)
            .map(|id| PartitionMetadata {
                id,
                leader: replica_ids.first().copied().unwrap_or(-1),
                replicas: replica_ids.clone(),
                isr: replica_ids.clone(),
            })
            .collect(),
    }
}

pub struct FakeAdmin {
    cluster: FakeCluster,
}

impl TopicAdmin for FakeAdmin {
    async fn describe_topics(&self, topic: Option<&str>) -> KafkaMcpResult<Vec<TopicMetadata>> {
        self.cluster.state.admin_calls.fetch_add(1, Ordering::SeqCst);
        self.cluster.request_failure()?;
        Ok(self
            .cluster
            .state
            .topics
            .lock()
            .iter()
            .filter(|metadata| topic.is_none_or(|name| metadata.name.as_str() == name))
            .cloned()
            .collect())
    }

    async fn create_topic(&self, request: &NewTopicRequest) -> KafkaMcpResult<()> {
        self.cluster.state.admin_calls.fetch_add(1, Ordering::SeqCst);
        self.cluster.request_failure()?;
        let mut topics = self.cluster.state.topics.lock();
        if topics.iter().any(|metadata| metadata.name == request.name) {
            return Err(ClusterError::topic_already_exists(request.name.as_str()).into());
        }
        if request.replication_factor > BROKER_COUNT {
            return Err(ClusterError::invalid_replication_factor(request.name.as_str()).into());
        }
        let replicas = if request.replication_factor == -1 {
            1
        } else {
            request.replication_factor
        };
        topics.push(topic_metadata(request.name.as_str(), request.num_partitions, replicas));
        Ok(())
    }

    async fn delete_topic(&self, topic: &str) -> KafkaMcpResult<()> {
        self.cluster.state.admin_calls.fetch_add(1, Ordering::SeqCst);
        self.cluster.request_failure()?;
        let mut topics = self.cluster.state.topics.lock();
        match topics.iter().position(|metadata| metadata.name.as_str() == topic) {
            Some(index) => {
                topics.remove(index);
                Ok(())
            }
            None => Err(ClusterError::unknown_topic(topic).into()),
        }
    }

    fn close(&self) {
        self.cluster.state.admin_closed.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct FakePublisher {
    cluster: FakeCluster,
}

impl MessagePublisher for FakePublisher {
    async fn publish(&self, record: &PublishRecord, _timeout: Duration) -> KafkaMcpResult<RecordAck> {
        if self.cluster.state.stall_publish.load(Ordering::SeqCst) {
            return future::pending().await;
        }
        self.cluster.request_failure()?;
        let mut records = self.cluster.state.records.lock();
        records.push(record.clone());
        Ok(RecordAck {
            partition: 0,
            offset: records.len() as i64 - 1,
        })
    }

    fn close(&self) {
        self.cluster.state.publisher_closed.fetch_add(1, Ordering::SeqCst);
    }
}

impl ClientFactory for FakeCluster {
    type Admin = FakeAdmin;
    type Publisher = FakePublisher;

    fn create_admin(&self, _settings: &ClientSettings) -> KafkaMcpResult<Self::Admin> {
        if self.state.fail_admin_creation.load(Ordering::SeqCst) {
            return Err(TransportError::client_creation("admin", "No such configuration property: \"bogus\"").into());
        }
        self.state.admin_created.fetch_add(1, Ordering::SeqCst);
        Ok(FakeAdmin { cluster: self.clone() })
    }

    fn create_publisher(&self, _settings: &ClientSettings) -> KafkaMcpResult<Self::Publisher> {
        self.state.publisher_created.fetch_add(1, Ordering::SeqCst);
        Ok(FakePublisher { cluster: self.clone() })
    }
}
