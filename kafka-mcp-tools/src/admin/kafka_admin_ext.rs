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

//! Client handle abstractions
//!
//! [`ClusterManager`](crate::core::cluster::ClusterManager) talks to the cluster
//! only through these traits. The rdkafka implementations live in
//! [`default_kafka_admin_ext`](super::default_kafka_admin_ext).

use std::time::Duration;

use kafka_mcp_error::KafkaMcpResult;

use crate::core::admin::ClientSettings;
use crate::core::message::types::PublishRecord;
use crate::core::message::types::RecordAck;
use crate::core::topic::types::NewTopicRequest;
use crate::core::topic::types::TopicMetadata;

/// Topic administration handle.
#[allow(dead_code)]
#[trait_variant::make(TopicAdmin: Send)]
pub trait TopicAdminLocal: Send + Sync {
    /// Fetch metadata for one topic, or for every topic when `topic` is `None`.
    ///
    /// A requested topic unknown to the cluster is simply absent from the
    /// returned list.
    async fn describe_topics(&self, topic: Option<&str>) -> KafkaMcpResult<Vec<TopicMetadata>>;

    async fn create_topic(&self, request: &NewTopicRequest) -> KafkaMcpResult<()>;

    /// Returns once the cluster accepted the request; removal itself is asynchronous.
    async fn delete_topic(&self, topic: &str) -> KafkaMcpResult<()>;

    /// Release the underlying connection.
    fn close(&self);
}

/// Record publishing handle.
#[allow(dead_code)]
#[trait_variant::make(MessagePublisher: Send)]
pub trait MessagePublisherLocal: Send + Sync {
    /// Hand one record to the cluster and wait for its acknowledgment.
    ///
    /// `timeout` bounds how long the record may wait in the local queue.
    async fn publish(&self, record: &PublishRecord, timeout: Duration) -> KafkaMcpResult<RecordAck>;

    /// Flush pending records and release the underlying connection.
    fn close(&self);
}

/// Creates the admin and publish handles of a session.
pub trait ClientFactory: Send + Sync {
    type Admin: TopicAdmin + 'static;
    type Publisher: MessagePublisher + 'static;

    fn create_admin(&self, settings: &ClientSettings) -> KafkaMcpResult<Self::Admin>;

    fn create_publisher(&self, settings: &ClientSettings) -> KafkaMcpResult<Self::Publisher>;
}
