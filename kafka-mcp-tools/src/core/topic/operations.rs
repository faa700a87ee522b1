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

//! Topic operations - Core business logic
//!
//! This module contains reusable topic management operations that can be
//! used by the cluster manager, the CLI, or any other interface.

use kafka_mcp_error::KafkaMcpResult;
use kafka_mcp_error::ToolsError;

use super::types::NewTopicRequest;
use super::types::TopicDetails;
use super::types::TopicSummary;
use super::types::BROKER_DEFAULT_REPLICATION_FACTOR;
use crate::admin::TopicAdmin;

pub const INVALID_PARTITIONS_MESSAGE: &str = "Number of partitions must be at least 1.";
pub const INVALID_REPLICATION_FACTOR_MESSAGE: &str = "Replication factor must be at least 1 or -1 for default.";

/// Topic operations service
pub struct TopicService;

impl TopicService {
    /// Check partition and replication bounds before contacting the cluster
    ///
    /// `replication_factor` of `-1` asks the broker for its default.
    pub fn validate_new_topic(num_partitions: i32, replication_factor: i32) -> KafkaMcpResult<()> {
        if num_partitions < 1 {
            return Err(ToolsError::validation_failed(INVALID_PARTITIONS_MESSAGE).into());
        }
        if replication_factor < 1 && replication_factor != BROKER_DEFAULT_REPLICATION_FACTOR {
            return Err(ToolsError::validation_failed(INVALID_REPLICATION_FACTOR_MESSAGE).into());
        }
        Ok(())
    }

    /// List every topic in the cluster
    ///
    /// # Returns
    /// Topic summaries sorted by name
    pub async fn list_topics<A: TopicAdmin>(admin: &A) -> KafkaMcpResult<Vec<TopicSummary>> {
        let metadata = admin.describe_topics(None).await?;
        let mut topics: Vec<TopicSummary> = metadata.iter().map(TopicSummary::from).collect();
        topics.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(topics)
    }

    /// Create a topic
    ///
    /// # Returns
    /// The requested descriptor, not re-fetched from the cluster
    pub async fn create_topic<A: TopicAdmin>(admin: &A, request: &NewTopicRequest) -> KafkaMcpResult<TopicSummary> {
        Self::validate_new_topic(request.num_partitions, request.replication_factor)?;
        admin.create_topic(request).await?;
        Ok(TopicSummary {
            name: request.name.clone(),
            partitions: request.num_partitions,
            replication_factor: request.replication_factor,
        })
    }

    /// Request deletion of a topic
    ///
    /// Completes once the cluster accepted the request.
    pub async fn delete_topic<A: TopicAdmin>(admin: &A, topic: &str) -> KafkaMcpResult<()> {
        admin.delete_topic(topic).await
    }

    /// Fetch the per-partition breakdown of one topic
    pub async fn describe_topic<A: TopicAdmin>(admin: &A, topic: &str) -> KafkaMcpResult<TopicDetails> {
        let metadata = admin.describe_topics(Some(topic)).await?;
        metadata
            .iter()
            .find(|candidate| candidate.name.as_str() == topic)
            .map(TopicDetails::from)
            .ok_or_else(|| ToolsError::topic_not_found(topic).into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use kafka_mcp_error::ClusterError;
    use kafka_mcp_error::KafkaMcpError;

    use super::*;
    use crate::core::topic::types::PartitionMetadata;
    use crate::core::topic::types::TopicMetadata;

    #[derive(Default)]
    struct StaticAdmin {
        topics: Vec<TopicMetadata>,
        created: Mutex<Vec<NewTopicRequest>>,
    }

    impl StaticAdmin {
        fn with_topics(names: &[&str]) -> Self {
            Self {
                topics: names
                    .iter()
                    .map(|name| TopicMetadata {
                        name: (*name).into(),
                        partitions: vec![PartitionMetadata {
                            id: 0,
                            leader: 1,
                            replicas: vec![1, 2],
                            isr: vec![1],
                        }],
                    })
                    .collect(),
                ..Default::default()
            }
        }
    }

    impl TopicAdmin for StaticAdmin {
        async fn describe_topics(&self, topic: Option<&str>) -> KafkaMcpResult<Vec<TopicMetadata>> {
            Ok(self
                .topics
                .iter()
                .filter(|metadata| topic.is_none_or(|name| metadata.name.as_str() == name))
                .cloned()
                .collect())
        }

        async fn create_topic(&self, request: &NewTopicRequest) -> KafkaMcpResult<()> {
            if self.topics.iter().any(|metadata| metadata.name == request.name) {
                return Err(ClusterError::topic_already_exists(request.name.as_str()).into());
            }
            self.created.lock().unwrap().push(request.clone());
            Ok(())
        }

        async fn delete_topic(&self, topic: &str) -> KafkaMcpResult<()> {
            if self.topics.iter().any(|metadata| metadata.name.as_str() == topic) {
                Ok(())
            } else {
                Err(ClusterError::unknown_topic(topic).into())
            }
        }

        fn close(&self) {}
    }

    #[test]
    fn test_validate_new_topic() {
        assert!(TopicService::validate_new_topic(1, 1).is_ok());
        assert!(TopicService::validate_new_topic(12, -1).is_ok());

        let err = TopicService::validate_new_topic(0, 1).unwrap_err();
        assert_eq!(err.to_string(), INVALID_PARTITIONS_MESSAGE);

        let err = TopicService::validate_new_topic(3, 0).unwrap_err();
        assert_eq!(err.to_string(), INVALID_REPLICATION_FACTOR_MESSAGE);

        assert!(TopicService::validate_new_topic(3, -2).is_err());
    }

    #[tokio::test]
    async fn test_list_topics_sorted() {
        let admin = StaticAdmin::with_topics(&["b", "a", "c"]);
        let topics = TopicService::list_topics(&admin).await.unwrap();
        let names: Vec<&str> = topics.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(topics[0].partitions, 1);
        assert_eq!(topics[0].replication_factor, 2);
    }

    #[tokio::test]
    async fn test_create_topic_rejects_before_admin_call() {
        let admin = StaticAdmin::default();
        let request = NewTopicRequest::new("orders", 0, 1);
        assert!(TopicService::create_topic(&admin, &request).await.is_err());
        assert!(admin.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_topic_returns_requested_descriptor() {
        let admin = StaticAdmin::default();
        let request = NewTopicRequest::new("orders", 3, -1);
        let summary = TopicService::create_topic(&admin, &request).await.unwrap();
        assert_eq!(summary.name.as_str(), "orders");
        assert_eq!(summary.partitions, 3);
        assert_eq!(summary.replication_factor, -1);
        assert_eq!(admin.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_describe_missing_topic() {
        let admin = StaticAdmin::with_topics(&["orders"]);
        let err = TopicService::describe_topic(&admin, "payments").await.unwrap_err();
        assert!(matches!(err, KafkaMcpError::Tools(ToolsError::TopicNotFound { .. })));
        assert_eq!(err.to_string(), "Topic 'payments' not found");
    }

    #[tokio::test]
    async fn test_describe_topic() {
        let admin = StaticAdmin::with_topics(&["orders", "payments"]);
        let details = TopicService::describe_topic(&admin, "payments").await.unwrap();
        assert_eq!(details.name.as_str(), "payments");
        assert_eq!(details.partition_count, 1);
        assert_eq!(details.partitions[0].isr, vec![1]);
    }
}
