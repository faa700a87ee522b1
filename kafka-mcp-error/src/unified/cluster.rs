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

//! Errors reported by the Kafka cluster
//!
//! These are domain errors returned by a broker in answer to an admin or
//! produce request, as opposed to failures to reach the broker at all.

use thiserror::Error;

/// Broker-reported errors
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Topic already exists
    #[error("Topic '{topic}' already exists")]
    TopicAlreadyExists { topic: String },

    /// Topic or partition unknown to the cluster
    #[error("Topic '{topic}' does not exist")]
    UnknownTopicOrPartition { topic: String },

    /// Partition count rejected by the broker
    #[error("Invalid partitions for topic '{topic}'")]
    InvalidPartitions { topic: String },

    /// Replication factor rejected by the broker
    #[error("Invalid replication factor for topic '{topic}'")]
    InvalidReplicationFactor { topic: String },

    /// Any other broker-reported failure
    #[error("{message}")]
    Broker { code: i32, message: String },
}

impl ClusterError {
    #[inline]
    pub fn topic_already_exists(topic: impl Into<String>) -> Self {
        Self::TopicAlreadyExists { topic: topic.into() }
    }

    #[inline]
    pub fn unknown_topic(topic: impl Into<String>) -> Self {
        Self::UnknownTopicOrPartition { topic: topic.into() }
    }

    #[inline]
    pub fn invalid_partitions(topic: impl Into<String>) -> Self {
        Self::InvalidPartitions { topic: topic.into() }
    }

    #[inline]
    pub fn invalid_replication_factor(topic: impl Into<String>) -> Self {
        Self::InvalidReplicationFactor { topic: topic.into() }
    }

    #[inline]
    pub fn broker(code: i32, message: impl Into<String>) -> Self {
        Self::Broker {
            code,
            message: message.into(),
        }
    }

    /// The topic the error refers to, if any
    pub fn topic(&self) -> Option<&str> {
        match self {
            Self::TopicAlreadyExists { topic }
            | Self::UnknownTopicOrPartition { topic }
            | Self::InvalidPartitions { topic }
            | Self::InvalidReplicationFactor { topic } => Some(topic),
            Self::Broker { .. } => None,
        }
    }
}
