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

//! Topic-related types and data structures

use std::collections::BTreeMap;

use cheetah_string::CheetahString;
use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_PARTITIONS: i32 = 1;
pub const DEFAULT_REPLICATION_FACTOR: i32 = 1;

/// Replication factor placeholder that lets the broker pick its default
pub const BROKER_DEFAULT_REPLICATION_FACTOR: i32 = -1;

/// Topic metadata as reported by the cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicMetadata {
    pub name: CheetahString,
    pub partitions: Vec<PartitionMetadata>,
}

impl TopicMetadata {
    /// Replica count of the first partition, or 0 without partitions
    pub fn replication_factor(&self) -> i32 {
        self.partitions
            .first()
            .map(|partition| partition.replicas.len() as i32)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionMetadata {
    pub id: i32,
    pub leader: i32,
    pub replicas: Vec<i32>,
    pub isr: Vec<i32>,
}

/// Topic creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTopicRequest {
    pub name: CheetahString,
    pub num_partitions: i32,
    pub replication_factor: i32,
    pub configs: BTreeMap<String, String>,
}

impl NewTopicRequest {
    pub fn new(name: impl Into<CheetahString>, num_partitions: i32, replication_factor: i32) -> Self {
        Self {
            name: name.into(),
            num_partitions,
            replication_factor,
            configs: BTreeMap::new(),
        }
    }

    pub fn with_configs(mut self, configs: BTreeMap<String, String>) -> Self {
        self.configs = configs;
        self
    }
}

/// One entry of a topic listing, also used as the created-topic descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub name: CheetahString,
    pub partitions: i32,
    pub replication_factor: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionDetail {
    pub partition_id: i32,
    pub leader: i32,
    pub replicas: Vec<i32>,
    pub isr: Vec<i32>,
}

/// Per-partition breakdown of a single topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDetails {
    pub name: CheetahString,
    pub partitions: Vec<PartitionDetail>,
    pub partition_count: i32,
    pub replication_factor: i32,
}

impl From<&TopicMetadata> for TopicSummary {
    fn from(metadata: &TopicMetadata) -> Self {
        Self {
            name: metadata.name.clone(),
            partitions: metadata.partitions.len() as i32,
            replication_factor: metadata.replication_factor(),
        }
    }
}

impl From<&PartitionMetadata> for PartitionDetail {
    fn from(partition: &PartitionMetadata) -> Self {
        Self {
            partition_id: partition.id,
            leader: partition.leader,
            replicas: partition.replicas.clone(),
            isr: partition.isr.clone(),
        }
    }
}

impl From<&TopicMetadata> for TopicDetails {
    fn from(metadata: &TopicMetadata) -> Self {
        let partitions: Vec<PartitionDetail> = metadata.partitions.iter().map(PartitionDetail::from).collect();
        Self {
            name: metadata.name.clone(),
            partition_count: partitions.len() as i32,
            replication_factor: metadata.replication_factor(),
            partitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition(id: i32, replicas: &[i32]) -> PartitionMetadata {
        PartitionMetadata {
            id,
            leader: replicas.first().copied().unwrap_or(-1),
            replicas: replicas.to_vec(),
            isr: replicas.to_vec(),
        }
    }

    #[test]
    fn test_replication_factor_uses_first_partition() {
        let metadata = TopicMetadata {
            name: "orders".into(),
            partitions: vec![partition(0, &[1, 2, 3]), partition(1, &[1])],
        };
        assert_eq!(metadata.replication_factor(), 3);
    }

    #[test]
    fn test_summary_without_partitions() {
        let metadata = TopicMetadata {
            name: "empty".into(),
            partitions: vec![],
        };
        let summary = TopicSummary::from(&metadata);
        assert_eq!(summary.partitions, 0);
        assert_eq!(summary.replication_factor, 0);
    }

    #[test]
    fn test_details_keep_broker_order() {
        let metadata = TopicMetadata {
            name: "orders".into(),
            partitions: vec![partition(2, &[3, 1]), partition(0, &[1, 2]), partition(1, &[2, 3])],
        };
        let details = TopicDetails::from(&metadata);
        let ids: Vec<i32> = details.partitions.iter().map(|p| p.partition_id).collect();
        assert_eq!(ids, vec![2, 0, 1]);
        assert_eq!(details.partition_count, 3);
        assert_eq!(details.replication_factor, 2);
    }

    #[test]
    fn test_details_serialization() {
        let metadata = TopicMetadata {
            name: "orders".into(),
            partitions: vec![partition(0, &[1])],
        };
        let json = serde_json::to_value(TopicDetails::from(&metadata)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "orders",
                "partitions": [{"partition_id": 0, "leader": 1, "replicas": [1], "isr": [1]}],
                "partition_count": 1,
                "replication_factor": 1
            })
        );
    }
}
