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

//! Table formatter

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use crate::core::topic::types::PartitionDetail;
use crate::core::topic::types::TopicSummary;

#[derive(Tabled, Clone)]
pub struct TopicRow {
    #[tabled(rename = "Topic")]
    name: String,

    #[tabled(rename = "Partitions")]
    partitions: i32,

    #[tabled(rename = "Replication")]
    replication_factor: i32,
}

impl From<&TopicSummary> for TopicRow {
    fn from(topic: &TopicSummary) -> Self {
        Self {
            name: topic.name.to_string(),
            partitions: topic.partitions,
            replication_factor: topic.replication_factor,
        }
    }
}

#[derive(Tabled, Clone)]
pub struct PartitionRow {
    #[tabled(rename = "Partition")]
    partition_id: i32,

    #[tabled(rename = "Leader")]
    leader: i32,

    #[tabled(rename = "Replicas")]
    replicas: String,

    #[tabled(rename = "ISR")]
    isr: String,
}

impl From<&PartitionDetail> for PartitionRow {
    fn from(partition: &PartitionDetail) -> Self {
        Self {
            partition_id: partition.partition_id,
            leader: partition.leader,
            replicas: join_ids(&partition.replicas),
            isr: join_ids(&partition.isr),
        }
    }
}

fn join_ids(ids: &[i32]) -> String {
    ids.iter().map(i32::to_string).collect::<Vec<_>>().join(",")
}

pub struct TableFormatter;

impl TableFormatter {
    pub fn format_rows<R: Tabled>(&self, rows: impl IntoIterator<Item = R>) -> String {
        let mut table = Table::new(rows);
        table.with(Style::modern());
        table.to_string()
    }
}
