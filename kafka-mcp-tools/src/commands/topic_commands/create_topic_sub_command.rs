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

use std::collections::BTreeMap;

use clap::Parser;

use crate::cli::validators;
use crate::commands::into_outcome;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::topic::types::DEFAULT_PARTITIONS;
use crate::core::topic::types::DEFAULT_REPLICATION_FACTOR;
use crate::core::KafkaMcpResult;
use crate::ui::output;

#[derive(Debug, Clone, Parser)]
pub struct CreateTopicSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(short = 't', long = "topic", required = true, help = "Topic name")]
    topic: String,

    #[arg(
        short = 'p',
        long = "partitions",
        default_value_t = DEFAULT_PARTITIONS,
        help = "Number of partitions"
    )]
    partitions: i32,

    #[arg(
        short = 'r',
        long = "replication-factor",
        default_value_t = DEFAULT_REPLICATION_FACTOR,
        allow_negative_numbers = true,
        help = "Replication factor, -1 for the broker default"
    )]
    replication_factor: i32,

    #[arg(
        long = "config-entry",
        value_name = "KEY=VALUE",
        value_parser = validators::parse_key_value,
        help = "Topic config entry, repeatable, eg: 'retention.ms=86400000'"
    )]
    config_entries: Vec<(String, String)>,
}

impl CreateTopicSubCommand {
    fn topic_configs(&self) -> Option<BTreeMap<String, String>> {
        if self.config_entries.is_empty() {
            None
        } else {
            Some(self.config_entries.iter().cloned().collect())
        }
    }
}

impl CommandExecute for CreateTopicSubCommand {
    async fn execute(&self) -> KafkaMcpResult<()> {
        validators::validate_topic_name(&self.topic)?;

        let manager = self.common_args.open()?;
        let result = manager
            .create_topic(
                &self.topic,
                self.partitions,
                self.replication_factor,
                self.topic_configs(),
            )
            .await;
        manager.close();

        let (message, topic) = into_outcome("create_topic", result)?;
        output::print_success(&message);
        output::print_key_value("Partitions", &topic.partitions.to_string());
        output::print_key_value("Replication factor", &topic.replication_factor.to_string());
        Ok(())
    }
}
