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

use clap::Parser;

use crate::cli::formatters::Formatter;
use crate::cli::formatters::JsonFormatter;
use crate::cli::formatters::OutputFormat;
use crate::cli::formatters::PartitionRow;
use crate::cli::formatters::TableFormatter;
use crate::cli::validators;
use crate::commands::into_outcome;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::KafkaMcpResult;
use crate::ui::output;

#[derive(Debug, Clone, Parser)]
pub struct TopicInfoSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(short = 't', long = "topic", required = true, help = "Topic name")]
    topic: String,

    #[arg(
        short = 'f',
        long = "format",
        default_value = "table",
        help = "Output format: text, json, table"
    )]
    format: String,
}

impl CommandExecute for TopicInfoSubCommand {
    async fn execute(&self) -> KafkaMcpResult<()> {
        validators::validate_topic_name(&self.topic)?;

        let manager = self.common_args.open()?;
        let result = manager.get_topic_info(&self.topic).await;
        manager.close();

        let format = OutputFormat::from(self.format.as_str());
        if format == OutputFormat::Json {
            println!("{}", JsonFormatter.format(&result));
        }
        let (_, details) = into_outcome("get_topic_info", result)?;

        match format {
            OutputFormat::Json => {}
            OutputFormat::Table => {
                output::print_header(&format!("Topic {}", details.name));
                output::print_key_value("Partitions", &details.partition_count.to_string());
                output::print_key_value("Replication factor", &details.replication_factor.to_string());
                if !details.partitions.is_empty() {
                    println!(
                        "{}",
                        TableFormatter.format_rows(details.partitions.iter().map(PartitionRow::from))
                    );
                }
            }
            OutputFormat::Text => {
                println!(
                    "{} ({}, replication: {})",
                    details.name,
                    output::format_count(details.partitions.len(), "partition", "partitions"),
                    details.replication_factor
                );
                for partition in &details.partitions {
                    println!(
                        "  partition {}: leader {}, replicas {:?}, isr {:?}",
                        partition.partition_id, partition.leader, partition.replicas, partition.isr
                    );
                }
            }
        }
        Ok(())
    }
}
