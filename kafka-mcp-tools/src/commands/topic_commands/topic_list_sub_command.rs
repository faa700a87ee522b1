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
use crate::cli::formatters::TableFormatter;
use crate::cli::formatters::TopicRow;
use crate::commands::into_outcome;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::KafkaMcpResult;
use crate::ui::output;

#[derive(Debug, Clone, Parser)]
pub struct TopicListSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(
        short = 'f',
        long = "format",
        default_value = "text",
        help = "Output format: text, json, table"
    )]
    format: String,
}

impl CommandExecute for TopicListSubCommand {
    async fn execute(&self) -> KafkaMcpResult<()> {
        let manager = self.common_args.open()?;
        let result = manager.list_topics().await;
        manager.close();

        let format = OutputFormat::from(self.format.as_str());
        if format == OutputFormat::Json {
            println!("{}", JsonFormatter.format(&result));
        }
        let (message, topics) = into_outcome("list_topics", result)?;

        match format {
            OutputFormat::Json => {}
            OutputFormat::Table => {
                if topics.is_empty() {
                    output::print_info(&message);
                } else {
                    println!("{}", TableFormatter.format_rows(topics.iter().map(TopicRow::from)));
                }
            }
            OutputFormat::Text => {
                output::print_success(&message);
                for topic in &topics {
                    println!(
                        "  • {} (partitions: {}, replication: {})",
                        topic.name, topic.partitions, topic.replication_factor
                    );
                }
            }
        }
        Ok(())
    }
}
