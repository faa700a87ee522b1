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

mod create_topic_sub_command;
mod delete_topic_sub_command;
mod topic_info_sub_command;
mod topic_list_sub_command;

use clap::Subcommand;

use crate::commands::CommandExecute;
use crate::core::KafkaMcpResult;

#[derive(Subcommand)]
pub enum TopicCommands {
    #[command(
        name = "list",
        about = "List topics",
        long_about = r#"List every topic in the cluster with its partition count and replication factor."#
    )]
    List(topic_list_sub_command::TopicListSubCommand),

    #[command(
        name = "create",
        about = "Create topic",
        long_about = r#"Create a topic with the given partition count, replication factor and topic configs.
Use a replication factor of -1 to let the broker apply its default."#
    )]
    Create(create_topic_sub_command::CreateTopicSubCommand),

    #[command(
        name = "delete",
        about = "Delete topic",
        long_about = r#"Request deletion of a topic. The broker removes the topic asynchronously."#
    )]
    Delete(delete_topic_sub_command::DeleteTopicSubCommand),

    #[command(
        name = "info",
        about = "Examine topic info",
        long_about = r#"Show leader, replicas and in-sync replicas of every partition of a topic."#
    )]
    Info(topic_info_sub_command::TopicInfoSubCommand),
}

impl CommandExecute for TopicCommands {
    async fn execute(&self) -> KafkaMcpResult<()> {
        match self {
            TopicCommands::List(cmd) => cmd.execute().await,
            TopicCommands::Create(cmd) => cmd.execute().await,
            TopicCommands::Delete(cmd) => cmd.execute().await,
            TopicCommands::Info(cmd) => cmd.execute().await,
        }
    }
}
