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

mod message_commands;
mod topic_commands;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use crate::core::cluster::ClusterManager;
use crate::core::result::OperationResult;
use crate::core::KafkaMcpError;
use crate::core::KafkaMcpResult;

/// A trait that defines the execution behavior for commands.
///
/// Each command opens one session, runs one operation, prints the outcome
/// and closes the session again.
#[allow(async_fn_in_trait)]
pub trait CommandExecute {
    async fn execute(&self) -> KafkaMcpResult<()>;
}

#[derive(Debug, Parser, Clone)]
pub struct CommonArgs {
    /// Connection properties file
    #[arg(
        short = 'c',
        long = "config",
        required = true,
        help = "Kafka client properties file, eg: 'client.properties'"
    )]
    pub config: PathBuf,
}

impl CommonArgs {
    /// Open a session on the configured cluster
    pub fn open(&self) -> KafkaMcpResult<ClusterManager> {
        Ok(ClusterManager::new(&self.config)?)
    }
}

/// Turn an error result into a command failure
pub(crate) fn into_outcome<T>(operation: &'static str, result: OperationResult<T>) -> KafkaMcpResult<(String, T)> {
    match result {
        OperationResult::Success { message, payload } => Ok((message, payload)),
        OperationResult::Error { message } => Err(KafkaMcpError::operation_failed(operation, message)),
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    #[command(about = "Topic commands")]
    Topic(topic_commands::TopicCommands),

    #[command(subcommand)]
    #[command(about = "Message commands")]
    Message(message_commands::MessageCommands),
}

impl CommandExecute for Commands {
    async fn execute(&self) -> KafkaMcpResult<()> {
        match self {
            Commands::Topic(value) => value.execute().await,
            Commands::Message(value) => value.execute().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_outcome() {
        let (message, ()) = into_outcome("delete_topic", OperationResult::success("done", ())).unwrap();
        assert_eq!(message, "done");

        let err = into_outcome::<()>("delete_topic", OperationResult::error("Topic 'x' does not exist")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Operation 'delete_topic' failed: Topic 'x' does not exist"
        );
    }

    #[test]
    fn test_open_missing_config() {
        let args = CommonArgs {
            config: PathBuf::from("/definitely/not/here/client.properties"),
        };
        let err = args.open().err().expect("missing file must fail");
        assert!(matches!(err, KafkaMcpError::Config(_)));
    }
}
