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

use crate::cli::validators;
use crate::commands::into_outcome;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::core::KafkaMcpResult;
use crate::ui::output;
use crate::ui::prompt;

#[derive(Debug, Clone, Parser)]
pub struct DeleteTopicSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(short = 't', long = "topic", required = true, help = "Topic name")]
    topic: String,

    /// Skip confirmation prompts (automatically answer 'yes')
    #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    skip_confirm: bool,
}

impl CommandExecute for DeleteTopicSubCommand {
    async fn execute(&self) -> KafkaMcpResult<()> {
        validators::validate_topic_name(&self.topic)?;

        if !self.skip_confirm && !prompt::confirm_dangerous_operation("delete", &format!("topic '{}'", self.topic)) {
            output::print_info("Deletion cancelled");
            return Ok(());
        }

        let manager = self.common_args.open()?;
        let result = manager.delete_topic(&self.topic).await;
        manager.close();

        let (message, ()) = into_outcome("delete_topic", result)?;
        output::print_success(&message);
        output::print_warning("Removal completes asynchronously on the brokers");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        let cmd =
            DeleteTopicSubCommand::try_parse_from(["delete", "-c", "client.properties", "-t", "orders", "-y"]).unwrap();
        assert_eq!(cmd.topic, "orders");
        assert!(cmd.skip_confirm);
    }

    #[test]
    fn test_topic_is_required() {
        assert!(DeleteTopicSubCommand::try_parse_from(["delete", "-c", "client.properties"]).is_err());
    }
}
