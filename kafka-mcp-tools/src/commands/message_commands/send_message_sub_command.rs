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

#[derive(Debug, Clone, Parser)]
pub struct SendMessageSubCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(short = 't', long = "topic", required = true, help = "Topic name")]
    topic: String,

    #[arg(short = 'm', long = "message", required = true, help = "Message body, JSON or plain text")]
    message: String,

    #[arg(short = 'k', long = "key", help = "Record key")]
    key: Option<String>,
}

impl CommandExecute for SendMessageSubCommand {
    async fn execute(&self) -> KafkaMcpResult<()> {
        validators::validate_topic_name(&self.topic)?;
        let value = validators::parse_message_value(&self.message);

        let manager = self.common_args.open()?;
        let result = manager.send_message(&self.topic, &value, self.key.as_deref()).await;
        manager.close();

        let (message, metadata) = into_outcome("send_message", result)?;
        output::print_success(&message);
        output::print_key_value("Partition", &metadata.partition.to_string());
        output::print_key_value("Offset", &metadata.offset.to_string());
        Ok(())
    }
}
