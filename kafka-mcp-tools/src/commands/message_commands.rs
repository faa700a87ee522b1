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

mod send_message_sub_command;

use clap::Subcommand;

use crate::commands::CommandExecute;
use crate::core::KafkaMcpResult;

#[derive(Subcommand)]
pub enum MessageCommands {
    #[command(
        name = "send",
        about = "Send message",
        long_about = r#"Send one JSON message to a topic and wait for the broker acknowledgment.
Input that is not valid JSON is sent as a JSON string."#
    )]
    Send(send_message_sub_command::SendMessageSubCommand),
}

impl CommandExecute for MessageCommands {
    async fn execute(&self) -> KafkaMcpResult<()> {
        match self {
            MessageCommands::Send(cmd) => cmd.execute().await,
        }
    }
}
