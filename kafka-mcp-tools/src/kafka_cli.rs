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

use std::process::ExitCode;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use clap_complete::shells::Bash;
use clap_complete::shells::Fish;
use clap_complete::shells::Zsh;

use crate::commands::CommandExecute;
use crate::commands::Commands;
use crate::ui::output;

const BIN_NAME: &str = "kafka-mcp-cli";

#[derive(Parser)]
#[command(name = "kafka-mcp-cli")]
#[command(about = "Kafka topic and message management commands", long_about = None)]
pub struct KafkaMcpCli {
    /// Generate shell completion script
    #[arg(
        long = "generate-completion",
        value_name = "SHELL",
        help = "Generate shell completion script (bash, zsh, fish)"
    )]
    completion: Option<String>,

    #[command(subcommand)]
    commands: Option<Commands>,
}

impl KafkaMcpCli {
    pub async fn handle(&self) -> ExitCode {
        if let Some(shell) = &self.completion {
            let mut cmd = KafkaMcpCli::command();
            match shell.to_lowercase().as_str() {
                "bash" => generate(Bash, &mut cmd, BIN_NAME, &mut std::io::stdout()),
                "zsh" => generate(Zsh, &mut cmd, BIN_NAME, &mut std::io::stdout()),
                "fish" => generate(Fish, &mut cmd, BIN_NAME, &mut std::io::stdout()),
                _ => {
                    output::print_error(&format!("Unsupported shell: {shell}"));
                    eprintln!("Supported shells: bash, zsh, fish");
                    return ExitCode::FAILURE;
                }
            }
            return ExitCode::SUCCESS;
        }

        match &self.commands {
            Some(commands) => match commands.execute().await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    output::print_error(&e.to_string());
                    ExitCode::FAILURE
                }
            },
            None => {
                eprintln!("No command specified. Use --help for usage information.");
                ExitCode::FAILURE
            }
        }
    }
}
