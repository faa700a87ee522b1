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

use clap::Parser;
use kafka_mcp_common::log::init_logger;
use kafka_mcp_tools::kafka_cli::KafkaMcpCli;

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();
    let cli = KafkaMcpCli::parse();
    cli.handle().await
}
