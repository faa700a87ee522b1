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

//! # Kafka MCP Error Handling System
//!
//! Unified error types shared by the Kafka MCP crates.
//!
//! Errors are grouped by where they originate:
//! - [`ConfigError`]: the connection properties file could not be read
//! - [`ToolsError`]: locally detected invalid arguments and session misuse
//! - [`ClusterError`]: errors reported by the Kafka cluster itself
//! - [`TransportError`]: client construction, network and timeout failures
//!
//! ### Usage
//!
//! ```rust
//! use kafka_mcp_error::KafkaMcpError;
//! use kafka_mcp_error::KafkaMcpResult;
//!
//! fn check_partitions(partitions: i32) -> KafkaMcpResult<()> {
//!     if partitions < 1 {
//!         return Err(KafkaMcpError::validation_error(
//!             "partitions",
//!             "must be at least 1",
//!         ));
//!     }
//!     Ok(())
//! }
//! # check_partitions(3).unwrap();
//! ```

pub mod unified;

pub use unified::ClusterError;
pub use unified::ConfigError;
pub use unified::KafkaMcpError;
pub use unified::KafkaMcpResult;
pub use unified::ToolsError;
pub use unified::TransportError;
