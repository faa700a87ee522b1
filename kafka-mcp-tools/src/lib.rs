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

//! Kafka MCP Tools - cluster management gateway
//!
//! This crate provides:
//! - **Core**: the [`ClusterManager`](core::cluster::ClusterManager) session with
//!   lazily created admin/publish handles and normalized operation results
//! - **Session**: the tool-style dispatch surface that renders results as text
//! - **CLI**: Command-line interface with formatting and validation
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     CLI Layer (bin/) / ToolSession      │
//! │  - Command parsing (clap)               │
//! │  - Output rendering (formatters/)       │
//! │  - Input validation (validators/)       │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │         Core Logic (core/)              │
//! │  - ClusterManager + OperationResult     │
//! │  - Topic operations                     │
//! │  - Message operations                   │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │        Admin API (admin/)               │
//! │  - TopicAdmin / MessagePublisher traits │
//! │  - rdkafka implementations              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust,ignore
//! use kafka_mcp_tools::core::cluster::ClusterManager;
//!
//! let manager = ClusterManager::new("client.properties")?;
//! let result = manager.create_topic("orders", 3, 1, None).await;
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! manager.close();
//! ```
//!
//! ```bash
//! kafka-mcp-cli topic create -c client.properties -t orders -p 3
//! ```

// Core business logic - reusable across different interfaces
pub mod core {
    //! Core business logic module
    //!
    //! Independent of any presentation layer (CLI, tool session, ...).
    //!
    //! - [`admin`] - Client settings resolved from connection options
    //! - [`cluster`] - Session-scoped cluster manager
    //! - [`result`] - Normalized operation results
    //! - [`topic`] - Topic management operations
    //! - [`message`] - Message publishing operations

    pub mod admin;
    pub mod cluster;
    pub mod message;
    pub mod result;
    pub mod topic;

    pub use kafka_mcp_error::ClusterError;
    pub use kafka_mcp_error::KafkaMcpError;
    pub use kafka_mcp_error::KafkaMcpResult;
    pub use kafka_mcp_error::ToolsError;
    pub use kafka_mcp_error::TransportError;
}

// CLI presentation layer
pub mod cli {
    //! CLI presentation layer
    //!
    //! - [`formatters`] - Output formats (text, JSON, table)
    //! - [`validators`] - Input validators
    //!
    //! The CLI layer is a thin wrapper around the core business logic.

    pub mod formatters;
    pub mod validators;
}

// UI utilities for enhanced CLI experience
pub mod ui;

// Admin API layer
pub mod admin;

// Tool-style dispatch session
pub mod session;

// CLI commands and entry point
pub mod commands;
pub mod kafka_cli;
