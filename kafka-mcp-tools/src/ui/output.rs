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

//! Enhanced output formatting with colors and styles

use colored::Colorize;

/// Print success message with green marker
pub fn print_success(message: &str) {
    println!("{} {}", "[OK]".green().bold(), message);
}

/// Print error message with red marker
pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}

/// Print warning message with yellow marker
pub fn print_warning(message: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), message);
}

/// Print info message with blue marker
pub fn print_info(message: &str) {
    println!("{} {}", "[INFO]".blue().bold(), message);
}

/// Print section header
pub fn print_header(title: &str) {
    println!("\n{}", title.cyan().bold().underline());
}

/// Print key-value pair
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", key.bright_white().bold(), value.bright_white());
}

/// Format count with proper pluralization
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
