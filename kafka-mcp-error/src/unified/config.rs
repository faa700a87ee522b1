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

//! Configuration source errors

use std::io;

use thiserror::Error;

/// The connection properties source could not be read
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Source does not exist
    #[error("Config file '{path}' not found")]
    NotFound { path: String },

    /// Source exists but may not be read
    #[error("Permission denied reading config file '{path}'")]
    PermissionDenied { path: String },

    /// Any other I/O failure while reading
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Classify an I/O error raised while reading `path`
    pub fn from_io(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Path of the offending source
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } | Self::PermissionDenied { path } | Self::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_kind() {
        let err = ConfigError::from_io("a.properties", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert_eq!(err.to_string(), "Config file 'a.properties' not found");

        let err = ConfigError::from_io("b.properties", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, ConfigError::PermissionDenied { .. }));

        let err = ConfigError::from_io("c.properties", io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"));
        assert!(matches!(err, ConfigError::Io { .. }));
        assert_eq!(err.to_string(), "Failed to read config file 'c.properties': bad utf-8");
        assert_eq!(err.path(), "c.properties");
    }
}
