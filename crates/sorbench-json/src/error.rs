// Dweve SORBench - SOR benchmark result aggregation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for JSON export and reload.

use thiserror::Error;

/// JSON conversion error types.
#[derive(Debug, Error)]
pub enum JsonError {
    /// Serialization or deserialization failed.
    ///
    /// Malformed snapshots surface here with serde_json's line and column.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading or writing a snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized output was not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Where the invalid bytes came from.
        context: String,
    },
}

/// Result type for JSON operations.
pub type Result<T> = std::result::Result<T, JsonError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_from_io_error() {
        let err = JsonError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(matches!(err, JsonError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = JsonError::from(serde_err);
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
