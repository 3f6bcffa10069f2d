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

//! Error types for log collection.
//!
//! Only configuration and discovery failures are errors. Problems with a
//! single log file are logged and that file is skipped.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal collection errors.
#[derive(Debug, Error)]
pub enum CollectError {
    /// A filename pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern source.
        pattern: String,
        /// The regex compile error.
        #[source]
        source: regex::Error,
    },

    /// A results root or size directory could not be listed.
    #[error("Failed to read directory '{}': {}", .path.display(), .source)]
    ReadDir {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The collection configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CollectError {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }
}

/// Result type for collection operations.
pub type Result<T> = std::result::Result<T, CollectError>;
