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

//! Structured error types for the SORBench CLI.

use sorbench_collect::CollectError;
use sorbench_csv::CsvError;
use sorbench_json::JsonError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for SORBench CLI operations.
///
/// Any of these aborts the run; `main` prints it and exits with a failure
/// code. Per-log problems never reach this type.
#[derive(Error, Debug)]
pub enum CliError {
    /// An input could not be opened or an output could not be created.
    #[error("I/O error for '{}': {}", .path.display(), .message)]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Discovery or configuration failure.
    #[error("Collection failed: {0}")]
    Collect(#[from] CollectError),

    /// JSON export or snapshot reload failure.
    #[error("JSON conversion error: {0}")]
    Json(#[from] JsonError),

    /// CSV export failure.
    #[error("CSV conversion error: {0}")]
    Csv(#[from] CsvError),
}

impl CliError {
    /// Create an I/O error with file path context.
    ///
    /// ```rust,no_run
    /// use sorbench_cli::error::CliError;
    /// use std::fs::File;
    ///
    /// let result = File::create("test-results.csv")
    ///     .map_err(|e| CliError::io_error("test-results.csv", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
