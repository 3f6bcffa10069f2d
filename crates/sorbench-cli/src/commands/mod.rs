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

//! CLI command implementations

mod collect;
mod export;
mod summary;

pub use collect::{collect, write_reports};
pub use export::export;
pub use summary::{format_record, summary};

use crate::error::CliError;
use sorbench_core::ResultStore;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Default JSON report path, relative to the working directory.
pub const DEFAULT_JSON_OUTPUT: &str = "test-results.json";

/// Default CSV report path, relative to the working directory.
pub const DEFAULT_CSV_OUTPUT: &str = "test-results.csv";

/// Create (or truncate) an output file.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, CliError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| CliError::io_error(path, e))
}

/// Rebuild a store from a JSON snapshot on disk.
pub fn load_snapshot(path: &Path) -> Result<ResultStore, CliError> {
    let file = File::open(path).map_err(|e| CliError::io_error(path, e))?;
    Ok(sorbench_json::from_json_reader(BufReader::new(file))?)
}
