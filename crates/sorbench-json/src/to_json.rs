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

//! Serialize a result store as a JSON snapshot.

use crate::error::{JsonError, Result};
use sorbench_core::{ResultStore, StorageResult};
use std::io::Write;

/// Configuration for JSON output.
#[derive(Debug, Clone)]
pub struct ToJsonConfig {
    /// Indent with two spaces (default: true)
    pub pretty: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Serialize a store as an indented JSON snapshot.
///
/// # Example
/// ```
/// use sorbench_core::{ArraySize, Meta, ResultStore, SorTimes};
/// use sorbench_json::to_json;
///
/// let store = ResultStore::new();
/// store.join(ArraySize::new(8, 8, 8), Meta::reference(false), SorTimes::new(vec![1.5]));
///
/// let json = to_json(&store).unwrap();
/// assert!(json.starts_with("{\n  \"items\": ["));
/// ```
pub fn to_json(store: &ResultStore) -> Result<String> {
    to_json_with_config(store, ToJsonConfig::default())
}

/// Serialize a store as a JSON snapshot with custom configuration.
pub fn to_json_with_config(store: &ResultStore, config: ToJsonConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(256 * store.len().max(4));
    to_json_writer_with_config(store, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| JsonError::InvalidUtf8 {
        context: "JSON output".to_string(),
    })
}

/// Write an indented JSON snapshot to `writer`.
///
/// # Example
/// ```no_run
/// use sorbench_core::ResultStore;
/// use sorbench_json::to_json_writer;
/// use std::fs::File;
///
/// let store = ResultStore::new();
/// let file = File::create("test-results.json").unwrap();
/// to_json_writer(&store, file).unwrap();
/// ```
pub fn to_json_writer<W: Write>(store: &ResultStore, writer: W) -> Result<()> {
    to_json_writer_with_config(store, writer, ToJsonConfig::default())
}

/// Write a JSON snapshot to `writer` with custom configuration.
pub fn to_json_writer_with_config<W: Write>(
    store: &ResultStore,
    writer: W,
    config: ToJsonConfig,
) -> Result<()> {
    write_storage(&store.to_storage(), writer, &config)
}

/// Write an already-taken storage snapshot.
pub fn storage_to_json_writer<W: Write>(
    storage: &StorageResult,
    writer: W,
    config: ToJsonConfig,
) -> Result<()> {
    write_storage(storage, writer, &config)
}

fn write_storage<W: Write>(storage: &StorageResult, mut writer: W, config: &ToJsonConfig) -> Result<()> {
    if config.pretty {
        serde_json::to_writer_pretty(&mut writer, storage)?;
    } else {
        serde_json::to_writer(&mut writer, storage)?;
    }
    writer.flush()?;
    Ok(())
}
