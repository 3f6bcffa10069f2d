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

//! Reload a result store from a JSON snapshot.

use crate::error::Result;
use sorbench_core::{ResultStore, StorageResult};
use std::io::Read;

/// Parse a JSON snapshot into its storage form.
///
/// Exported statistics are ignored; only the raw samples are kept.
pub fn parse_storage(json: &str) -> Result<StorageResult> {
    Ok(serde_json::from_str(json)?)
}

/// Rebuild a store from a JSON snapshot.
///
/// Each record is joined as if it had just been parsed from a log, so the
/// resulting store has the same keys and raw samples as the one that was
/// exported.
///
/// # Example
/// ```
/// use sorbench_json::from_json;
///
/// let json = r#"{"items": [{
///     "size": {"I": 8, "J": 8, "K": 8},
///     "meta": {"method": 0, "optimized": false, "node_count": 1, "dsm_nx": 0, "dsm_ny": 0},
///     "times": {"times": [1.5, 2.5]}
/// }]}"#;
///
/// let store = from_json(json).unwrap();
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.snapshot()[0].times.max(), 2.5);
/// ```
pub fn from_json(json: &str) -> Result<ResultStore> {
    Ok(ResultStore::from_storage(parse_storage(json)?))
}

/// Rebuild a store from a JSON snapshot read from `reader`.
pub fn from_json_reader<R: Read>(reader: R) -> Result<ResultStore> {
    let storage: StorageResult = serde_json::from_reader(reader)?;
    Ok(ResultStore::from_storage(storage))
}

/// Join every record of a JSON snapshot into an existing store.
///
/// Returns the number of records loaded.
pub fn load_json(store: &ResultStore, json: &str) -> Result<usize> {
    let storage = parse_storage(json)?;
    let count = storage.items.len();
    store.load(storage.items);
    Ok(count)
}
