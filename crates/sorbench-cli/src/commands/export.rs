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

//! Re-export a JSON snapshot.

use super::{load_snapshot, write_reports};
use crate::error::CliError;
use std::path::Path;
use tracing::info;

/// Reload a JSON snapshot and write it back out as CSV, and optionally as
/// normalised JSON (sorted, statistics recomputed).
pub fn export(snapshot: &Path, csv_path: &Path, json_path: Option<&Path>) -> Result<(), CliError> {
    let store = load_snapshot(snapshot)?;
    write_reports(&store, json_path, csv_path)?;
    info!(
        snapshot = %snapshot.display(),
        entries = store.len(),
        "exported snapshot"
    );
    Ok(())
}
