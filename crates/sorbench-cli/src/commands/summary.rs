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

//! Print per-run statistics of a JSON snapshot.

use super::load_snapshot;
use crate::error::CliError;
use colored::Colorize;
use sorbench_core::StorageItem;
use std::path::Path;

/// Print one line per record of a snapshot with its sample count, min,
/// mean, median and max.
pub fn summary(snapshot: &Path) -> Result<(), CliError> {
    let store = load_snapshot(snapshot)?;
    let records = store.snapshot();

    println!(
        "{}",
        format!(
            "{:<16} {:<10} {:>3} {:>5} {:>7} {:>5} {:>12} {:>12} {:>12} {:>12}",
            "size", "method", "opt", "nodes", "dsm", "n", "min", "mean", "median", "max"
        )
        .bold()
    );
    for record in &records {
        let line = format_record(record);
        if record.times.is_empty() {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }
    println!("{} {}", "Entries:".bright_cyan(), records.len());
    Ok(())
}

/// One summary line for a record.
pub fn format_record(record: &StorageItem) -> String {
    let meta = &record.meta;
    let times = &record.times;
    format!(
        "{:<16} {:<10} {:>3} {:>5} {:>7} {:>5} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
        record.size.to_string(),
        meta.method.name(),
        u8::from(meta.optimized),
        meta.node_count,
        format!("{}x{}", meta.dsm_nx, meta.dsm_ny),
        times.len(),
        times.min(),
        times.average(),
        times.middle(),
        times.max(),
    )
}
