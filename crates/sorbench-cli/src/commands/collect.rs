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

//! The default run: collect every root and write both reports.

use super::create_output;
use crate::error::CliError;
use colored::Colorize;
use sorbench_collect::{CollectConfig, CollectSummary, Collector};
use sorbench_core::ResultStore;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Collect the configured roots into a fresh store and write the JSON and
/// CSV reports.
///
/// Discovery, configuration and output-creation failures abort the run.
pub fn collect(
    config: CollectConfig,
    json_path: &Path,
    csv_path: &Path,
    show_summary: bool,
) -> Result<CollectSummary, CliError> {
    let start = Instant::now();

    let collector = Collector::new(config)?;
    let store = ResultStore::new();
    let summary = collector.collect_all(&store)?;

    write_reports(&store, Some(json_path), csv_path)?;
    info!(
        entries = store.len(),
        json = %json_path.display(),
        csv = %csv_path.display(),
        "wrote reports"
    );

    if show_summary {
        print_summary(&summary, store.len(), start.elapsed().as_secs_f64());
    }
    Ok(summary)
}

/// Write the JSON (if requested) and CSV reports of a store.
pub fn write_reports(
    store: &ResultStore,
    json_path: Option<&Path>,
    csv_path: &Path,
) -> Result<(), CliError> {
    if let Some(json_path) = json_path {
        sorbench_json::to_json_writer(store, create_output(json_path)?)?;
    }
    sorbench_csv::to_csv_writer(store, create_output(csv_path)?)?;
    Ok(())
}

fn print_summary(summary: &CollectSummary, entries: usize, elapsed: f64) {
    println!("{}", "═".repeat(60).bright_blue());
    println!("{}", "SOR Benchmark Collection".bright_blue().bold());
    println!("{}", "═".repeat(60).bright_blue());
    println!(
        "  {} {}",
        "Roots:".bright_cyan(),
        summary.roots.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Size directories:".bright_cyan(),
        summary.size_dirs.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Logs parsed:".green().bold(),
        summary.files_parsed.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Logs skipped:".red().bold(),
        summary.files_skipped.to_string().bright_white()
    );
    println!(
        "  {} {} ({} rejected lines)",
        "Samples:".bright_cyan(),
        summary.samples.to_string().bright_white(),
        summary.rejected_lines
    );
    println!(
        "  {} {}",
        "Entries:".bright_cyan(),
        entries.to_string().bright_white()
    );
    println!("  {} {:.2}s", "Elapsed:".bright_cyan(), elapsed);
    println!("{}", "═".repeat(60).bright_blue());
}
