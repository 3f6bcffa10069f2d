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

//! SORBench command line interface

use clap::Parser;
use sorbench_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// SORBench - SOR benchmark result aggregation
///
/// Collects the SOR timings printed by the reference, MPI and Argo
/// benchmark runs and writes them as JSON and CSV reports.
///
/// # Examples
///
/// ```bash
/// # Scan ./results and ./results-flags, write test-results.{json,csv}
/// sorbench
///
/// # Print statistics of an existing report
/// sorbench summary test-results.json
/// ```
#[derive(Parser)]
#[command(name = "sorbench")]
#[command(author, version, about = "SORBench - SOR benchmark result aggregation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,sorbench_core=info,sorbench_collect=info,sorbench_cli=info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match cli.command.unwrap_or_default().execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
