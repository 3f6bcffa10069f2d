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

//! Command-line argument definitions.

use crate::commands::{self, DEFAULT_CSV_OUTPUT, DEFAULT_JSON_OUTPUT};
use crate::error::CliError;
use clap::Subcommand;
use sorbench_collect::CollectConfig;
use std::path::PathBuf;

/// Top-level CLI commands.
///
/// Running the binary without a subcommand is the same as `collect` with
/// its defaults: both fixed roots under the working directory are scanned
/// and `test-results.json` / `test-results.csv` are written there.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Collect benchmark logs and write the JSON and CSV reports
    Collect {
        /// Directory containing the `results` and `results-flags` roots
        #[arg(long, default_value = ".")]
        base: PathBuf,

        /// JSON report path
        #[arg(long, default_value = DEFAULT_JSON_OUTPUT)]
        json: PathBuf,

        /// CSV report path
        #[arg(long, default_value = DEFAULT_CSV_OUTPUT)]
        csv: PathBuf,

        /// Do not print the collection summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Re-export a JSON snapshot as CSV
    Export {
        /// JSON snapshot to read
        snapshot: PathBuf,

        /// CSV output path
        #[arg(long, default_value = DEFAULT_CSV_OUTPUT)]
        csv: PathBuf,

        /// Also write a normalised JSON snapshot
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Print per-run statistics of a JSON snapshot
    Summary {
        /// JSON snapshot to read
        snapshot: PathBuf,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Collect {
            base: PathBuf::from("."),
            json: PathBuf::from(DEFAULT_JSON_OUTPUT),
            csv: PathBuf::from(DEFAULT_CSV_OUTPUT),
            quiet: true,
        }
    }
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if discovery, snapshot loading or report writing fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Collect {
                base,
                json,
                csv,
                quiet,
            } => {
                let config = CollectConfig::default().rooted_at(&base);
                commands::collect(config, &json, &csv, !quiet).map(|_| ())
            }
            Commands::Export {
                snapshot,
                csv,
                json,
            } => commands::export(&snapshot, &csv, json.as_deref()),
            Commands::Summary { snapshot } => commands::summary(&snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Option<Commands>,
    }

    #[test]
    fn test_no_subcommand_is_quiet_collect() {
        let cli = TestCli::parse_from(["sorbench"]);
        assert_eq!(cli.command.unwrap_or_default(), Commands::default());
    }

    #[test]
    fn test_collect_defaults_match_default_run() {
        let cli = TestCli::parse_from(["sorbench", "collect"]);
        assert_eq!(
            cli.command,
            Some(Commands::Collect {
                base: PathBuf::from("."),
                json: PathBuf::from("test-results.json"),
                csv: PathBuf::from("test-results.csv"),
                quiet: false,
            })
        );
    }

    #[test]
    fn test_export_optional_json() {
        let cli = TestCli::parse_from(["sorbench", "export", "snap.json", "--json", "out.json"]);
        assert_eq!(
            cli.command,
            Some(Commands::Export {
                snapshot: PathBuf::from("snap.json"),
                csv: PathBuf::from("test-results.csv"),
                json: Some(PathBuf::from("out.json")),
            })
        );
    }
}
