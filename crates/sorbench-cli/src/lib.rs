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

//! SORBench command-line library.
//!
//! The `sorbench` binary scans the fixed `results` and `results-flags`
//! directory trees for SOR benchmark logs and writes the aggregated
//! results as `test-results.json` and `test-results.csv`.
//!
//! # Commands
//!
//! - **collect** (the default when no subcommand is given): scan, aggregate
//!   and write both reports
//! - **export**: rewrite a JSON snapshot as CSV
//! - **summary**: print per-run statistics of a JSON snapshot
//!
//! # Examples
//!
//! ```no_run
//! use sorbench_cli::cli::Commands;
//!
//! # fn main() -> Result<(), sorbench_cli::error::CliError> {
//! Commands::default().execute()?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
