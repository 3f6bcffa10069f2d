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

//! Discover and parse SOR solver logs into a result store.
//!
//! A results root is laid out as:
//!
//! ```text
//! results/
//! ├── 8_8_8/
//! │   ├── c.out               reference solver
//! │   ├── mpi_8.out           MPI, 8 processes
//! │   └── argo_2_16_4_4.out   Argo v2, 16 nodes, 4x4 DSM grid
//! └── 64_64_64/
//!     └── ...
//! ```
//!
//! Each recognised log is scanned for its method's marker line (for example
//! `SOR Time: 1.5`) and the values are joined into a
//! [`ResultStore`](sorbench_core::ResultStore) under the run identity derived
//! from the directory name, the file name and the root's optimization flags.
//!
//! # Errors
//!
//! A root that cannot be listed, or a pattern that does not compile, aborts
//! the run with a [`CollectError`]. A log that cannot be read, or a line whose
//! value is not a number, is logged through `tracing` and skipped.
//!
//! # Example
//!
//! ```no_run
//! use sorbench_collect::{collect, CollectConfig};
//!
//! # fn main() -> Result<(), sorbench_collect::CollectError> {
//! let (store, summary) = collect(CollectConfig::default())?;
//! println!("{} logs parsed, {} skipped", summary.files_parsed, summary.files_skipped);
//! # let _ = store;
//! # Ok(())
//! # }
//! ```

mod collector;
mod config;
mod discover;
mod error;
mod parse;
mod patterns;

pub use collector::{collect, CollectSummary, Collector, FileOutcome};
pub use config::{
    CollectConfig, FilePatterns, LogMarkers, RootConfig, DEFAULT_ARGO_PATTERN,
    DEFAULT_MPI_PATTERN, DEFAULT_NUMBER_PATTERN, DEFAULT_REFERENCE_FILE,
    DEFAULT_SIZE_DIR_PATTERN, RESULTS_FLAGS, RESULTS_FLAGS_FLAGS, RESULTS_FLAGS_ROOT,
    RESULTS_ROOT,
};
pub use discover::{discover_logs, discover_sizes, LogFile, SizeDir};
pub use error::{CollectError, Result};
pub use parse::{parse_samples, ParsedSamples};
pub use patterns::{LogKind, Matchers};
