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

//! Batch collection of solver logs into a [`ResultStore`].
//!
//! Roots are walked in configuration order and size directories in size
//! order. Within a size directory each log is independent; directories with
//! at least [`CollectConfig::parallel_threshold`] logs are parsed on the
//! rayon pool, smaller ones serially. Parsed logs are joined into the store
//! in path order either way, so when two files map to the same key the
//! name-last one wins regardless of scheduling.

use crate::config::{CollectConfig, RootConfig};
use crate::discover::{discover_logs, discover_sizes, LogFile, SizeDir};
use crate::error::Result;
use crate::parse::{parse_samples, ParsedSamples};
use crate::patterns::Matchers;
use rayon::prelude::*;
use sorbench_core::{Meta, OptimizationFlags, ResultStore, SorTimes};
use std::fs;
use tracing::{debug, info, warn};

/// What happened to one log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Joined into the store.
    Parsed { samples: usize, rejected: usize },
    /// Unreadable or unsupported; nothing was joined.
    Skipped,
}

/// Counters for a collection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectSummary {
    pub roots: usize,
    pub size_dirs: usize,
    pub files_parsed: usize,
    pub files_skipped: usize,
    pub samples: usize,
    pub rejected_lines: usize,
}

impl CollectSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Parsed { samples, rejected } => {
                self.files_parsed += 1;
                self.samples += samples;
                self.rejected_lines += rejected;
            }
            FileOutcome::Skipped => self.files_skipped += 1,
        }
    }

    pub fn merge(&mut self, other: CollectSummary) {
        self.roots += other.roots;
        self.size_dirs += other.size_dirs;
        self.files_parsed += other.files_parsed;
        self.files_skipped += other.files_skipped;
        self.samples += other.samples;
        self.rejected_lines += other.rejected_lines;
    }

    pub fn total_files(&self) -> usize {
        self.files_parsed + self.files_skipped
    }
}

/// Walks results roots and joins every parsed log into a store.
///
/// # Examples
///
/// ```no_run
/// use sorbench_collect::{CollectConfig, Collector};
/// use sorbench_core::ResultStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let collector = Collector::new(CollectConfig::default())?;
/// let store = ResultStore::new();
/// let summary = collector.collect_all(&store)?;
/// println!("{} logs, {} entries", summary.files_parsed, store.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Collector {
    config: CollectConfig,
    matchers: Matchers,
}

impl Collector {
    /// Validate the configuration and compile its patterns.
    pub fn new(config: CollectConfig) -> Result<Self> {
        config.validate()?;
        let matchers = Matchers::compile(&config.patterns)?;
        Ok(Self { config, matchers })
    }

    pub fn config(&self) -> &CollectConfig {
        &self.config
    }

    pub fn matchers(&self) -> &Matchers {
        &self.matchers
    }

    /// Collect every configured root, in order.
    pub fn collect_all(&self, store: &ResultStore) -> Result<CollectSummary> {
        let mut summary = CollectSummary::default();
        for root in &self.config.roots {
            summary.merge(self.collect_root(store, root)?);
        }
        Ok(summary)
    }

    /// Collect one results root.
    ///
    /// All size directories are discovered before any log is read, so an
    /// unreadable root fails before the store is touched.
    pub fn collect_root(&self, store: &ResultStore, root: &RootConfig) -> Result<CollectSummary> {
        let dirs = discover_sizes(&root.path, &self.matchers)?;

        let mut summary = CollectSummary {
            roots: 1,
            ..Default::default()
        };
        for dir in &dirs {
            summary.merge(self.collect_size_dir(store, dir, &root.flags)?);
        }

        info!(
            root = %root.path.display(),
            size_dirs = summary.size_dirs,
            parsed = summary.files_parsed,
            skipped = summary.files_skipped,
            "collected root"
        );
        Ok(summary)
    }

    /// Collect the logs of one size directory.
    pub fn collect_size_dir(
        &self,
        store: &ResultStore,
        dir: &SizeDir,
        flags: &OptimizationFlags,
    ) -> Result<CollectSummary> {
        let logs = discover_logs(dir, &self.matchers)?;

        let parsed: Vec<Option<(Meta, ParsedSamples)>> =
            if logs.len() >= self.config.parallel_threshold {
                logs.par_iter().map(|log| self.parse_file(log, flags)).collect()
            } else {
                logs.iter().map(|log| self.parse_file(log, flags)).collect()
            };

        let mut summary = CollectSummary {
            size_dirs: 1,
            ..Default::default()
        };
        // `logs` is path-sorted and `collect` keeps that order.
        for (log, parsed) in logs.iter().zip(parsed) {
            summary.record(join_parsed(store, log, parsed));
        }
        Ok(summary)
    }

    /// Parse one log and join it into the store.
    ///
    /// Never fails: an unreadable file or an unsupported Argo version is
    /// logged and reported as [`FileOutcome::Skipped`].
    pub fn collect_file(
        &self,
        store: &ResultStore,
        log: &LogFile,
        flags: &OptimizationFlags,
    ) -> FileOutcome {
        join_parsed(store, log, self.parse_file(log, flags))
    }

    fn parse_file(&self, log: &LogFile, flags: &OptimizationFlags) -> Option<(Meta, ParsedSamples)> {
        let Some(meta) = log.kind.meta(flags) else {
            warn!(path = %log.path.display(), kind = ?log.kind, "unsupported Argo version");
            return None;
        };

        let bytes = match fs::read(&log.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(path = %log.path.display(), size = %log.size, error = %e, "skipping unreadable log");
                return None;
            }
        };
        let content = String::from_utf8_lossy(&bytes);

        let marker = self.config.markers.for_method(meta.method);
        let parsed = parse_samples(&content, marker, &log.path);
        debug!(
            path = %log.path.display(),
            size = %log.size,
            meta = %meta,
            samples = parsed.samples.len(),
            "parsed log"
        );
        Some((meta, parsed))
    }
}

fn join_parsed(
    store: &ResultStore,
    log: &LogFile,
    parsed: Option<(Meta, ParsedSamples)>,
) -> FileOutcome {
    let Some((meta, parsed)) = parsed else {
        return FileOutcome::Skipped;
    };
    let outcome = FileOutcome::Parsed {
        samples: parsed.samples.len(),
        rejected: parsed.rejected,
    };
    store.join(log.size, meta, SorTimes::new(parsed.samples));
    outcome
}

/// Collect every root of `config` into a fresh store.
pub fn collect(config: CollectConfig) -> Result<(ResultStore, CollectSummary)> {
    let collector = Collector::new(config)?;
    let store = ResultStore::new();
    let summary = collector.collect_all(&store)?;
    Ok((store, summary))
}
