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

//! Collection configuration.
//!
//! Everything the collector needs (results roots, their optimization flags,
//! filename patterns and log markers) is carried in a [`CollectConfig`]
//! value. The defaults reproduce the standard two-root layout.

use crate::error::{CollectError, Result};
use sorbench_core::{Method, OptimizationFlags};
use std::path::{Path, PathBuf};

/// Root holding the unmodified MPI/reference builds and optimized Argo builds.
pub const RESULTS_ROOT: &str = "results";

/// Root holding the optimized MPI/reference builds and unmodified Argo builds.
pub const RESULTS_FLAGS_ROOT: &str = "results-flags";

/// Optimization flags of [`RESULTS_ROOT`], indexed by method.
pub const RESULTS_FLAGS: OptimizationFlags =
    OptimizationFlags::new([false, false, true, true, true]);

/// Optimization flags of [`RESULTS_FLAGS_ROOT`], indexed by method.
pub const RESULTS_FLAGS_FLAGS: OptimizationFlags =
    OptimizationFlags::new([true, true, false, false, false]);

/// Size directories such as `512_512_256`.
pub const DEFAULT_SIZE_DIR_PATTERN: &str = r"^[0-9]+_[0-9]+_[0-9]+$";
/// Reference solver log.
pub const DEFAULT_REFERENCE_FILE: &str = "c.out";
/// MPI logs such as `mpi_8.out`.
pub const DEFAULT_MPI_PATTERN: &str = r"^mpi_[0-9]+\.out$";
/// Argo logs such as `argo_1_16_4_4.out`.
pub const DEFAULT_ARGO_PATTERN: &str = r"^argo_[0-9]+_[0-9]+_[0-9]+_[0-9]+\.out$";
/// Integers embedded in a log filename.
pub const DEFAULT_NUMBER_PATTERN: &str = r"[0-9]+";

/// Filename patterns. Sources are compiled by [`Matchers::compile`].
///
/// [`Matchers::compile`]: crate::Matchers::compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePatterns {
    pub size_dir: String,
    /// Exact file name of the reference log.
    pub reference_file: String,
    pub mpi_file: String,
    pub argo_file: String,
    /// Extracts the integers of an MPI or Argo filename, left to right.
    pub number: String,
}

impl Default for FilePatterns {
    fn default() -> Self {
        Self {
            size_dir: DEFAULT_SIZE_DIR_PATTERN.to_string(),
            reference_file: DEFAULT_REFERENCE_FILE.to_string(),
            mpi_file: DEFAULT_MPI_PATTERN.to_string(),
            argo_file: DEFAULT_ARGO_PATTERN.to_string(),
            number: DEFAULT_NUMBER_PATTERN.to_string(),
        }
    }
}

/// Marker preceding a timing value on a log line, per solver family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMarkers {
    pub reference: String,
    pub mpi: String,
    pub argo: String,
}

impl LogMarkers {
    pub fn for_method(&self, method: Method) -> &str {
        match method {
            Method::Reference => &self.reference,
            Method::Mpi => &self.mpi,
            Method::ArgoV1 | Method::ArgoV2 | Method::ArgoV3 => &self.argo,
        }
    }
}

impl Default for LogMarkers {
    fn default() -> Self {
        Self {
            reference: "SOR Time: ".to_string(),
            mpi: "SOR Time: ".to_string(),
            argo: "SOR: ".to_string(),
        }
    }
}

/// A results root and the optimization flags its logs were built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootConfig {
    pub path: PathBuf,
    pub flags: OptimizationFlags,
}

impl RootConfig {
    pub fn new(path: impl Into<PathBuf>, flags: OptimizationFlags) -> Self {
        Self {
            path: path.into(),
            flags,
        }
    }
}

/// Configuration for a collection run.
///
/// # Examples
///
/// ```
/// use sorbench_collect::{CollectConfig, RootConfig, RESULTS_FLAGS};
///
/// // The standard layout, resolved against a working directory.
/// let config = CollectConfig::default().rooted_at("/data/bench");
/// assert_eq!(config.roots[0].path.to_str(), Some("/data/bench/results"));
///
/// // A single custom root.
/// let config = CollectConfig {
///     roots: vec![RootConfig::new("nightly", RESULTS_FLAGS)],
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// Roots, collected in order.
    pub roots: Vec<RootConfig>,
    pub patterns: FilePatterns,
    pub markers: LogMarkers,
    /// Minimum number of logs in a size directory to parse them on the
    /// rayon pool. Default: 10
    pub parallel_threshold: usize,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            roots: vec![
                RootConfig::new(RESULTS_ROOT, RESULTS_FLAGS),
                RootConfig::new(RESULTS_FLAGS_ROOT, RESULTS_FLAGS_FLAGS),
            ],
            patterns: FilePatterns::default(),
            markers: LogMarkers::default(),
            parallel_threshold: 10,
        }
    }
}

impl CollectConfig {
    /// Resolve relative root paths against `base`.
    pub fn rooted_at(mut self, base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        for root in &mut self.roots {
            if root.path.is_relative() {
                root.path = base.join(&root.path);
            }
        }
        self
    }

    /// Reject configurations that would misparse every log.
    pub fn validate(&self) -> Result<()> {
        if self.roots.is_empty() {
            return Err(CollectError::InvalidConfig(
                "at least one results root is required".to_string(),
            ));
        }
        if self.patterns.reference_file.is_empty() {
            return Err(CollectError::InvalidConfig(
                "reference file name is empty".to_string(),
            ));
        }
        for (family, marker) in [
            ("reference", &self.markers.reference),
            ("mpi", &self.markers.mpi),
            ("argo", &self.markers.argo),
        ] {
            if marker.is_empty() {
                return Err(CollectError::InvalidConfig(format!(
                    "{} log marker is empty",
                    family
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roots() {
        let config = CollectConfig::default();
        assert_eq!(config.roots.len(), 2);
        assert_eq!(config.roots[0].path, PathBuf::from("results"));
        assert_eq!(
            config.roots[0].flags.as_array(),
            [false, false, true, true, true]
        );
        assert_eq!(config.roots[1].path, PathBuf::from("results-flags"));
        assert_eq!(
            config.roots[1].flags.as_array(),
            [true, true, false, false, false]
        );
    }

    #[test]
    fn test_rooted_at_keeps_absolute_paths() {
        let mut config = CollectConfig::default();
        config.roots.push(RootConfig::new("/abs/root", RESULTS_FLAGS));
        let config = config.rooted_at("/work");

        assert_eq!(config.roots[0].path, PathBuf::from("/work/results"));
        assert_eq!(config.roots[1].path, PathBuf::from("/work/results-flags"));
        assert_eq!(config.roots[2].path, PathBuf::from("/abs/root"));
    }

    #[test]
    fn test_markers_per_method() {
        let markers = LogMarkers::default();
        assert_eq!(markers.for_method(Method::Reference), "SOR Time: ");
        assert_eq!(markers.for_method(Method::Mpi), "SOR Time: ");
        assert_eq!(markers.for_method(Method::ArgoV1), "SOR: ");
        assert_eq!(markers.for_method(Method::ArgoV3), "SOR: ");
    }

    #[test]
    fn test_validate_rejects_empty_marker() {
        let mut config = CollectConfig::default();
        config.markers.argo.clear();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: argo log marker is empty"
        );
    }

    #[test]
    fn test_validate_rejects_no_roots() {
        let config = CollectConfig {
            roots: vec![],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CollectError::InvalidConfig(_))
        ));
    }
}
