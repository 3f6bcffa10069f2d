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

//! Filename classification.

use crate::config::FilePatterns;
use crate::error::{CollectError, Result};
use regex::Regex;
use sorbench_core::{ArraySize, Meta, Method, OptimizationFlags};
use tracing::warn;

/// What a log file holds, as read from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// `c.out`
    Reference,
    /// `mpi_<processes>.out`
    Mpi { processes: u32 },
    /// `argo_<version>_<nodes>_<nx>_<ny>.out`
    Argo {
        version: u32,
        nodes: u32,
        nx: u32,
        ny: u32,
    },
}

impl LogKind {
    /// The method of this log; `None` for an Argo version outside 1..=3.
    pub fn method(&self) -> Option<Method> {
        match *self {
            LogKind::Reference => Some(Method::Reference),
            LogKind::Mpi { .. } => Some(Method::Mpi),
            LogKind::Argo { version, .. } => Method::argo(version),
        }
    }

    /// The full run identity under the given root flags.
    ///
    /// ```
    /// use sorbench_collect::LogKind;
    /// use sorbench_core::{Meta, Method, OptimizationFlags};
    ///
    /// let flags = OptimizationFlags::new([false, false, true, true, true]);
    /// let kind = LogKind::Argo { version: 2, nodes: 16, nx: 4, ny: 4 };
    /// assert_eq!(kind.meta(&flags), Some(Meta::argo(Method::ArgoV2, true, 16, 4, 4)));
    /// ```
    pub fn meta(&self, flags: &OptimizationFlags) -> Option<Meta> {
        let method = self.method()?;
        let optimized = flags.get(method);
        Some(match *self {
            LogKind::Reference => Meta::reference(optimized),
            LogKind::Mpi { processes } => Meta::mpi(optimized, processes),
            LogKind::Argo { nodes, nx, ny, .. } => Meta::argo(method, optimized, nodes, nx, ny),
        })
    }
}

/// Compiled [`FilePatterns`].
#[derive(Debug, Clone)]
pub struct Matchers {
    size_dir: Regex,
    reference_file: String,
    mpi_file: Regex,
    argo_file: Regex,
    number: Regex,
}

impl Matchers {
    /// Compile every pattern; any failure is fatal to the run.
    pub fn compile(patterns: &FilePatterns) -> Result<Self> {
        Ok(Self {
            size_dir: compile(&patterns.size_dir)?,
            reference_file: patterns.reference_file.clone(),
            mpi_file: compile(&patterns.mpi_file)?,
            argo_file: compile(&patterns.argo_file)?,
            number: compile(&patterns.number)?,
        })
    }

    /// The array size named by a size directory, if `name` is one.
    pub fn size_dir(&self, name: &str) -> Option<ArraySize> {
        if !self.size_dir.is_match(name) {
            return None;
        }
        match name.parse() {
            Ok(size) => Some(size),
            Err(e) => {
                warn!(dir = name, error = %e, "skipping size directory");
                None
            }
        }
    }

    /// Classify a log filename; `None` for files that are not solver logs.
    ///
    /// ```
    /// use sorbench_collect::{FilePatterns, LogKind, Matchers};
    ///
    /// let matchers = Matchers::compile(&FilePatterns::default()).unwrap();
    /// assert_eq!(matchers.classify("c.out"), Some(LogKind::Reference));
    /// assert_eq!(matchers.classify("mpi_8.out"), Some(LogKind::Mpi { processes: 8 }));
    /// assert_eq!(
    ///     matchers.classify("argo_1_16_4_4.out"),
    ///     Some(LogKind::Argo { version: 1, nodes: 16, nx: 4, ny: 4 })
    /// );
    /// assert_eq!(matchers.classify("notes.txt"), None);
    /// ```
    pub fn classify(&self, filename: &str) -> Option<LogKind> {
        if filename == self.reference_file {
            return Some(LogKind::Reference);
        }

        if self.mpi_file.is_match(filename) {
            let numbers = self.numbers(filename)?;
            return match numbers.as_slice() {
                [processes, ..] => Some(LogKind::Mpi {
                    processes: *processes,
                }),
                _ => {
                    warn!(file = filename, "no process count in MPI log name");
                    None
                }
            };
        }

        if self.argo_file.is_match(filename) {
            let numbers = self.numbers(filename)?;
            return match numbers.as_slice() {
                [version, nodes, nx, ny, ..] => Some(LogKind::Argo {
                    version: *version,
                    nodes: *nodes,
                    nx: *nx,
                    ny: *ny,
                }),
                _ => {
                    warn!(file = filename, "expected four integers in Argo log name");
                    None
                }
            };
        }

        None
    }

    fn numbers(&self, filename: &str) -> Option<Vec<u32>> {
        let mut numbers = Vec::new();
        for m in self.number.find_iter(filename) {
            match m.as_str().parse() {
                Ok(n) => numbers.push(n),
                Err(e) => {
                    warn!(file = filename, value = m.as_str(), error = %e, "integer out of range");
                    return None;
                }
            }
        }
        Some(numbers)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| CollectError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}
