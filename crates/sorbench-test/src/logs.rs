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

//! On-disk results trees.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Render solver output with one `<marker><sample>` line per sample,
/// surrounded by unrelated lines.
///
/// ```
/// use sorbench_test::log_text;
///
/// let text = log_text("SOR Time: ", &[1.5, 2.5]);
/// assert!(text.contains("SOR Time: 1.5\n"));
/// assert!(text.contains("SOR Time: 2.5\n"));
/// ```
pub fn log_text(marker: &str, samples: &[f64]) -> String {
    let mut text = String::from("initialising grid\n");
    for (iteration, sample) in samples.iter().enumerate() {
        text.push_str(&format!("iteration {} residual 1e-6\n", iteration));
        text.push_str(&format!("{}{}\n", marker, sample));
    }
    text.push_str("done\n");
    text
}

/// A temporary working directory holding one or more results roots.
///
/// The directory is removed when the tree is dropped.
pub struct LogTree {
    dir: TempDir,
}

impl LogTree {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// The working directory that contains the roots.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn root(&self, root: &str) -> PathBuf {
        self.dir.path().join(root)
    }

    /// Write `<root>/<size_dir>/<name>`, creating directories as needed.
    pub fn file(&self, root: &str, size_dir: &str, name: &str, content: &str) -> io::Result<PathBuf> {
        let dir = self.root(root).join(size_dir);
        fs::create_dir_all(&dir)?;
        let path = dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Create an empty `<root>/<size_dir>` directory.
    pub fn dir(&self, root: &str, size_dir: &str) -> io::Result<PathBuf> {
        let dir = self.root(root).join(size_dir);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
