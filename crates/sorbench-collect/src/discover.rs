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

//! Directory discovery.
//!
//! A results root contains one directory per array size (`<I>_<J>_<K>`), and
//! each of those contains the solver logs for that size. Listing failures are
//! fatal; entries that do not look like size directories or logs are ignored.

use crate::error::{CollectError, Result};
use crate::patterns::{LogKind, Matchers};
use sorbench_core::ArraySize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A size directory under a results root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeDir {
    pub size: ArraySize,
    pub path: PathBuf,
}

/// A classified log file inside a size directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub size: ArraySize,
    pub kind: LogKind,
}

/// List the size directories of `root`, ordered by array size and then by
/// path.
///
/// Distinct names can spell the same size (`8_8_8`, `08_8_8`); ordering by
/// path makes the name-last of them the one collected last.
pub fn discover_sizes(root: &Path, matchers: &Matchers) -> Result<Vec<SizeDir>> {
    let mut dirs = Vec::new();

    for (name, path, is_dir) in list_dir(root)? {
        let Some(size) = matchers.size_dir(&name) else {
            continue;
        };
        if !is_dir {
            debug!(path = %path.display(), "size-named entry is not a directory");
            continue;
        }
        dirs.push(SizeDir { size, path });
    }

    dirs.sort_by(|a, b| a.size.cmp(&b.size).then_with(|| a.path.cmp(&b.path)));
    Ok(dirs)
}

/// List the solver logs of a size directory, ordered by file name.
pub fn discover_logs(dir: &SizeDir, matchers: &Matchers) -> Result<Vec<LogFile>> {
    let mut logs = Vec::new();

    for (name, path, is_dir) in list_dir(&dir.path)? {
        if is_dir {
            continue;
        }
        let Some(kind) = matchers.classify(&name) else {
            debug!(path = %path.display(), "ignoring file");
            continue;
        };
        logs.push(LogFile {
            path,
            size: dir.size,
            kind,
        });
    }

    logs.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(logs)
}

// (name, path, is_dir) for every entry with a UTF-8 name.
fn list_dir(dir: &Path) -> Result<Vec<(String, PathBuf, bool)>> {
    let entries = fs::read_dir(dir).map_err(|e| CollectError::read_dir(dir, e))?;

    let mut listed = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CollectError::read_dir(dir, e))?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            warn!(path = %path.display(), "skipping entry with non UTF-8 name");
            continue;
        };
        // Follows symlinks, so linked size directories are listed too.
        let is_dir = path.is_dir();
        listed.push((name, path, is_dir));
    }
    Ok(listed)
}
