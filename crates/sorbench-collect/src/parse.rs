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

//! Timing extraction from solver logs.

use std::path::Path;
use tracing::warn;

/// Samples extracted from one log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSamples {
    /// Values in log order.
    pub samples: Vec<f64>,
    /// Marker lines whose value did not parse.
    pub rejected: usize,
}

/// Extract every timing value that follows `marker`.
///
/// Lines without the marker are ignored. On a marker line every occurrence
/// of the marker is removed, surrounding whitespace is trimmed, and the rest
/// must parse as a finite float; otherwise the line is logged and skipped.
///
/// # Examples
///
/// ```
/// use sorbench_collect::parse_samples;
/// use std::path::Path;
///
/// let log = "start\nSOR Time: 1.5\nSOR Time: oops\nSOR Time: 2.5\n";
/// let parsed = parse_samples(log, "SOR Time: ", Path::new("c.out"));
/// assert_eq!(parsed.samples, vec![1.5, 2.5]);
/// assert_eq!(parsed.rejected, 1);
/// ```
pub fn parse_samples(content: &str, marker: &str, path: &Path) -> ParsedSamples {
    let mut parsed = ParsedSamples::default();

    for (index, line) in content.lines().enumerate() {
        if !line.contains(marker) {
            continue;
        }
        let value = line.replace(marker, "");
        let value = value.trim();
        match value.parse::<f64>() {
            Ok(sample) if sample.is_finite() => parsed.samples.push(sample),
            Ok(sample) => {
                warn!(
                    path = %path.display(),
                    line = index + 1,
                    value,
                    sample,
                    "skipping non-finite timing"
                );
                parsed.rejected += 1;
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    line = index + 1,
                    value,
                    error = %e,
                    "skipping unparsable timing"
                );
                parsed.rejected += 1;
            }
        }
    }

    parsed
}
