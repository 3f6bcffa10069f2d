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

//! Sample statistics for one benchmark run.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::OnceLock;

/// Raw timing samples (seconds) plus lazily computed statistics.
///
/// The samples are fixed at construction. Each statistic is computed on first
/// access and cached; a cached value of `0.0` is a real result, not a marker
/// for "not yet computed". Every statistic of an empty sample set is `0.0`.
///
/// # Examples
///
/// ```
/// use sorbench_core::SorTimes;
///
/// let times = SorTimes::new(vec![3.0, 1.0, 2.0, 4.0]);
/// assert_eq!(times.max(), 4.0);
/// assert_eq!(times.min(), 1.0);
/// assert_eq!(times.average(), 2.5);
/// assert_eq!(times.middle(), 2.5);
/// // The raw order is untouched.
/// assert_eq!(times.samples(), &[3.0, 1.0, 2.0, 4.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SorTimes {
    times: Vec<f64>,
    max: OnceLock<f64>,
    min: OnceLock<f64>,
    avg: OnceLock<f64>,
    mid: OnceLock<f64>,
}

impl SorTimes {
    pub fn new(times: Vec<f64>) -> Self {
        Self {
            times,
            ..Default::default()
        }
    }

    /// The samples in their recorded order.
    pub fn samples(&self) -> &[f64] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Largest sample.
    pub fn max(&self) -> f64 {
        *self
            .max
            .get_or_init(|| self.sorted().last().copied().unwrap_or(0.0))
    }

    /// Smallest sample.
    pub fn min(&self) -> f64 {
        *self
            .min
            .get_or_init(|| self.sorted().first().copied().unwrap_or(0.0))
    }

    /// Arithmetic mean.
    pub fn average(&self) -> f64 {
        *self.avg.get_or_init(|| {
            if self.times.is_empty() {
                return 0.0;
            }
            self.times.iter().sum::<f64>() / self.times.len() as f64
        })
    }

    /// Median; the mean of the two central values for an even count.
    pub fn middle(&self) -> f64 {
        *self.mid.get_or_init(|| {
            let sorted = self.sorted();
            let n = sorted.len();
            match n {
                0 => 0.0,
                _ if n % 2 == 0 => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
                _ => sorted[n / 2],
            }
        })
    }

    // Sorts a copy; `times` keeps the recorded order.
    fn sorted(&self) -> Vec<f64> {
        let mut copy = self.times.clone();
        copy.sort_by(f64::total_cmp);
        copy
    }
}

impl From<Vec<f64>> for SorTimes {
    fn from(times: Vec<f64>) -> Self {
        Self::new(times)
    }
}

/// Equality is over the raw samples; caches are ignored.
impl PartialEq for SorTimes {
    fn eq(&self, other: &Self) -> bool {
        self.times == other.times
    }
}

impl Serialize for SorTimes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SorTimes", 5)?;
        state.serialize_field("times", &self.times)?;
        state.serialize_field("max", &self.max())?;
        state.serialize_field("min", &self.min())?;
        state.serialize_field("average", &self.average())?;
        state.serialize_field("middle", &self.middle())?;
        state.end()
    }
}

/// Only `times` is read back; exported statistics are recomputed.
impl<'de> Deserialize<'de> for SorTimes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawTimes {
            #[serde(default)]
            times: Option<Vec<f64>>,
        }

        let raw = RawTimes::deserialize(deserializer)?;
        Ok(Self::new(raw.times.unwrap_or_default()))
    }
}
