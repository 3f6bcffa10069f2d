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

//! The aggregation store and its flattened storage form.

use crate::model::{ArraySize, Meta};
use crate::times::SorTimes;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// One `(size, meta, times)` record of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageItem {
    pub size: ArraySize,
    pub meta: Meta,
    pub times: SorTimes,
}

impl StorageItem {
    /// The sort key of a snapshot record.
    pub fn key(&self) -> (ArraySize, Meta) {
        (self.size, self.meta)
    }
}

/// The list-of-records wire shape of a store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StorageResult {
    #[serde(default)]
    pub items: Vec<StorageItem>,
}

type Items = HashMap<ArraySize, HashMap<Meta, SorTimes>>;

/// Thread-safe mapping from [`ArraySize`] to [`Meta`] to [`SorTimes`].
///
/// At most one entry exists per `(size, meta)` pair. Joining a pair that is
/// already present replaces the earlier samples.
///
/// # Examples
///
/// ```
/// use sorbench_core::{ArraySize, Meta, ResultStore, SorTimes};
///
/// let store = ResultStore::new();
/// let size = ArraySize::new(8, 8, 8);
/// store.join(size, Meta::reference(false), SorTimes::new(vec![1.5, 2.5]));
///
/// let snapshot = store.snapshot();
/// assert_eq!(snapshot.len(), 1);
/// assert_eq!(snapshot[0].times.max(), 2.5);
/// ```
#[derive(Debug, Default)]
pub struct ResultStore {
    items: RwLock<Items>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from its storage form.
    pub fn from_storage(storage: StorageResult) -> Self {
        let store = Self::new();
        store.load(storage.items);
        store
    }

    /// Insert or replace the entry for `(size, meta)`.
    ///
    /// Returns the samples that were replaced, if any.
    pub fn join(&self, size: ArraySize, meta: Meta, times: SorTimes) -> Option<SorTimes> {
        let mut items = self.items.write();
        join_locked(&mut items, size, meta, times)
    }

    /// Join every record, holding the write lock for the whole batch.
    pub fn load<I>(&self, records: I)
    where
        I: IntoIterator<Item = StorageItem>,
    {
        let mut items = self.items.write();
        for record in records {
            join_locked(&mut items, record.size, record.meta, record.times);
        }
    }

    /// A sorted copy of every record.
    ///
    /// Records are ordered by size (`I`, `J`, `K`) and then by meta (method,
    /// optimized, node count, `dsm_nx`, `dsm_ny`), ascending. The read lock is
    /// held for the whole flatten-and-sort pass.
    pub fn snapshot(&self) -> Vec<StorageItem> {
        let items = self.items.read();

        let mut records: Vec<StorageItem> = items
            .iter()
            .flat_map(|(size, metas)| {
                metas.iter().map(move |(meta, times)| StorageItem {
                    size: *size,
                    meta: *meta,
                    times: times.clone(),
                })
            })
            .collect();

        // `sort_by` is stable.
        records.sort_by(|a, b| a.key().cmp(&b.key()));
        records
    }

    pub fn to_storage(&self) -> StorageResult {
        StorageResult {
            items: self.snapshot(),
        }
    }

    pub fn get(&self, size: &ArraySize, meta: &Meta) -> Option<SorTimes> {
        self.items
            .read()
            .get(size)
            .and_then(|metas| metas.get(meta))
            .cloned()
    }

    /// Number of `(size, meta)` entries.
    pub fn len(&self) -> usize {
        self.items.read().values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct array sizes, ascending.
    pub fn sizes(&self) -> Vec<ArraySize> {
        let mut sizes: Vec<ArraySize> = self.items.read().keys().copied().collect();
        sizes.sort();
        sizes
    }
}

fn join_locked(items: &mut Items, size: ArraySize, meta: Meta, times: SorTimes) -> Option<SorTimes> {
    let replaced = items.entry(size).or_default().insert(meta, times);
    if let Some(previous) = &replaced {
        warn!(
            size = %size,
            meta = %meta,
            dropped_samples = previous.len(),
            "replaced existing entry"
        );
    }
    replaced
}
