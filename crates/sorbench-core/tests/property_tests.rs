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

//! Property-based tests for sample statistics and snapshot ordering.

use proptest::prelude::*;
use sorbench_core::{ArraySize, Meta, Method, ResultStore, SorTimes, StorageItem};

fn samples() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1.0e4, 1..64)
}

fn method() -> impl Strategy<Value = Method> {
    prop::sample::select(Method::ALL.to_vec())
}

fn record() -> impl Strategy<Value = (ArraySize, Meta, Vec<f64>)> {
    (
        (1u32..5, 1u32..5, 1u32..5),
        method(),
        any::<bool>(),
        1u32..17,
        0u32..5,
        0u32..5,
        prop::collection::vec(0.0f64..100.0, 0..8),
    )
        .prop_map(|((i, j, k), method, optimized, node_count, dsm_nx, dsm_ny, times)| {
            (
                ArraySize::new(i, j, k),
                Meta {
                    method,
                    optimized,
                    node_count,
                    dsm_nx,
                    dsm_ny,
                },
                times,
            )
        })
}

fn store_from(records: &[(ArraySize, Meta, Vec<f64>)]) -> ResultStore {
    let store = ResultStore::new();
    for (size, meta, times) in records {
        store.join(*size, *meta, SorTimes::new(times.clone()));
    }
    store
}

/// Distinct keys only, so join order cannot change which samples win.
fn dedup_keys(records: Vec<(ArraySize, Meta, Vec<f64>)>) -> Vec<(ArraySize, Meta, Vec<f64>)> {
    let mut seen = std::collections::HashSet::new();
    records
        .into_iter()
        .filter(|(size, meta, _)| seen.insert((*size, *meta)))
        .collect()
}

proptest! {
    #[test]
    fn prop_max_and_min_bound_every_sample(values in samples()) {
        let times = SorTimes::new(values.clone());
        for v in &values {
            prop_assert!(times.max() >= *v);
            prop_assert!(times.min() <= *v);
        }
    }

    #[test]
    fn prop_average_between_min_and_max(values in samples()) {
        let times = SorTimes::new(values);
        // Allow for summation rounding.
        let eps = times.max() * 1e-12;
        prop_assert!(times.min() - eps <= times.average());
        prop_assert!(times.average() <= times.max() + eps);
    }

    #[test]
    fn prop_middle_between_min_and_max(values in samples()) {
        let times = SorTimes::new(values);
        prop_assert!(times.min() <= times.middle());
        prop_assert!(times.middle() <= times.max());
    }

    #[test]
    fn prop_statistics_are_order_independent(mut values in samples()) {
        let forward = SorTimes::new(values.clone());
        values.reverse();
        let backward = SorTimes::new(values);
        prop_assert_eq!(forward.max(), backward.max());
        prop_assert_eq!(forward.min(), backward.min());
        prop_assert_eq!(forward.middle(), backward.middle());
    }

    #[test]
    fn prop_snapshot_independent_of_join_order(records in prop::collection::vec(record(), 0..40)) {
        let records = dedup_keys(records);
        let mut reversed = records.clone();
        reversed.reverse();

        prop_assert_eq!(store_from(&records).snapshot(), store_from(&reversed).snapshot());
    }

    #[test]
    fn prop_snapshot_is_sorted(records in prop::collection::vec(record(), 0..40)) {
        let snapshot = store_from(&records).snapshot();
        let keys: Vec<(ArraySize, Meta)> = snapshot.iter().map(StorageItem::key).collect();
        for pair in keys.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn prop_load_snapshot_round_trip(records in prop::collection::vec(record(), 0..40)) {
        let store = store_from(&records);
        let rebuilt = ResultStore::new();
        rebuilt.load(store.snapshot());
        prop_assert_eq!(rebuilt.snapshot(), store.snapshot());
    }
}

#[test]
fn test_last_write_wins_never_unions() {
    let store = ResultStore::new();
    let size = ArraySize::new(8, 8, 8);
    let meta = Meta::reference(false);

    store.join(size, meta, SorTimes::new(vec![1.0, 2.0, 3.0]));
    store.join(size, meta, SorTimes::new(vec![10.0]));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].times.samples(), &[10.0]);
}
