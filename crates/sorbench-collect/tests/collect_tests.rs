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

//! End-to-end collection tests over on-disk results trees.

use sorbench_collect::{
    collect, CollectConfig, CollectError, Collector, RootConfig, RESULTS_FLAGS,
};
use sorbench_core::{ArraySize, Meta, Method, ResultStore, SorTimes};
use sorbench_csv::to_csv;
use sorbench_test::{log_text, LogTree};

fn config_for(tree: &LogTree) -> CollectConfig {
    CollectConfig::default().rooted_at(tree.path())
}

#[test]
fn test_reference_log_to_csv_row() {
    let tree = LogTree::new().unwrap();
    tree.file("results", "8_8_8", "c.out", "SOR Time: 1.5\nSOR Time: 2.5\n")
        .unwrap();
    tree.dir("results-flags", "8_8_8").unwrap();

    let (store, summary) = collect(config_for(&tree)).unwrap();

    assert_eq!(summary.files_parsed, 1);
    let csv = to_csv(&store).unwrap();
    assert!(csv.lines().any(|line| line == "8,8,8,0,0,1,0,0,2.500000"));
}

#[test]
fn test_argo_log_identity() {
    let tree = LogTree::new().unwrap();
    tree.file(
        "results",
        "64_64_64",
        "argo_2_16_4_4.out",
        &log_text("SOR: ", &[3.0, 1.0, 2.0]),
    )
    .unwrap();
    tree.dir("results-flags", "64_64_64").unwrap();

    let (store, _) = collect(config_for(&tree)).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(
        snapshot[0].meta,
        Meta {
            method: Method::ArgoV2,
            optimized: true,
            node_count: 16,
            dsm_nx: 4,
            dsm_ny: 4,
        }
    );
    assert_eq!(snapshot[0].times.samples(), &[3.0, 1.0, 2.0]);
    assert!(to_csv(&store)
        .unwrap()
        .lines()
        .any(|line| line == "64,64,64,3,1,16,4,4,3.000000"));
}

#[test]
fn test_missing_reference_log_does_not_abort_directory() {
    let tree = LogTree::new().unwrap();
    tree.file("results", "8_8_8", "mpi_4.out", &log_text("SOR Time: ", &[0.5]))
        .unwrap();
    tree.file(
        "results",
        "8_8_8",
        "argo_1_4_2_2.out",
        &log_text("SOR: ", &[0.75]),
    )
    .unwrap();
    tree.dir("results-flags", "8_8_8").unwrap();

    let (store, summary) = collect(config_for(&tree)).unwrap();

    let size = ArraySize::new(8, 8, 8);
    assert_eq!(store.len(), 2);
    assert!(store.get(&size, &Meta::reference(false)).is_none());
    assert!(store.get(&size, &Meta::mpi(false, 4)).is_some());
    assert_eq!(summary.files_skipped, 0);
}

#[test]
fn test_both_roots_use_their_own_flags() {
    let tree = LogTree::new().unwrap();
    tree.file("results", "8_8_8", "c.out", &log_text("SOR Time: ", &[2.0]))
        .unwrap();
    tree.file("results", "8_8_8", "mpi_2.out", &log_text("SOR Time: ", &[1.0]))
        .unwrap();
    tree.file(
        "results",
        "8_8_8",
        "argo_3_2_1_2.out",
        &log_text("SOR: ", &[1.5]),
    )
    .unwrap();
    tree.file(
        "results-flags",
        "8_8_8",
        "c.out",
        &log_text("SOR Time: ", &[1.0]),
    )
    .unwrap();
    tree.file(
        "results-flags",
        "8_8_8",
        "mpi_2.out",
        &log_text("SOR Time: ", &[0.5]),
    )
    .unwrap();
    tree.file(
        "results-flags",
        "8_8_8",
        "argo_3_2_1_2.out",
        &log_text("SOR: ", &[2.5]),
    )
    .unwrap();

    let (store, summary) = collect(config_for(&tree)).unwrap();

    assert_eq!(summary.roots, 2);
    assert_eq!(summary.size_dirs, 2);
    assert_eq!(summary.files_parsed, 6);
    assert_eq!(store.len(), 6);

    let size = ArraySize::new(8, 8, 8);
    let max = |meta: Meta| store.get(&size, &meta).unwrap().max();
    assert_eq!(max(Meta::reference(false)), 2.0);
    assert_eq!(max(Meta::reference(true)), 1.0);
    assert_eq!(max(Meta::mpi(false, 2)), 1.0);
    assert_eq!(max(Meta::mpi(true, 2)), 0.5);
    assert_eq!(max(Meta::argo(Method::ArgoV3, true, 2, 1, 2)), 1.5);
    assert_eq!(max(Meta::argo(Method::ArgoV3, false, 2, 1, 2)), 2.5);
}

#[test]
fn test_unparsable_lines_leave_partial_samples() {
    let tree = LogTree::new().unwrap();
    tree.file(
        "results",
        "16_16_16",
        "c.out",
        "SOR Time: 1.0\nSOR Time: n/a\nSOR Time: 3.0\n",
    )
    .unwrap();
    tree.file("results", "16_16_16", "mpi_8.out", "SOR Time: broken\n")
        .unwrap();
    tree.dir("results-flags", "16_16_16").unwrap();

    let (store, summary) = collect(config_for(&tree)).unwrap();

    let size = ArraySize::new(16, 16, 16);
    assert_eq!(
        store.get(&size, &Meta::reference(false)),
        Some(SorTimes::new(vec![1.0, 3.0]))
    );
    let empty = store.get(&size, &Meta::mpi(false, 8)).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.max(), 0.0);
    assert_eq!(summary.rejected_lines, 2);
}

#[test]
fn test_missing_root_is_fatal() {
    let tree = LogTree::new().unwrap();
    tree.dir("results", "8_8_8").unwrap();

    let err = collect(config_for(&tree)).unwrap_err();
    match err {
        CollectError::ReadDir { path, .. } => assert!(path.ends_with("results-flags")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parallel_matches_serial() {
    let tree = LogTree::new().unwrap();
    for processes in 1..=12u32 {
        tree.file(
            "bench",
            "32_32_32",
            &format!("mpi_{}.out", processes),
            &log_text("SOR Time: ", &[f64::from(processes), 0.5]),
        )
        .unwrap();
    }

    let run = |threshold: usize| {
        let config = CollectConfig {
            roots: vec![RootConfig::new(tree.root("bench"), RESULTS_FLAGS)],
            parallel_threshold: threshold,
            ..Default::default()
        };
        let store = ResultStore::new();
        let summary = Collector::new(config).unwrap().collect_all(&store).unwrap();
        (store.snapshot(), summary)
    };

    let (serial, serial_summary) = run(usize::MAX);
    let (parallel, parallel_summary) = run(1);
    assert_eq!(serial.len(), 12);
    assert_eq!(serial, parallel);
    assert_eq!(serial_summary, parallel_summary);
}

#[test]
fn test_duplicate_size_dirs_name_last_wins() {
    // Three size directories that all parse to 8_8_8.
    let tree = LogTree::new().unwrap();
    tree.file("bench", "8_8_8", "c.out", &log_text("SOR Time: ", &[3.0]))
        .unwrap();
    tree.file("bench", "08_8_8", "c.out", &log_text("SOR Time: ", &[2.0]))
        .unwrap();
    tree.file("bench", "008_8_8", "c.out", &log_text("SOR Time: ", &[1.0]))
        .unwrap();

    let config = CollectConfig {
        roots: vec![RootConfig::new(tree.root("bench"), RESULTS_FLAGS)],
        ..Default::default()
    };
    let (store, summary) = collect(config).unwrap();

    assert_eq!(summary.files_parsed, 3);
    assert_eq!(store.len(), 1);
    let times = store
        .get(&ArraySize::new(8, 8, 8), &Meta::reference(false))
        .unwrap();
    assert_eq!(times.samples(), &[3.0]);
}

#[test]
fn test_duplicate_logs_name_last_wins_in_parallel() {
    let tree = LogTree::new().unwrap();
    tree.file("bench", "16_16_16", "mpi_8.out", &log_text("SOR Time: ", &[8.0]))
        .unwrap();
    tree.file("bench", "16_16_16", "mpi_08.out", &log_text("SOR Time: ", &[0.8]))
        .unwrap();
    tree.file("bench", "16_16_16", "mpi_008.out", &log_text("SOR Time: ", &[0.08]))
        .unwrap();

    for threshold in [1, usize::MAX] {
        let config = CollectConfig {
            roots: vec![RootConfig::new(tree.root("bench"), RESULTS_FLAGS)],
            parallel_threshold: threshold,
            ..Default::default()
        };
        let (store, _) = collect(config).unwrap();

        assert_eq!(store.len(), 1);
        let times = store
            .get(&ArraySize::new(16, 16, 16), &Meta::mpi(false, 8))
            .unwrap();
        assert_eq!(times.samples(), &[8.0], "threshold {}", threshold);
    }
}

#[test]
fn test_non_finite_timings_rejected_and_json_reloads() {
    let tree = LogTree::new().unwrap();
    tree.file(
        "results",
        "8_8_8",
        "c.out",
        "SOR Time: 1.5\nSOR Time: NaN\nSOR Time: inf\nSOR Time: -infinity\n",
    )
    .unwrap();
    tree.dir("results-flags", "8_8_8").unwrap();

    let (store, summary) = collect(config_for(&tree)).unwrap();

    assert_eq!(summary.samples, 1);
    assert_eq!(summary.rejected_lines, 3);

    let json = sorbench_json::to_json(&store).unwrap();
    assert!(!json.contains("null"));
    let reloaded = sorbench_json::from_json(&json).unwrap();
    assert_eq!(reloaded.snapshot(), store.snapshot());
}
