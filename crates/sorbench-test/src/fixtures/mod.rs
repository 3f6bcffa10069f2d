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

//! In-memory result stores.

use sorbench_core::{ArraySize, Meta, Method, ResultStore, SorTimes};

/// Records with distinct keys spanning every method, two sizes, an
/// optimized/unoptimized pair and an empty sample list.
pub fn sample_records() -> Vec<(ArraySize, Meta, Vec<f64>)> {
    let small = ArraySize::new(8, 8, 8);
    let large = ArraySize::new(128, 128, 64);

    vec![
        (large, Meta::reference(false), vec![12.25, 11.5, 12.0]),
        (small, Meta::reference(false), vec![1.5, 2.5]),
        (small, Meta::reference(true), vec![0.75, 0.5]),
        (small, Meta::mpi(false, 8), vec![0.5, 0.625, 0.375]),
        (small, Meta::mpi(false, 2), vec![1.25]),
        (
            small,
            Meta::argo(Method::ArgoV1, true, 16, 4, 4),
            vec![0.9, 1.1, 1.0, 1.0],
        ),
        (small, Meta::argo(Method::ArgoV2, true, 16, 2, 8), vec![]),
        (
            large,
            Meta::argo(Method::ArgoV3, false, 8, 2, 4),
            vec![3.0, 1.0, 2.0],
        ),
    ]
}

/// A store built from [`sample_records`].
pub fn sample_store() -> ResultStore {
    let store = ResultStore::new();
    for (size, meta, samples) in sample_records() {
        store.join(size, meta, SorTimes::new(samples));
    }
    store
}
