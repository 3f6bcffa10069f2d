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

//! Run identity, sample statistics and the aggregation store for SOR
//! benchmark results.
//!
//! Timing logs from several solver variants (a reference build, an MPI build
//! and three Argo DSM builds) are reduced to a single keyed dataset:
//!
//! - [`ArraySize`] and [`Meta`] identify a run and act as map keys.
//! - [`SorTimes`] holds the raw samples of a run and caches max, min, mean
//!   and median.
//! - [`ResultStore`] maps `(ArraySize, Meta)` to [`SorTimes`], is safe to
//!   join into from several threads, and hands out sorted snapshots.
//! - [`StorageItem`] / [`StorageResult`] are the flattened snapshot shape
//!   used by the exporters.
//!
//! # Example
//!
//! ```
//! use sorbench_core::{ArraySize, Meta, Method, ResultStore, SorTimes};
//!
//! let store = ResultStore::new();
//! let size = ArraySize::new(64, 64, 64);
//! store.join(size, Meta::argo(Method::ArgoV2, true, 16, 4, 4), SorTimes::new(vec![3.0, 1.0, 2.0]));
//! store.join(size, Meta::reference(false), SorTimes::new(vec![1.5, 2.5]));
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot[0].meta.method, Method::Reference);
//! assert_eq!(snapshot[1].times.max(), 3.0);
//! ```

mod error;
mod model;
mod store;
mod times;

pub use error::{CoreError, Result};
pub use model::{ArraySize, Meta, Method, OptimizationFlags};
pub use store::{ResultStore, StorageItem, StorageResult};
pub use times::SorTimes;
