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

//! JSON export and snapshot reload for SOR benchmark results.
//!
//! The exported document is the sorted snapshot of a [`ResultStore`]:
//!
//! ```json
//! {
//!   "items": [
//!     {
//!       "size": { "I": 8, "J": 8, "K": 8 },
//!       "meta": { "method": 0, "optimized": false, "node_count": 1, "dsm_nx": 0, "dsm_ny": 0 },
//!       "times": { "times": [1.5, 2.5], "max": 2.5, "min": 1.5, "average": 2.0, "middle": 2.0 }
//!     }
//!   ]
//! }
//! ```
//!
//! Reloading reads only the raw `times` list of each record; the derived
//! statistics are recomputed from it.
//!
//! # Round trip
//!
//! ```
//! use sorbench_core::{ArraySize, Meta, ResultStore, SorTimes};
//! use sorbench_json::{from_json, to_json};
//!
//! let store = ResultStore::new();
//! store.join(ArraySize::new(8, 8, 8), Meta::reference(false), SorTimes::new(vec![1.5, 2.5]));
//!
//! let reloaded = from_json(&to_json(&store).unwrap()).unwrap();
//! assert_eq!(reloaded.snapshot(), store.snapshot());
//! ```
//!
//! [`ResultStore`]: sorbench_core::ResultStore

mod error;
mod from_json;
mod to_json;

pub use error::{JsonError, Result};
pub use from_json::{from_json, from_json_reader, load_json, parse_storage};
pub use to_json::{
    storage_to_json_writer, to_json, to_json_with_config, to_json_writer,
    to_json_writer_with_config, ToJsonConfig,
};
