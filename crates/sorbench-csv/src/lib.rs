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

//! Flat CSV export of SOR benchmark results.
//!
//! Each `(size, meta)` entry of a [`ResultStore`] becomes one row:
//!
//! ```text
//! im,jm,km,method,optimized,node_count,dsm_nx,dsm_ny,time
//! 8,8,8,0,0,1,0,0,2.500000
//! 64,64,64,3,1,16,4,4,3.000000
//! ```
//!
//! Rows follow the store's snapshot order. `method` is the integer method
//! discriminant, `optimized` is `1` or `0`, and `time` is the largest sample
//! with six decimal places.
//!
//! [`ResultStore`]: sorbench_core::ResultStore

mod error;
mod to_csv;

pub use error::{CsvError, Result};
pub use to_csv::{
    item_to_record, items_to_csv_writer, to_csv, to_csv_with_config, to_csv_writer,
    to_csv_writer_with_config, ToCsvConfig, CSV_HEADERS,
};
