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

//! Convert a result store to a flat CSV table.

use crate::error::{CsvError, Result};
use sorbench_core::{ResultStore, StorageItem};
use std::io::Write;

/// Column names of the CSV table, in order.
pub const CSV_HEADERS: [&str; 9] = [
    "im",
    "jm",
    "km",
    "method",
    "optimized",
    "node_count",
    "dsm_nx",
    "dsm_ny",
    "time",
];

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
    /// Decimal places for the `time` column (default: 6)
    pub precision: usize,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
            precision: 6,
        }
    }
}

/// Convert a store to a CSV string.
///
/// One row per `(size, meta)` entry in snapshot order; `time` is the largest
/// sample of the entry.
///
/// # Example
/// ```
/// use sorbench_core::{ArraySize, Meta, ResultStore, SorTimes};
/// use sorbench_csv::to_csv;
///
/// let store = ResultStore::new();
/// store.join(ArraySize::new(8, 8, 8), Meta::reference(false), SorTimes::new(vec![1.5, 2.5]));
///
/// let csv = to_csv(&store).unwrap();
/// assert_eq!(
///     csv,
///     "im,jm,km,method,optimized,node_count,dsm_nx,dsm_ny,time\n8,8,8,0,0,1,0,0,2.500000\n"
/// );
/// ```
pub fn to_csv(store: &ResultStore) -> Result<String> {
    to_csv_with_config(store, ToCsvConfig::default())
}

/// Convert a store to a CSV string with custom configuration.
pub fn to_csv_with_config(store: &ResultStore, config: ToCsvConfig) -> Result<String> {
    // Header plus roughly 48 bytes per row.
    let mut buffer = Vec::with_capacity(64 + store.len() * 48);

    to_csv_writer_with_config(store, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Write a store as CSV using a writer.
///
/// # Example
/// ```no_run
/// use sorbench_core::ResultStore;
/// use sorbench_csv::to_csv_writer;
/// use std::fs::File;
///
/// let store = ResultStore::new();
/// let file = File::create("test-results.csv").unwrap();
/// to_csv_writer(&store, file).unwrap();
/// ```
pub fn to_csv_writer<W: Write>(store: &ResultStore, writer: W) -> Result<()> {
    to_csv_writer_with_config(store, writer, ToCsvConfig::default())
}

/// Write a store as CSV with custom configuration.
pub fn to_csv_writer_with_config<W: Write>(
    store: &ResultStore,
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    write_items(&store.snapshot(), writer, &config)
}

/// Write already-sorted snapshot records as CSV.
pub fn items_to_csv_writer<W: Write>(
    items: &[StorageItem],
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    write_items(items, writer, &config)
}

fn write_items<W: Write>(items: &[StorageItem], writer: W, config: &ToCsvConfig) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    if config.include_headers {
        wtr.write_record(CSV_HEADERS).map_err(|e| CsvError::Write {
            row: 0,
            message: e.to_string(),
        })?;
    }

    for (index, item) in items.iter().enumerate() {
        let record = item_to_record(item, config.precision);
        wtr.write_record(&record).map_err(|e| CsvError::Write {
            row: index + 1,
            message: e.to_string(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// The CSV fields of one snapshot record.
///
/// `method` is the integer discriminant, `optimized` is `1`/`0` and `time`
/// is the maximum sample with `precision` decimal places.
pub fn item_to_record(item: &StorageItem, precision: usize) -> [String; 9] {
    [
        item.size.i.to_string(),
        item.size.j.to_string(),
        item.size.k.to_string(),
        item.meta.method.as_u8().to_string(),
        u8::from(item.meta.optimized).to_string(),
        item.meta.node_count.to_string(),
        item.meta.dsm_nx.to_string(),
        item.meta.dsm_ny.to_string(),
        format!("{:.*}", precision, item.times.max()),
    ]
}
