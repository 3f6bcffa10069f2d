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

//! Integration tests for sorbench-csv.

use sorbench_csv::{items_to_csv_writer, to_csv, ToCsvConfig, CSV_HEADERS};
use sorbench_test::fixtures::{sample_records, sample_store};

#[test]
fn test_one_row_per_entry() {
    let csv = to_csv(&sample_store()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], CSV_HEADERS.join(","));
    assert_eq!(lines.len(), sample_records().len() + 1);
}

#[test]
fn test_sample_store_rows() {
    let csv = to_csv(&sample_store()).unwrap();
    let expected = "\
im,jm,km,method,optimized,node_count,dsm_nx,dsm_ny,time
8,8,8,0,0,1,0,0,2.500000
8,8,8,0,1,1,0,0,0.750000
8,8,8,1,0,2,0,0,1.250000
8,8,8,1,0,8,0,0,0.625000
8,8,8,2,1,16,4,4,1.100000
8,8,8,3,1,16,2,8,0.000000
128,128,64,0,0,1,0,0,12.250000
128,128,64,4,0,8,2,4,3.000000
";
    assert_eq!(csv, expected);
}

#[test]
fn test_items_writer_matches_store_writer() {
    let store = sample_store();
    let mut buffer = Vec::new();
    items_to_csv_writer(&store.snapshot(), &mut buffer, ToCsvConfig::default()).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), to_csv(&store).unwrap());
}

#[test]
fn test_output_parses_back_with_csv_reader() {
    let csv = to_csv(&sample_store()).unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_bytes());

    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADERS.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), sample_records().len());
    for row in &rows {
        assert_eq!(row.len(), CSV_HEADERS.len());
        let time: f64 = row[8].parse().unwrap();
        assert!(time >= 0.0);
    }
}
