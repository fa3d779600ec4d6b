/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Attribute-map driven rendering of resource records.

use std::fmt::Write as _;

use clap::ValueEnum;
use prettytable::{Row, Table};
use serde_json::Value;

use crate::error::NeutronCliResult;
use crate::resource::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "kebab_case")]
pub enum OutputFormat {
    AsciiTable,
    Json,
}

/// Which listings a column appears in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Both,
    ShortOnly,
    LongOnly,
}

impl Visibility {
    fn shown(self, long: bool) -> bool {
        match self {
            Visibility::Both => true,
            Visibility::ShortOnly => !long,
            Visibility::LongOnly => long,
        }
    }
}

/// One entry of a resource's attribute map: API attribute name, display
/// header, and the listings it appears in. Attribute names are unique within
/// one map.
#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub attr: &'static str,
    pub header: &'static str,
    pub visibility: Visibility,
}

impl Column {
    pub const fn both(attr: &'static str, header: &'static str) -> Self {
        Self {
            attr,
            header,
            visibility: Visibility::Both,
        }
    }

    pub const fn short(attr: &'static str, header: &'static str) -> Self {
        Self {
            attr,
            header,
            visibility: Visibility::ShortOnly,
        }
    }

    pub const fn long(attr: &'static str, header: &'static str) -> Self {
        Self {
            attr,
            header,
            visibility: Visibility::LongOnly,
        }
    }
}

/// Compute the ordered `(headers, attribute keys)` pair for a listing.
///
/// Mapped columns keep their declaration order. Attributes that appear in a
/// record but not in the map are appended at the end, sorted by their
/// display name (which defaults to the raw key), so repeated listings of the
/// same data always render identically.
pub fn select_columns(
    columns: &[Column],
    records: &[Record],
    long: bool,
) -> (Vec<String>, Vec<String>) {
    let mut headers = Vec::new();
    let mut keys = Vec::new();
    for column in columns.iter().filter(|column| column.visibility.shown(long)) {
        headers.push(column.header.to_string());
        keys.push(column.attr.to_string());
    }

    let mut unknown: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if columns.iter().all(|column| column.attr != key) && !unknown.contains(key) {
                unknown.push(key.clone());
            }
        }
    }
    unknown.sort();
    for key in unknown {
        headers.push(key.clone());
        keys.push(key);
    }

    (headers, keys)
}

/// Render one attribute value into a table cell.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

pub fn print_list(
    records: &[Record],
    columns: &[Column],
    long: bool,
    format: OutputFormat,
) -> NeutronCliResult<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }
    let (headers, keys) = select_columns(columns, records, long);
    let mut table = Table::new();
    table.set_titles(Row::from(headers));
    for record in records {
        table.add_row(Row::from(
            keys.iter()
                .map(|key| cell_text(record.get(key.as_str()).unwrap_or(&Value::Null)))
                .collect::<Vec<_>>(),
        ));
    }
    table.printstd();
    Ok(())
}

pub fn print_record(record: &Record, format: OutputFormat) -> NeutronCliResult<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }
    println!("{}", detail_lines(record)?);
    Ok(())
}

/// Aligned key/value block for a single record, attributes sorted by name.
fn detail_lines(record: &Record) -> NeutronCliResult<String> {
    let width = record.keys().map(String::len).max().unwrap_or(0);
    let mut entries: Vec<(&String, &Value)> = record.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut lines = String::new();
    for (key, value) in entries {
        writeln!(&mut lines, "{key:<width$}: {}", cell_text(value))?;
    }
    Ok(lines.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const COLUMNS: &[Column] = &[
        Column::both("id", "ID"),
        Column::both("name", "Name"),
        Column::short("status", "Status"),
        Column::long("tenant_id", "Tenant ID"),
        Column::long("description", "Description"),
    ];

    fn record(value: Value) -> Record {
        match value {
            Value::Object(record) => record,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn headers_and_keys_stay_in_lockstep() {
        for long in [false, true] {
            let (headers, keys) = select_columns(COLUMNS, &[], long);
            assert_eq!(headers.len(), keys.len());
        }
    }

    #[test]
    fn short_listing_hides_long_only_columns() {
        let (headers, keys) = select_columns(COLUMNS, &[], false);
        assert_eq!(headers, vec!["ID", "Name", "Status"]);
        assert_eq!(keys, vec!["id", "name", "status"]);
    }

    #[test]
    fn long_listing_swaps_short_only_for_long_only_columns() {
        let (headers, keys) = select_columns(COLUMNS, &[], true);
        assert_eq!(headers, vec!["ID", "Name", "Tenant ID", "Description"]);
        assert_eq!(keys, vec!["id", "name", "tenant_id", "description"]);
    }

    #[test]
    fn unknown_attributes_append_sorted_by_raw_key() {
        let records = vec![
            record(json!({"id": "a", "zebra": 1, "apple": 2})),
            record(json!({"id": "b", "mango": 3})),
        ];
        let (headers, keys) = select_columns(COLUMNS, &records, false);
        assert_eq!(headers, vec!["ID", "Name", "Status", "apple", "mango", "zebra"]);
        assert_eq!(keys, vec!["id", "name", "status", "apple", "mango", "zebra"]);
    }

    #[test]
    fn selection_is_stable_across_calls() {
        let records = vec![record(json!({"id": "a", "x2": 1, "x1": 2}))];
        let first = select_columns(COLUMNS, &records, true);
        let second = select_columns(COLUMNS, &records, true);
        assert_eq!(first, second);
    }

    #[test]
    fn cells_render_scalars_plainly_and_composites_as_json() {
        assert_eq!(cell_text(&json!("plain")), "plain");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!(["a", "b"])), r#"["a","b"]"#);
        assert_eq!(cell_text(&json!({"k": "v"})), r#"{"k":"v"}"#);
    }

    #[test]
    fn detail_lines_align_and_sort_attributes() {
        let record = record(json!({"name": "n1", "id": "abc"}));
        let lines = detail_lines(&record).expect("detail should render");
        assert_eq!(lines, "id  : abc\nname: n1");
    }
}
