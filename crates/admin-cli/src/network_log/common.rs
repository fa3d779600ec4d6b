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

use neutron_client::output::Column;
use neutron_client::resource::{Record, ResourceSpec};
use serde_json::Value;

pub const SPEC: ResourceSpec = ResourceSpec::new("log", "logs", "log/logs");

pub const COLUMNS: &[Column] = &[
    Column::both("id", "ID"),
    Column::both("name", "Name"),
    Column::both("enabled", "Enabled"),
    Column::both("summary", "Summary"),
    Column::long("event", "Event"),
    Column::long("resource_type", "Resource Type"),
    Column::long("resource_id", "Resource ID"),
    Column::long("target_id", "Target ID"),
    Column::long("tenant_id", "Tenant ID"),
    Column::long("description", "Description"),
];

/// Add the client-side `summary` column to every listed log: the logged
/// event plus which resource/target the log is bound to, with a
/// `(None specified)` placeholder for unbound slots.
pub fn extend_with_summary(records: &mut [Record]) {
    for record in records.iter_mut() {
        let summary = summarize(record);
        record.insert("summary".to_string(), Value::String(summary));
    }
}

fn summarize(record: &Record) -> String {
    let event = record
        .get("event")
        .and_then(Value::as_str)
        .unwrap_or("ALL");
    let resource_type = record
        .get("resource_type")
        .and_then(Value::as_str)
        .unwrap_or_default();
    format!(
        "Event: {event}, Types: {resource_type}, Resource: {}, Target: {}",
        bound_or_none(record.get("resource_id")),
        bound_or_none(record.get("target_id"))
    )
}

fn bound_or_none(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        _ => "(None specified)".to_string(),
    }
}
