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

pub const SPEC: ResourceSpec =
    ResourceSpec::new("firewall_rule", "firewall_rules", "fwaas/firewall_rules");

pub const COLUMNS: &[Column] = &[
    Column::both("id", "ID"),
    Column::both("name", "Name"),
    Column::both("summary", "Summary"),
    Column::both("enabled", "Enabled"),
    Column::long("firewall_policy_id", "Firewall Policy ID"),
    Column::long("ip_version", "IP Version"),
    Column::long("shared", "Shared"),
    Column::long("tenant_id", "Tenant ID"),
    Column::long("description", "Description"),
];

/// Add the client-side `summary` column to every listed rule. The text
/// layout is scraped by existing scripts and is kept byte for byte:
/// upper-cased protocol (or `no-protocol`), source and destination as
/// `address(port)` with `none specified` placeholders, then the action,
/// joined with `,\n `.
pub fn extend_with_summary(records: &mut [Record]) {
    for record in records.iter_mut() {
        let summary = summarize(record);
        record.insert("summary".to_string(), Value::String(summary));
    }
}

fn summarize(record: &Record) -> String {
    let mut parts = Vec::with_capacity(4);

    let protocol = match record.get("protocol") {
        Some(Value::String(protocol)) if !protocol.is_empty() => protocol.to_uppercase(),
        _ => "no-protocol".to_string(),
    };
    parts.push(protocol);

    parts.push(endpoint_part(
        "source",
        record,
        "source_ip_address",
        "source_port",
    ));
    parts.push(endpoint_part(
        "dest",
        record,
        "destination_ip_address",
        "destination_port",
    ));

    let action = record
        .get("action")
        .and_then(Value::as_str)
        .unwrap_or("no-action");
    parts.push(action.to_string());

    parts.join(",\n ")
}

fn endpoint_part(label: &str, record: &Record, address_key: &str, port_key: &str) -> String {
    if record.contains_key(address_key) && record.contains_key(port_key) {
        format!(
            "{label}: {}({})",
            placeholder(record.get(address_key)),
            placeholder(record.get(port_key))
        )
    } else {
        format!("{label}: none specified")
    }
}

fn placeholder(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) if !text.is_empty() => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => "none specified".to_string(),
    }
}
