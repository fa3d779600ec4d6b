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

use clap::{CommandFactory, Parser};
use serde_json::{json, Value};

use super::*;
use neutron_client::resource::Record;

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

fn record(value: Value) -> Record {
    match value {
        Value::Object(record) => record,
        other => panic!("fixture must be an object, got {other}"),
    }
}

// parse_create_resource_type_choices ensures the resource type enum
// uses the API spellings.
#[test]
fn parse_create_resource_type_choices() {
    let cmd = Cmd::try_parse_from([
        "network-log",
        "create",
        "log1",
        "--resource-type",
        "firewall_group",
        "--event",
        "DROP",
    ])
    .expect("should parse create");
    assert!(matches!(cmd, Cmd::Create(_)));

    let result = Cmd::try_parse_from([
        "network-log",
        "create",
        "log1",
        "--resource-type",
        "router",
    ]);
    assert!(result.is_err(), "unknown resource type should fail");
}

// parse_create_event_is_uppercase ensures event values match the API
// spellings exactly.
#[test]
fn parse_create_event_is_uppercase() {
    let result = Cmd::try_parse_from([
        "network-log",
        "create",
        "log1",
        "--resource-type",
        "security_group",
        "--event",
        "drop",
    ]);
    assert!(result.is_err(), "lowercase event should fail");
}

// summary_shows_bound_resources pins the summary text for a fully
// bound log entry.
#[test]
fn summary_shows_bound_resources() {
    let mut records = vec![record(json!({
        "event": "DROP",
        "resource_type": "firewall_group",
        "resource_id": "fwg-1",
        "target_id": "port-1",
    }))];
    common::extend_with_summary(&mut records);
    assert_eq!(
        records[0].get("summary"),
        Some(&json!(
            "Event: DROP, Types: firewall_group, Resource: fwg-1, Target: port-1"
        ))
    );
}

// summary_marks_unbound_slots pins the placeholder for logs bound to
// neither a resource nor a target.
#[test]
fn summary_marks_unbound_slots() {
    let mut records = vec![record(json!({
        "event": "ALL",
        "resource_type": "security_group",
        "resource_id": null,
    }))];
    common::extend_with_summary(&mut records);
    assert_eq!(
        records[0].get("summary"),
        Some(&json!(
            "Event: ALL, Types: security_group, Resource: (None specified), Target: (None specified)"
        ))
    );
}
