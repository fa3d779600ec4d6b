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

// The intent of the tests.rs file is to test the integrity of the
// command: structure parsing, enum choices, and the client-side
// summary/unset attribute translations.

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

// parse_create_requires_protocol_and_action ensures the two value
// enums are mandatory.
#[test]
fn parse_create_requires_protocol_and_action() {
    let result = Cmd::try_parse_from(["firewall-rule", "create", "--protocol", "tcp"]);
    assert!(result.is_err(), "should fail without --action");

    let cmd = Cmd::try_parse_from([
        "firewall-rule",
        "create",
        "--protocol",
        "tcp",
        "--action",
        "allow",
    ])
    .expect("should parse create");
    assert!(matches!(cmd, Cmd::Create(_)));
}

// parse_create_rejects_unknown_protocol ensures the protocol choices
// are closed.
#[test]
fn parse_create_rejects_unknown_protocol() {
    let result = Cmd::try_parse_from([
        "firewall-rule",
        "create",
        "--protocol",
        "sctp",
        "--action",
        "allow",
    ]);
    assert!(result.is_err(), "unknown protocol should fail");
}

// parse_create_enabled_conflict ensures --enabled and --disabled are
// mutually exclusive.
#[test]
fn parse_create_enabled_conflict() {
    let result = Cmd::try_parse_from([
        "firewall-rule",
        "create",
        "--protocol",
        "any",
        "--action",
        "deny",
        "--enabled",
        "--disabled",
    ]);
    assert!(result.is_err(), "conflicting enable flags should fail");
}

// summary_renders_populated_endpoints pins the exact summary text for
// a fully populated rule.
#[test]
fn summary_renders_populated_endpoints() {
    let mut records = vec![record(json!({
        "protocol": "tcp",
        "source_ip_address": "192.168.1.0/24",
        "source_port": "80",
        "destination_ip_address": null,
        "destination_port": null,
        "action": "allow",
    }))];
    common::extend_with_summary(&mut records);
    assert_eq!(
        records[0].get("summary"),
        Some(&json!(
            "TCP,\n source: 192.168.1.0/24(80),\n dest: none specified(none specified),\n allow"
        ))
    );
}

// summary_renders_missing_fields pins the placeholders used when the
// record carries none of the optional fields.
#[test]
fn summary_renders_missing_fields() {
    let mut records = vec![record(json!({"id": "r1"}))];
    common::extend_with_summary(&mut records);
    assert_eq!(
        records[0].get("summary"),
        Some(&json!(
            "no-protocol,\n source: none specified,\n dest: none specified,\n no-action"
        ))
    );
}

// summary_renders_numeric_ports ensures ports returned as numbers
// still render inside the endpoint part.
#[test]
fn summary_renders_numeric_ports() {
    let mut records = vec![record(json!({
        "protocol": "udp",
        "source_ip_address": "10.0.0.0/8",
        "source_port": 53,
        "destination_ip_address": "10.1.0.0/16",
        "destination_port": 53,
        "action": "reject",
    }))];
    common::extend_with_summary(&mut records);
    assert_eq!(
        records[0].get("summary"),
        Some(&json!(
            "UDP,\n source: 10.0.0.0/8(53),\n dest: 10.1.0.0/16(53),\n reject"
        ))
    );
}

// unset_clears_the_destination_firewall_group pins the corrected flag
// mapping: the destination flag must clear the destination attribute
// even when the source flag is absent.
#[test]
fn unset_clears_the_destination_firewall_group() {
    let cmd = Cmd::try_parse_from([
        "firewall-rule",
        "unset",
        "rule1",
        "--destination-firewall-group",
    ])
    .expect("should parse unset");

    let Cmd::Unset(args) = cmd else {
        panic!("expected Unset variant");
    };
    let attrs = unset::cleared_attributes(&args);
    assert_eq!(
        attrs.get("destination_firewall_group_id"),
        Some(&Value::Null)
    );
    assert!(!attrs.contains_key("source_firewall_group_id"));
}

// unset_maps_each_flag_to_its_attribute spot-checks the remaining
// flag translations.
#[test]
fn unset_maps_each_flag_to_its_attribute() {
    let cmd = Cmd::try_parse_from([
        "firewall-rule",
        "unset",
        "rule1",
        "--source-ip-address",
        "--share",
        "--enable-rule",
    ])
    .expect("should parse unset");

    let Cmd::Unset(args) = cmd else {
        panic!("expected Unset variant");
    };
    let attrs = unset::cleared_attributes(&args);
    assert_eq!(attrs.get("source_ip_address"), Some(&Value::Null));
    assert_eq!(attrs.get("shared"), Some(&json!(false)));
    assert_eq!(attrs.get("enabled"), Some(&json!(false)));
    assert!(!attrs.contains_key("destination_ip_address"));
}
