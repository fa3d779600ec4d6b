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
use serde_json::json;

use super::*;

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_create_requires_a_parent_port ensures --parent-port is
// mandatory.
#[test]
fn parse_create_requires_a_parent_port() {
    let result = Cmd::try_parse_from(["trunk", "create", "t1"]);
    assert!(result.is_err(), "should fail without --parent-port");

    let cmd = Cmd::try_parse_from(["trunk", "create", "t1", "--parent-port", "p0"])
        .expect("should parse create");
    assert!(matches!(cmd, Cmd::Create(_)));
}

// subport_token_parses_into_api_attributes pins the dict-token to
// API-attribute translation, including the integer conversion.
#[test]
fn subport_token_parses_into_api_attributes() {
    let (port, entry) =
        common::parse_subport_token("port=p1,segmentation-type=vlan,segmentation-id=100")
            .expect("token should parse");
    assert_eq!(port, "p1");
    assert_eq!(entry.get("segmentation_type"), Some(&json!("vlan")));
    assert_eq!(entry.get("segmentation_id"), Some(&json!(100)));
}

// subport_token_requires_a_port ensures the port key is mandatory.
#[test]
fn subport_token_requires_a_port() {
    let result = common::parse_subport_token("segmentation-type=vlan,segmentation-id=100");
    assert!(result.is_err(), "should fail without a port");
}

// subport_token_rejects_unknown_keys ensures the attribute set is
// closed.
#[test]
fn subport_token_rejects_unknown_keys() {
    let result = common::parse_subport_token("port=p1,vlan=100");
    assert!(result.is_err(), "unknown key should fail");
}

// subport_token_rejects_bad_segmentation_ids ensures the integer
// conversion failure surfaces.
#[test]
fn subport_token_rejects_bad_segmentation_ids() {
    let result = common::parse_subport_token("port=p1,segmentation-id=vlan100");
    assert!(result.is_err(), "non-numeric segmentation id should fail");
}

// parse_subport_add_requires_subports ensures subport-add demands at
// least one --subport.
#[test]
fn parse_subport_add_requires_subports() {
    let result = Cmd::try_parse_from(["trunk", "subport-add", "t1"]);
    assert!(result.is_err(), "should fail without --subport");
}

// parse_subport_remove_takes_ports ensures subport-remove accepts a
// port list.
#[test]
fn parse_subport_remove_takes_ports() {
    let cmd = Cmd::try_parse_from(["trunk", "subport-remove", "t1", "p1", "p2"])
        .expect("should parse subport-remove");

    match cmd {
        Cmd::SubportRemove(args) => assert_eq!(args.ports, vec!["p1", "p2"]),
        _ => panic!("expected SubportRemove variant"),
    }
}
