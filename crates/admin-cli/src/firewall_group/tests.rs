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

use super::*;

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_create_with_policies ensures both policy references parse.
#[test]
fn parse_create_with_policies() {
    let cmd = Cmd::try_parse_from([
        "firewall-group",
        "create",
        "fwg1",
        "--ingress-firewall-policy",
        "in-policy",
        "--egress-firewall-policy",
        "out-policy",
        "--port",
        "p1",
        "--port",
        "p2",
    ])
    .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.ingress_firewall_policy, Some("in-policy".to_string()));
            assert_eq!(args.egress_firewall_policy, Some("out-policy".to_string()));
            assert_eq!(args.ports, vec!["p1", "p2"]);
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_update_port_conflict ensures replacing and clearing ports are
// mutually exclusive.
#[test]
fn parse_update_port_conflict() {
    let result = Cmd::try_parse_from([
        "firewall-group",
        "update",
        "fwg1",
        "--port",
        "p1",
        "--no-ports",
    ]);
    assert!(result.is_err(), "conflicting port flags should fail");
}

// parse_update_ingress_conflict ensures attaching and detaching the
// ingress policy are mutually exclusive.
#[test]
fn parse_update_ingress_conflict() {
    let result = Cmd::try_parse_from([
        "firewall-group",
        "update",
        "fwg1",
        "--ingress-firewall-policy",
        "pol",
        "--no-ingress-firewall-policy",
    ]);
    assert!(result.is_err(), "conflicting ingress flags should fail");
}
