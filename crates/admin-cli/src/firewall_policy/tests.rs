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

// parse_create_collects_rules_in_order ensures the repeated rule flag
// keeps its input order.
#[test]
fn parse_create_collects_rules_in_order() {
    let cmd = Cmd::try_parse_from([
        "firewall-policy",
        "create",
        "policy1",
        "--firewall-rule",
        "deny-all",
        "--firewall-rule",
        "allow-web",
    ])
    .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.name, "policy1");
            assert_eq!(args.firewall_rules, vec!["deny-all", "allow-web"]);
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_update_rules_conflict ensures replacing and clearing the rule
// list are mutually exclusive.
#[test]
fn parse_update_rules_conflict() {
    let result = Cmd::try_parse_from([
        "firewall-policy",
        "update",
        "policy1",
        "--firewall-rule",
        "r1",
        "--no-rules",
    ]);
    assert!(result.is_err(), "conflicting rule flags should fail");
}

// parse_update_audited_conflict ensures the audited flag pair is
// mutually exclusive.
#[test]
fn parse_update_audited_conflict() {
    let result = Cmd::try_parse_from([
        "firewall-policy",
        "update",
        "policy1",
        "--audited",
        "--no-audited",
    ]);
    assert!(result.is_err(), "conflicting audited flags should fail");
}
