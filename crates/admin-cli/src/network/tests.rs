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
// command, including things like basic structure parsing and
// required/optional argument combinations.

use clap::{CommandFactory, Parser};

use super::*;

// verify_cmd_structure runs a baseline clap debug_assert() to do
// basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_create_with_flags ensures create parses its recognized flags.
#[test]
fn parse_create_with_flags() {
    let cmd = Cmd::try_parse_from([
        "network",
        "create",
        "net1",
        "--shared",
        "--admin-state-down",
        "--tenant-id",
        "tenant-1",
    ])
    .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.name, "net1");
            assert!(args.shared);
            assert!(args.admin_state_down);
            assert_eq!(args.tenant_id, Some("tenant-1".to_string()));
            assert!(args.extra.is_empty());
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_collects_the_extra_tail ensures tokens after `--`
// land in the ad hoc attribute tail untouched.
#[test]
fn parse_create_collects_the_extra_tail() {
    let cmd = Cmd::try_parse_from([
        "network", "create", "net1", "--", "--mtu", "type=int", "1450",
    ])
    .expect("should parse create with tail");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.extra, vec!["--mtu", "type=int", "1450"]);
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_requires_a_name ensures create fails without the
// positional name.
#[test]
fn parse_create_requires_a_name() {
    let result = Cmd::try_parse_from(["network", "create"]);
    assert!(result.is_err(), "should fail without a name");
}

// parse_update_rejects_share_conflict ensures --share and --no-share
// are mutually exclusive.
#[test]
fn parse_update_rejects_share_conflict() {
    let result = Cmd::try_parse_from(["network", "update", "net1", "--share", "--no-share"]);
    assert!(result.is_err(), "conflicting share flags should fail");
}

// parse_update_rejects_admin_state_conflict ensures the admin state
// flag pair is mutually exclusive.
#[test]
fn parse_update_rejects_admin_state_conflict() {
    let result = Cmd::try_parse_from([
        "network",
        "update",
        "net1",
        "--admin-state-up",
        "--admin-state-down",
    ]);
    assert!(result.is_err(), "conflicting admin state flags should fail");
}

// parse_delete_accepts_multiple_targets ensures delete takes a list.
#[test]
fn parse_delete_accepts_multiple_targets() {
    let cmd =
        Cmd::try_parse_from(["network", "delete", "a", "b", "c"]).expect("should parse delete");

    match cmd {
        Cmd::Delete(args) => assert_eq!(args.networks, vec!["a", "b", "c"]),
        _ => panic!("expected Delete variant"),
    }
}

// parse_delete_requires_a_target ensures delete fails with no targets.
#[test]
fn parse_delete_requires_a_target() {
    let result = Cmd::try_parse_from(["network", "delete"]);
    assert!(result.is_err(), "should fail without targets");
}

// parse_list_long ensures list accepts the --long toggle and filters.
#[test]
fn parse_list_long() {
    let cmd = Cmd::try_parse_from(["network", "list", "--long", "--name", "public"])
        .expect("should parse list");

    match cmd {
        Cmd::List(args) => {
            assert!(args.long);
            assert_eq!(args.name, Some("public".to_string()));
        }
        _ => panic!("expected List variant"),
    }
}
