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

// parse_create_with_topology_flags ensures the distributed/ha flags
// parse alongside the name.
#[test]
fn parse_create_with_topology_flags() {
    let cmd = Cmd::try_parse_from(["router", "create", "r1", "--distributed", "--ha"])
        .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.name, "r1");
            assert!(args.distributed);
            assert!(args.ha);
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_update_admin_state_conflict ensures the admin state flag pair
// is mutually exclusive.
#[test]
fn parse_update_admin_state_conflict() {
    let result = Cmd::try_parse_from([
        "router",
        "update",
        "r1",
        "--admin-state-up",
        "--admin-state-down",
    ]);
    assert!(result.is_err(), "conflicting admin state flags should fail");
}

// parse_show_takes_name_or_id ensures show takes one positional.
#[test]
fn parse_show_takes_name_or_id() {
    let cmd = Cmd::try_parse_from(["router", "show", "r1"]).expect("should parse show");

    match cmd {
        Cmd::Show(args) => assert_eq!(args.router, "r1"),
        _ => panic!("expected Show variant"),
    }
}
