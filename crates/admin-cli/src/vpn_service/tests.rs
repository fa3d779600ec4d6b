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

// parse_create_requires_a_router ensures the router positional is
// mandatory and the subnet reference stays optional.
#[test]
fn parse_create_requires_a_router() {
    let result = Cmd::try_parse_from(["vpn-service", "create"]);
    assert!(result.is_err(), "should fail without a router");

    let cmd = Cmd::try_parse_from(["vpn-service", "create", "r1", "--subnet", "s1"])
        .expect("should parse create");
    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.router, "r1");
            assert_eq!(args.subnet, Some("s1".to_string()));
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_list_router_filter ensures list accepts the router filter.
#[test]
fn parse_list_router_filter() {
    let cmd = Cmd::try_parse_from(["vpn-service", "list", "--router-id", "r-1"])
        .expect("should parse list");

    match cmd {
        Cmd::List(args) => assert_eq!(args.router_id, Some("r-1".to_string())),
        _ => panic!("expected List variant"),
    }
}
