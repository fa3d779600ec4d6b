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

// parse_create_with_fixed_ips ensures the --fixed-ip flag repeats.
#[test]
fn parse_create_with_fixed_ips() {
    let cmd = Cmd::try_parse_from([
        "port",
        "create",
        "net1",
        "--fixed-ip",
        "subnet_id=sub1,ip_address=10.0.0.5",
        "--fixed-ip",
        "subnet_id=sub2,ip_address=10.0.1.5",
    ])
    .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.network, "net1");
            assert_eq!(args.fixed_ips.len(), 2);
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_update_security_group_conflict ensures replacing and clearing
// security groups are mutually exclusive.
#[test]
fn parse_update_security_group_conflict() {
    let result = Cmd::try_parse_from([
        "port",
        "update",
        "p1",
        "--security-group",
        "sg1",
        "--no-security-groups",
    ]);
    assert!(result.is_err(), "conflicting security group flags should fail");
}

// parse_update_admin_state_conflict ensures the admin state flag pair
// is mutually exclusive.
#[test]
fn parse_update_admin_state_conflict() {
    let result = Cmd::try_parse_from([
        "port",
        "update",
        "p1",
        "--admin-state-up",
        "--admin-state-down",
    ]);
    assert!(result.is_err(), "conflicting admin state flags should fail");
}

// parse_list_device_filter ensures list accepts the device filter.
#[test]
fn parse_list_device_filter() {
    let cmd = Cmd::try_parse_from(["port", "list", "--device-id", "dev-1"])
        .expect("should parse list");

    match cmd {
        Cmd::List(args) => assert_eq!(args.device_id, Some("dev-1".to_string())),
        _ => panic!("expected List variant"),
    }
}
