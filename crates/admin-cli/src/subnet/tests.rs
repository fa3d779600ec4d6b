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

// parse_create_takes_network_and_cidr ensures the two positionals
// are required and ordered.
#[test]
fn parse_create_takes_network_and_cidr() {
    let cmd = Cmd::try_parse_from(["subnet", "create", "net1", "10.0.0.0/24"])
        .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.network, "net1");
            assert_eq!(args.cidr, "10.0.0.0/24");
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_ip_version_choices ensures only 4 and 6 are accepted.
#[test]
fn parse_create_ip_version_choices() {
    let cmd = Cmd::try_parse_from([
        "subnet",
        "create",
        "net1",
        "fd00::/64",
        "--ip-version",
        "6",
    ])
    .expect("should parse ip version 6");
    assert!(matches!(cmd, Cmd::Create(_)));

    let result = Cmd::try_parse_from([
        "subnet",
        "create",
        "net1",
        "10.0.0.0/24",
        "--ip-version",
        "5",
    ]);
    assert!(result.is_err(), "ip version 5 should be rejected");
}

// parse_create_repeated_dict_flags ensures the dict-shaped flags
// accumulate per occurrence.
#[test]
fn parse_create_repeated_dict_flags() {
    let cmd = Cmd::try_parse_from([
        "subnet",
        "create",
        "net1",
        "10.0.0.0/24",
        "--allocation-pool",
        "start=10.0.0.2,end=10.0.0.20",
        "--allocation-pool",
        "start=10.0.0.30,end=10.0.0.40",
        "--dns-nameserver",
        "8.8.8.8",
    ])
    .expect("should parse dict flags");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.allocation_pools.len(), 2);
            assert_eq!(args.dns_nameservers, vec!["8.8.8.8"]);
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_gateway_conflict ensures --gateway and --no-gateway
// are mutually exclusive.
#[test]
fn parse_create_gateway_conflict() {
    let result = Cmd::try_parse_from([
        "subnet",
        "create",
        "net1",
        "10.0.0.0/24",
        "--gateway",
        "10.0.0.1",
        "--no-gateway",
    ]);
    assert!(result.is_err(), "conflicting gateway flags should fail");
}

// parse_update_dhcp_conflict ensures the DHCP flag pair is mutually
// exclusive.
#[test]
fn parse_update_dhcp_conflict() {
    let result =
        Cmd::try_parse_from(["subnet", "update", "s1", "--enable-dhcp", "--disable-dhcp"]);
    assert!(result.is_err(), "conflicting dhcp flags should fail");
}

// parse_list_filters ensures list accepts the recognized filters.
#[test]
fn parse_list_filters() {
    let cmd = Cmd::try_parse_from(["subnet", "list", "--network-id", "abc", "-l"])
        .expect("should parse list");

    match cmd {
        Cmd::List(args) => {
            assert!(args.long);
            assert_eq!(args.network_id, Some("abc".to_string()));
        }
        _ => panic!("expected List variant"),
    }
}
