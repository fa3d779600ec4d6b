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

const TEST_BGPVPN_ID: &str = "00000000-0000-0000-0000-000000000001";

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_create_type_choices ensures only l2/l3 are accepted and l3 is
// the default.
#[test]
fn parse_create_type_choices() {
    let cmd = Cmd::try_parse_from(["bgpvpn", "create", "--name", "vpn1"])
        .expect("should parse create");
    match cmd {
        Cmd::Create(args) => assert!(matches!(args.bgpvpn_type, create::BgpvpnType::L3)),
        _ => panic!("expected Create variant"),
    }

    let result = Cmd::try_parse_from(["bgpvpn", "create", "--type", "l4"]);
    assert!(result.is_err(), "unknown type should fail");
}

// parse_create_collects_route_targets ensures the repeated target
// flags accumulate.
#[test]
fn parse_create_collects_route_targets() {
    let cmd = Cmd::try_parse_from([
        "bgpvpn",
        "create",
        "--route-target",
        "64512:1",
        "--route-target",
        "64512:2",
        "--import-target",
        "64512:3",
    ])
    .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.route_targets, vec!["64512:1", "64512:2"]);
            assert_eq!(args.import_targets, vec!["64512:3"]);
        }
        _ => panic!("expected Create variant"),
    }
}

// assoc_spec_nests_under_the_owning_bgpvpn pins the nested collection
// paths both association kinds produce.
#[test]
fn assoc_spec_nests_under_the_owning_bgpvpn() {
    let spec = assoc::NETWORK_ASSOC.spec(TEST_BGPVPN_ID);
    assert_eq!(
        spec.collection.as_ref(),
        format!("bgpvpn/bgpvpns/{TEST_BGPVPN_ID}/network_associations")
    );
    assert!(!spec.allow_name_lookup);

    let spec = assoc::ROUTER_ASSOC.spec(TEST_BGPVPN_ID);
    assert_eq!(
        spec.collection.as_ref(),
        format!("bgpvpn/bgpvpns/{TEST_BGPVPN_ID}/router_associations")
    );
    assert_eq!(spec.singular, "router_association");
}

// parse_net_assoc_create ensures the nested association subcommands
// parse their positionals.
#[test]
fn parse_net_assoc_create() {
    let cmd = Cmd::try_parse_from(["bgpvpn", "net-assoc", "create", "vpn1", "net1"])
        .expect("should parse net-assoc create");

    match cmd {
        Cmd::NetAssoc(assoc::NetAssocCmd::Create(args)) => {
            assert_eq!(args.bgpvpn, "vpn1");
            assert_eq!(args.resource, "net1");
        }
        _ => panic!("expected NetAssoc Create variant"),
    }
}

// parse_router_assoc_delete_takes_many ensures association deletes
// accept several IDs.
#[test]
fn parse_router_assoc_delete_takes_many() {
    let cmd = Cmd::try_parse_from(["bgpvpn", "router-assoc", "delete", "vpn1", "a1", "a2"])
        .expect("should parse router-assoc delete");

    match cmd {
        Cmd::RouterAssoc(assoc::RouterAssocCmd::Delete(args)) => {
            assert_eq!(args.associations, vec!["a1", "a2"]);
        }
        _ => panic!("expected RouterAssoc Delete variant"),
    }
}
