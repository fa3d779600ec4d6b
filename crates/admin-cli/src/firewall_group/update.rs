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

use clap::Parser;
use neutron_client::resource::{merge_attributes, Record, ResourceApi};
use neutron_client::NeutronCliResult;
use serde_json::Value;

use super::common::{resolve_ports, SPEC};
use crate::argspec;
use crate::cfg::runtime::RuntimeContext;
use crate::firewall_policy;

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(help = "Name or ID of the firewall group to update")]
    pub firewall_group: String,

    #[clap(long, help = "New name for the firewall group")]
    pub name: Option<String>,

    #[clap(long, help = "New description for the firewall group")]
    pub description: Option<String>,

    #[clap(long, conflicts_with = "no_ingress_firewall_policy")]
    #[clap(help = "Name or ID of the policy applied to ingress traffic")]
    pub ingress_firewall_policy: Option<String>,

    #[clap(long, help = "Detach the ingress policy")]
    pub no_ingress_firewall_policy: bool,

    #[clap(long, conflicts_with = "no_egress_firewall_policy")]
    #[clap(help = "Name or ID of the policy applied to egress traffic")]
    pub egress_firewall_policy: Option<String>,

    #[clap(long, help = "Detach the egress policy")]
    pub no_egress_firewall_policy: bool,

    #[clap(long = "port", conflicts_with = "no_ports", value_name = "PORT")]
    #[clap(help = "Replace the port list, by name or ID (repeat to set several)")]
    pub ports: Vec<String>,

    #[clap(long, help = "Detach the firewall group from all ports")]
    pub no_ports: bool,

    #[clap(
        long,
        conflicts_with = "admin_state_down",
        help = "Administratively enable the firewall group"
    )]
    pub admin_state_up: bool,

    #[clap(long, help = "Administratively disable the firewall group")]
    pub admin_state_down: bool,

    #[clap(
        last = true,
        help = "Additional attributes: --key [type=int|bool|dict] [list=true] value [value ...]"
    )]
    pub extra: Vec<String>,
}

pub async fn update(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let transport = ctx.transport.as_ref();
    let policy_api = ResourceApi::new(transport, &firewall_policy::common::SPEC);

    let mut attrs = Record::new();
    if let Some(name) = args.name {
        attrs.insert("name".to_string(), Value::String(name));
    }
    if let Some(description) = args.description {
        attrs.insert("description".to_string(), Value::String(description));
    }
    if let Some(policy) = args.ingress_firewall_policy {
        attrs.insert(
            "ingress_firewall_policy_id".to_string(),
            Value::String(policy_api.resolve(&policy).await?),
        );
    }
    if args.no_ingress_firewall_policy {
        attrs.insert("ingress_firewall_policy_id".to_string(), Value::Null);
    }
    if let Some(policy) = args.egress_firewall_policy {
        attrs.insert(
            "egress_firewall_policy_id".to_string(),
            Value::String(policy_api.resolve(&policy).await?),
        );
    }
    if args.no_egress_firewall_policy {
        attrs.insert("egress_firewall_policy_id".to_string(), Value::Null);
    }
    if !args.ports.is_empty() {
        attrs.insert("ports".to_string(), resolve_ports(transport, &args.ports).await?);
    }
    if args.no_ports {
        attrs.insert("ports".to_string(), Value::Array(Vec::new()));
    }
    if args.admin_state_up {
        attrs.insert("admin_state_up".to_string(), Value::Bool(true));
    }
    if args.admin_state_down {
        attrs.insert("admin_state_up".to_string(), Value::Bool(false));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(transport, &SPEC);
    api.update(&args.firewall_group, attrs).await?;
    println!("Updated firewall group '{}'.", args.firewall_group);
    Ok(())
}
