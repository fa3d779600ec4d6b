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
use neutron_client::output::print_record;
use neutron_client::resource::{merge_attributes, Record, ResourceApi};
use neutron_client::NeutronCliResult;
use serde_json::Value;

use super::common::{resolve_ports, SPEC};
use crate::argspec;
use crate::cfg::runtime::RuntimeContext;
use crate::firewall_policy;

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(help = "Name of the firewall group to create")]
    pub name: String,

    #[clap(long, help = "Description of the firewall group")]
    pub description: Option<String>,

    #[clap(long, help = "Owner tenant ID of the firewall group")]
    pub tenant_id: Option<String>,

    #[clap(long, help = "Name or ID of the policy applied to ingress traffic")]
    pub ingress_firewall_policy: Option<String>,

    #[clap(long, help = "Name or ID of the policy applied to egress traffic")]
    pub egress_firewall_policy: Option<String>,

    #[clap(long = "port", value_name = "PORT")]
    #[clap(help = "Port, by name or ID, the group applies to (repeat to set several)")]
    pub ports: Vec<String>,

    #[clap(long, help = "Create the firewall group administratively down")]
    pub admin_state_down: bool,

    #[clap(long, help = "Share the firewall group across tenants")]
    pub shared: bool,

    #[clap(
        last = true,
        help = "Additional attributes: --key [type=int|bool|dict] [list=true] value [value ...]"
    )]
    pub extra: Vec<String>,
}

pub async fn create(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let transport = ctx.transport.as_ref();
    let policy_api = ResourceApi::new(transport, &firewall_policy::common::SPEC);

    let mut attrs = Record::new();
    attrs.insert("name".to_string(), Value::String(args.name));
    attrs.insert(
        "admin_state_up".to_string(),
        Value::Bool(!args.admin_state_down),
    );
    if let Some(description) = args.description {
        attrs.insert("description".to_string(), Value::String(description));
    }
    if let Some(tenant_id) = args.tenant_id {
        attrs.insert("tenant_id".to_string(), Value::String(tenant_id));
    }
    if let Some(policy) = args.ingress_firewall_policy {
        attrs.insert(
            "ingress_firewall_policy_id".to_string(),
            Value::String(policy_api.resolve(&policy).await?),
        );
    }
    if let Some(policy) = args.egress_firewall_policy {
        attrs.insert(
            "egress_firewall_policy_id".to_string(),
            Value::String(policy_api.resolve(&policy).await?),
        );
    }
    if !args.ports.is_empty() {
        attrs.insert("ports".to_string(), resolve_ports(transport, &args.ports).await?);
    }
    if args.shared {
        attrs.insert("shared".to_string(), Value::Bool(true));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(transport, &SPEC);
    let group = api.create(attrs).await?;
    print_record(&group, ctx.format)
}
