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

use super::common::{IpVersion, SPEC};
use crate::argspec;
use crate::cfg::runtime::RuntimeContext;
use crate::network;

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(help = "Name or ID of the network the subnet belongs to")]
    pub network: String,

    #[clap(help = "CIDR of the subnet, e.g. 10.0.0.0/24")]
    pub cidr: String,

    #[clap(long, help = "Name of the subnet")]
    pub name: Option<String>,

    #[clap(long, help = "Owner tenant ID of the subnet")]
    pub tenant_id: Option<String>,

    #[clap(long, value_enum, default_value = "4", help = "IP version of the subnet")]
    pub ip_version: IpVersion,

    #[clap(long, conflicts_with = "no_gateway", help = "Gateway IP of the subnet")]
    pub gateway: Option<String>,

    #[clap(long, help = "Create the subnet without a gateway")]
    pub no_gateway: bool,

    #[clap(long, help = "Disable DHCP on the subnet")]
    pub disable_dhcp: bool,

    #[clap(long = "dns-nameserver", value_name = "DNS_SERVER")]
    #[clap(help = "DNS name server for the subnet (repeat to set several)")]
    pub dns_nameservers: Vec<String>,

    #[clap(long = "host-route", value_name = "destination=CIDR,nexthop=IP")]
    #[clap(help = "Additional route for the subnet (repeat to set several)")]
    pub host_routes: Vec<String>,

    #[clap(long = "allocation-pool", value_name = "start=IP,end=IP")]
    #[clap(help = "Allocation pool range for the subnet (repeat to set several)")]
    pub allocation_pools: Vec<String>,

    #[clap(
        last = true,
        help = "Additional attributes: --key [type=int|bool|dict] [list=true] value [value ...]"
    )]
    pub extra: Vec<String>,
}

pub async fn create(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let transport = ctx.transport.as_ref();
    let network_id = ResourceApi::new(transport, &network::common::SPEC)
        .resolve(&args.network)
        .await?;

    let mut attrs = Record::new();
    attrs.insert("network_id".to_string(), Value::String(network_id));
    attrs.insert("cidr".to_string(), Value::String(args.cidr));
    attrs.insert(
        "ip_version".to_string(),
        Value::from(args.ip_version.as_number()),
    );
    if let Some(name) = args.name {
        attrs.insert("name".to_string(), Value::String(name));
    }
    if let Some(tenant_id) = args.tenant_id {
        attrs.insert("tenant_id".to_string(), Value::String(tenant_id));
    }
    if let Some(gateway) = args.gateway {
        attrs.insert("gateway_ip".to_string(), Value::String(gateway));
    }
    if args.no_gateway {
        attrs.insert("gateway_ip".to_string(), Value::Null);
    }
    if args.disable_dhcp {
        attrs.insert("enable_dhcp".to_string(), Value::Bool(false));
    }
    if !args.dns_nameservers.is_empty() {
        attrs.insert(
            "dns_nameservers".to_string(),
            Value::Array(args.dns_nameservers.into_iter().map(Value::String).collect()),
        );
    }
    if !args.host_routes.is_empty() {
        attrs.insert("host_routes".to_string(), parse_dict_list(&args.host_routes)?);
    }
    if !args.allocation_pools.is_empty() {
        attrs.insert(
            "allocation_pools".to_string(),
            parse_dict_list(&args.allocation_pools)?,
        );
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(transport, &SPEC);
    let subnet = api.create(attrs).await?;
    print_record(&subnet, ctx.format)
}

fn parse_dict_list(tokens: &[String]) -> NeutronCliResult<Value> {
    let mut entries = Vec::with_capacity(tokens.len());
    for token in tokens {
        entries.push(Value::Object(argspec::parse_pairs(token)?));
    }
    Ok(Value::Array(entries))
}
