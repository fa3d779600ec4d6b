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

use super::common::SPEC;
use crate::argspec;
use crate::cfg::runtime::RuntimeContext;
use crate::network;

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(help = "Name or ID of the network the port belongs to")]
    pub network: String,

    #[clap(long, help = "Name of the port")]
    pub name: Option<String>,

    #[clap(long, help = "Owner tenant ID of the port")]
    pub tenant_id: Option<String>,

    #[clap(long, help = "Create the port administratively down")]
    pub admin_state_down: bool,

    #[clap(long, help = "MAC address of the port")]
    pub mac_address: Option<String>,

    #[clap(long = "fixed-ip", value_name = "subnet_id=SUBNET,ip_address=IP")]
    #[clap(help = "Fixed IP assignment for the port (repeat to set several)")]
    pub fixed_ips: Vec<String>,

    #[clap(long, help = "Device ID attached to the port")]
    pub device_id: Option<String>,

    #[clap(long, help = "Device owner of the port")]
    pub device_owner: Option<String>,

    #[clap(long = "security-group", value_name = "SECURITY_GROUP")]
    #[clap(help = "Security group ID for the port (repeat to set several)")]
    pub security_groups: Vec<String>,

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
    attrs.insert(
        "admin_state_up".to_string(),
        Value::Bool(!args.admin_state_down),
    );
    if let Some(name) = args.name {
        attrs.insert("name".to_string(), Value::String(name));
    }
    if let Some(tenant_id) = args.tenant_id {
        attrs.insert("tenant_id".to_string(), Value::String(tenant_id));
    }
    if let Some(mac_address) = args.mac_address {
        attrs.insert("mac_address".to_string(), Value::String(mac_address));
    }
    if !args.fixed_ips.is_empty() {
        let mut entries = Vec::with_capacity(args.fixed_ips.len());
        for token in &args.fixed_ips {
            entries.push(Value::Object(argspec::parse_pairs(token)?));
        }
        attrs.insert("fixed_ips".to_string(), Value::Array(entries));
    }
    if let Some(device_id) = args.device_id {
        attrs.insert("device_id".to_string(), Value::String(device_id));
    }
    if let Some(device_owner) = args.device_owner {
        attrs.insert("device_owner".to_string(), Value::String(device_owner));
    }
    if !args.security_groups.is_empty() {
        attrs.insert(
            "security_groups".to_string(),
            Value::Array(args.security_groups.into_iter().map(Value::String).collect()),
        );
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(transport, &SPEC);
    let port = api.create(attrs).await?;
    print_record(&port, ctx.format)
}
