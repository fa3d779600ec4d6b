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

use super::common::SPEC;
use super::create::{Protocol, RuleAction};
use crate::argspec;
use crate::cfg::runtime::RuntimeContext;

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(help = "Name or ID of the firewall rule to update")]
    pub firewall_rule: String,

    #[clap(long, help = "New name for the firewall rule")]
    pub name: Option<String>,

    #[clap(long, help = "New description for the firewall rule")]
    pub description: Option<String>,

    #[clap(long, value_enum, help = "New protocol matched by the rule")]
    pub protocol: Option<Protocol>,

    #[clap(long, value_enum, help = "New action applied on a match")]
    pub action: Option<RuleAction>,

    #[clap(long, help = "New source IP address or CIDR")]
    pub source_ip_address: Option<String>,

    #[clap(long, help = "New destination IP address or CIDR")]
    pub destination_ip_address: Option<String>,

    #[clap(long, help = "New source port or port range")]
    pub source_port: Option<String>,

    #[clap(long, help = "New destination port or port range")]
    pub destination_port: Option<String>,

    #[clap(long, conflicts_with = "disabled", help = "Enable the rule")]
    pub enabled: bool,

    #[clap(long, help = "Disable the rule")]
    pub disabled: bool,

    #[clap(
        last = true,
        help = "Additional attributes: --key [type=int|bool|dict] [list=true] value [value ...]"
    )]
    pub extra: Vec<String>,
}

pub async fn update(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let mut attrs = Record::new();
    if let Some(name) = args.name {
        attrs.insert("name".to_string(), Value::String(name));
    }
    if let Some(description) = args.description {
        attrs.insert("description".to_string(), Value::String(description));
    }
    if let Some(protocol) = args.protocol {
        let protocol = match protocol {
            Protocol::Any => Value::Null,
            Protocol::Tcp => Value::String("tcp".to_string()),
            Protocol::Udp => Value::String("udp".to_string()),
            Protocol::Icmp => Value::String("icmp".to_string()),
        };
        attrs.insert("protocol".to_string(), protocol);
    }
    if let Some(action) = args.action {
        attrs.insert(
            "action".to_string(),
            Value::String(action.as_str().to_string()),
        );
    }
    if let Some(source_ip_address) = args.source_ip_address {
        attrs.insert(
            "source_ip_address".to_string(),
            Value::String(source_ip_address),
        );
    }
    if let Some(destination_ip_address) = args.destination_ip_address {
        attrs.insert(
            "destination_ip_address".to_string(),
            Value::String(destination_ip_address),
        );
    }
    if let Some(source_port) = args.source_port {
        attrs.insert("source_port".to_string(), Value::String(source_port));
    }
    if let Some(destination_port) = args.destination_port {
        attrs.insert(
            "destination_port".to_string(),
            Value::String(destination_port),
        );
    }
    if args.enabled {
        attrs.insert("enabled".to_string(), Value::Bool(true));
    }
    if args.disabled {
        attrs.insert("enabled".to_string(), Value::Bool(false));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(ctx.transport.as_ref(), &SPEC);
    api.update(&args.firewall_rule, attrs).await?;
    println!("Updated firewall rule '{}'.", args.firewall_rule);
    Ok(())
}
