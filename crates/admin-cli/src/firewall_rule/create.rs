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

use clap::{Parser, ValueEnum};
use neutron_client::output::print_record;
use neutron_client::resource::{merge_attributes, Record, ResourceApi};
use neutron_client::NeutronCliResult;
use serde_json::Value;

use super::common::SPEC;
use crate::argspec;
use crate::cfg::runtime::RuntimeContext;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
    Any,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum RuleAction {
    Allow,
    Deny,
    Reject,
}

impl RuleAction {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleAction::Allow => "allow",
            RuleAction::Deny => "deny",
            RuleAction::Reject => "reject",
        }
    }
}

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(long, help = "Name of the firewall rule")]
    pub name: Option<String>,

    #[clap(long, help = "Description of the firewall rule")]
    pub description: Option<String>,

    #[clap(long, help = "Owner tenant ID of the firewall rule")]
    pub tenant_id: Option<String>,

    #[clap(long, value_enum, help = "Protocol matched by the rule")]
    pub protocol: Protocol,

    #[clap(long, value_enum, help = "Action applied on a match")]
    pub action: RuleAction,

    #[clap(long, value_enum, default_value = "4", help = "IP version matched by the rule")]
    pub ip_version: crate::subnet::common::IpVersion,

    #[clap(long, help = "Source IP address or CIDR matched by the rule")]
    pub source_ip_address: Option<String>,

    #[clap(long, help = "Destination IP address or CIDR matched by the rule")]
    pub destination_ip_address: Option<String>,

    #[clap(long, help = "Source port or port range (e.g. 80 or 8000:8080)")]
    pub source_port: Option<String>,

    #[clap(long, help = "Destination port or port range (e.g. 80 or 8000:8080)")]
    pub destination_port: Option<String>,

    #[clap(long, conflicts_with = "disabled", help = "Enable the rule (default)")]
    pub enabled: bool,

    #[clap(long, help = "Create the rule disabled")]
    pub disabled: bool,

    #[clap(long, help = "Share the rule across tenants")]
    pub shared: bool,

    #[clap(
        last = true,
        help = "Additional attributes: --key [type=int|bool|dict] [list=true] value [value ...]"
    )]
    pub extra: Vec<String>,
}

pub async fn create(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let mut attrs = Record::new();
    // The API represents "any protocol" as an explicit null.
    let protocol = match args.protocol {
        Protocol::Any => Value::Null,
        Protocol::Tcp => Value::String("tcp".to_string()),
        Protocol::Udp => Value::String("udp".to_string()),
        Protocol::Icmp => Value::String("icmp".to_string()),
    };
    attrs.insert("protocol".to_string(), protocol);
    attrs.insert(
        "action".to_string(),
        Value::String(args.action.as_str().to_string()),
    );
    attrs.insert(
        "ip_version".to_string(),
        Value::from(args.ip_version.as_number()),
    );
    attrs.insert("enabled".to_string(), Value::Bool(!args.disabled));
    if let Some(name) = args.name {
        attrs.insert("name".to_string(), Value::String(name));
    }
    if let Some(description) = args.description {
        attrs.insert("description".to_string(), Value::String(description));
    }
    if let Some(tenant_id) = args.tenant_id {
        attrs.insert("tenant_id".to_string(), Value::String(tenant_id));
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
    if args.shared {
        attrs.insert("shared".to_string(), Value::Bool(true));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(ctx.transport.as_ref(), &SPEC);
    let rule = api.create(attrs).await?;
    print_record(&rule, ctx.format)
}
