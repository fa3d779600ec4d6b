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
use neutron_client::resource::{Record, ResourceApi};
use neutron_client::NeutronCliResult;
use serde_json::Value;

use super::common::SPEC;
use crate::cfg::runtime::RuntimeContext;

// Clearing an attribute means sending an explicit null (or the field's
// neutral value) for it; omitting the field would leave it untouched.
#[derive(Parser, Debug)]
pub struct Args {
    #[clap(help = "Name or ID of the firewall rule to modify")]
    pub firewall_rule: String,

    #[clap(long, help = "Clear the source IP address or CIDR")]
    pub source_ip_address: bool,

    #[clap(long, help = "Clear the destination IP address or CIDR")]
    pub destination_ip_address: bool,

    #[clap(long, help = "Clear the source port or port range")]
    pub source_port: bool,

    #[clap(long, help = "Clear the destination port or port range")]
    pub destination_port: bool,

    #[clap(long, help = "Stop sharing the rule across tenants")]
    pub share: bool,

    #[clap(long, help = "Disable the rule")]
    pub enable_rule: bool,

    #[clap(long, help = "Clear the source firewall group")]
    pub source_firewall_group: bool,

    #[clap(long, help = "Clear the destination firewall group")]
    pub destination_firewall_group: bool,
}

pub(crate) fn cleared_attributes(args: &Args) -> Record {
    let mut attrs = Record::new();
    if args.source_ip_address {
        attrs.insert("source_ip_address".to_string(), Value::Null);
    }
    if args.destination_ip_address {
        attrs.insert("destination_ip_address".to_string(), Value::Null);
    }
    if args.source_port {
        attrs.insert("source_port".to_string(), Value::Null);
    }
    if args.destination_port {
        attrs.insert("destination_port".to_string(), Value::Null);
    }
    if args.share {
        attrs.insert("shared".to_string(), Value::Bool(false));
    }
    if args.enable_rule {
        attrs.insert("enabled".to_string(), Value::Bool(false));
    }
    if args.source_firewall_group {
        attrs.insert("source_firewall_group_id".to_string(), Value::Null);
    }
    if args.destination_firewall_group {
        attrs.insert("destination_firewall_group_id".to_string(), Value::Null);
    }
    attrs
}

pub async fn unset(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let attrs = cleared_attributes(&args);
    let api = ResourceApi::new(ctx.transport.as_ref(), &SPEC);
    api.update(&args.firewall_rule, attrs).await?;
    println!("Updated firewall rule '{}'.", args.firewall_rule);
    Ok(())
}
