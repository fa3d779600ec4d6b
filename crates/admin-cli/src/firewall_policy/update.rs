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

use super::common::{resolve_rules, SPEC};
use crate::argspec;
use crate::cfg::runtime::RuntimeContext;

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(help = "Name or ID of the firewall policy to update")]
    pub firewall_policy: String,

    #[clap(long, help = "New name for the firewall policy")]
    pub name: Option<String>,

    #[clap(long, help = "New description for the firewall policy")]
    pub description: Option<String>,

    #[clap(long = "firewall-rule", conflicts_with = "no_rules", value_name = "FIREWALL_RULE")]
    #[clap(help = "Replace the rule list, by name or ID in match order (repeat to set several)")]
    pub firewall_rules: Vec<String>,

    #[clap(long, help = "Remove all rules from the policy")]
    pub no_rules: bool,

    #[clap(long, conflicts_with = "no_audited", help = "Mark the policy as audited")]
    pub audited: bool,

    #[clap(long, help = "Clear the audited mark")]
    pub no_audited: bool,

    #[clap(
        last = true,
        help = "Additional attributes: --key [type=int|bool|dict] [list=true] value [value ...]"
    )]
    pub extra: Vec<String>,
}

pub async fn update(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let transport = ctx.transport.as_ref();

    let mut attrs = Record::new();
    if let Some(name) = args.name {
        attrs.insert("name".to_string(), Value::String(name));
    }
    if let Some(description) = args.description {
        attrs.insert("description".to_string(), Value::String(description));
    }
    if !args.firewall_rules.is_empty() {
        attrs.insert(
            "firewall_rules".to_string(),
            resolve_rules(transport, &args.firewall_rules).await?,
        );
    }
    if args.no_rules {
        attrs.insert("firewall_rules".to_string(), Value::Array(Vec::new()));
    }
    if args.audited {
        attrs.insert("audited".to_string(), Value::Bool(true));
    }
    if args.no_audited {
        attrs.insert("audited".to_string(), Value::Bool(false));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(transport, &SPEC);
    api.update(&args.firewall_policy, attrs).await?;
    println!("Updated firewall policy '{}'.", args.firewall_policy);
    Ok(())
}
