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
use crate::argspec;
use crate::cfg::runtime::RuntimeContext;

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(help = "Name or ID of the BGP VPN to update")]
    pub bgpvpn: String,

    #[clap(long, help = "New name for the BGP VPN")]
    pub name: Option<String>,

    #[clap(long = "route-target", conflicts_with = "no_route_targets", value_name = "RT")]
    #[clap(help = "Replace the route target list (repeat to set several)")]
    pub route_targets: Vec<String>,

    #[clap(long, help = "Clear all route targets")]
    pub no_route_targets: bool,

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
    if !args.route_targets.is_empty() {
        attrs.insert(
            "route_targets".to_string(),
            Value::Array(args.route_targets.into_iter().map(Value::String).collect()),
        );
    }
    if args.no_route_targets {
        attrs.insert("route_targets".to_string(), Value::Array(Vec::new()));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(ctx.transport.as_ref(), &SPEC);
    api.update(&args.bgpvpn, attrs).await?;
    println!("Updated bgpvpn '{}'.", args.bgpvpn);
    Ok(())
}
