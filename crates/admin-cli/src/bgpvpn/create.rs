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
pub enum BgpvpnType {
    L2,
    L3,
}

impl BgpvpnType {
    fn as_str(self) -> &'static str {
        match self {
            BgpvpnType::L2 => "l2",
            BgpvpnType::L3 => "l3",
        }
    }
}

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(long, help = "Name of the BGP VPN")]
    pub name: Option<String>,

    #[clap(long = "type", value_enum, default_value = "l3", help = "Forwarding type of the BGP VPN")]
    pub bgpvpn_type: BgpvpnType,

    #[clap(long, help = "Owner tenant ID of the BGP VPN")]
    pub tenant_id: Option<String>,

    #[clap(long = "route-target", value_name = "RT")]
    #[clap(help = "Route target importing and exporting routes (repeat to set several)")]
    pub route_targets: Vec<String>,

    #[clap(long = "import-target", value_name = "RT")]
    #[clap(help = "Additional route target importing routes (repeat to set several)")]
    pub import_targets: Vec<String>,

    #[clap(long = "export-target", value_name = "RT")]
    #[clap(help = "Additional route target exporting routes (repeat to set several)")]
    pub export_targets: Vec<String>,

    #[clap(long = "route-distinguisher", value_name = "RD")]
    #[clap(help = "Route distinguisher candidate (repeat to set several)")]
    pub route_distinguishers: Vec<String>,

    #[clap(
        last = true,
        help = "Additional attributes: --key [type=int|bool|dict] [list=true] value [value ...]"
    )]
    pub extra: Vec<String>,
}

fn string_list(values: Vec<String>) -> Value {
    Value::Array(values.into_iter().map(Value::String).collect())
}

pub async fn create(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let mut attrs = Record::new();
    attrs.insert(
        "type".to_string(),
        Value::String(args.bgpvpn_type.as_str().to_string()),
    );
    if let Some(name) = args.name {
        attrs.insert("name".to_string(), Value::String(name));
    }
    if let Some(tenant_id) = args.tenant_id {
        attrs.insert("tenant_id".to_string(), Value::String(tenant_id));
    }
    if !args.route_targets.is_empty() {
        attrs.insert("route_targets".to_string(), string_list(args.route_targets));
    }
    if !args.import_targets.is_empty() {
        attrs.insert("import_targets".to_string(), string_list(args.import_targets));
    }
    if !args.export_targets.is_empty() {
        attrs.insert("export_targets".to_string(), string_list(args.export_targets));
    }
    if !args.route_distinguishers.is_empty() {
        attrs.insert(
            "route_distinguishers".to_string(),
            string_list(args.route_distinguishers),
        );
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(ctx.transport.as_ref(), &SPEC);
    let bgpvpn = api.create(attrs).await?;
    print_record(&bgpvpn, ctx.format)
}
