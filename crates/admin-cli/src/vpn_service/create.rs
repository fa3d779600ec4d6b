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
use crate::{router, subnet};

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(help = "Name or ID of the router the VPN service runs on")]
    pub router: String,

    #[clap(long, help = "Name of the VPN service")]
    pub name: Option<String>,

    #[clap(long, help = "Description of the VPN service")]
    pub description: Option<String>,

    #[clap(long, help = "Owner tenant ID of the VPN service")]
    pub tenant_id: Option<String>,

    #[clap(long, help = "Name or ID of the subnet exposed through the VPN")]
    pub subnet: Option<String>,

    #[clap(long, help = "Create the VPN service administratively down")]
    pub admin_state_down: bool,

    #[clap(
        last = true,
        help = "Additional attributes: --key [type=int|bool|dict] [list=true] value [value ...]"
    )]
    pub extra: Vec<String>,
}

pub async fn create(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let transport = ctx.transport.as_ref();
    let router_id = ResourceApi::new(transport, &router::common::SPEC)
        .resolve(&args.router)
        .await?;

    let mut attrs = Record::new();
    attrs.insert("router_id".to_string(), Value::String(router_id));
    attrs.insert(
        "admin_state_up".to_string(),
        Value::Bool(!args.admin_state_down),
    );
    if let Some(subnet) = args.subnet {
        let subnet_id = ResourceApi::new(transport, &subnet::common::SPEC)
            .resolve(&subnet)
            .await?;
        attrs.insert("subnet_id".to_string(), Value::String(subnet_id));
    }
    if let Some(name) = args.name {
        attrs.insert("name".to_string(), Value::String(name));
    }
    if let Some(description) = args.description {
        attrs.insert("description".to_string(), Value::String(description));
    }
    if let Some(tenant_id) = args.tenant_id {
        attrs.insert("tenant_id".to_string(), Value::String(tenant_id));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(transport, &SPEC);
    let service = api.create(attrs).await?;
    print_record(&service, ctx.format)
}
