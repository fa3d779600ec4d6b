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

use super::common::{build_subports, SPEC};
use crate::argspec;
use crate::cfg::runtime::RuntimeContext;
use crate::port;

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(help = "Name of the trunk to create")]
    pub name: String,

    #[clap(long, help = "Name or ID of the parent port of the trunk")]
    pub parent_port: String,

    #[clap(long = "subport", value_name = "port=PORT,segmentation-type=TYPE,segmentation-id=ID")]
    #[clap(help = "Subport carried by the trunk (repeat to set several)")]
    pub subports: Vec<String>,

    #[clap(long, help = "Owner tenant ID of the trunk")]
    pub tenant_id: Option<String>,

    #[clap(long, help = "Create the trunk administratively down")]
    pub admin_state_down: bool,

    #[clap(long, help = "Description of the trunk")]
    pub description: Option<String>,

    #[clap(
        last = true,
        help = "Additional attributes: --key [type=int|bool|dict] [list=true] value [value ...]"
    )]
    pub extra: Vec<String>,
}

pub async fn create(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let transport = ctx.transport.as_ref();
    let parent_id = ResourceApi::new(transport, &port::common::SPEC)
        .resolve(&args.parent_port)
        .await?;

    let mut attrs = Record::new();
    attrs.insert("name".to_string(), Value::String(args.name));
    attrs.insert("port_id".to_string(), Value::String(parent_id));
    attrs.insert(
        "admin_state_up".to_string(),
        Value::Bool(!args.admin_state_down),
    );
    if !args.subports.is_empty() {
        attrs.insert(
            "sub_ports".to_string(),
            build_subports(transport, &args.subports).await?,
        );
    }
    if let Some(tenant_id) = args.tenant_id {
        attrs.insert("tenant_id".to_string(), Value::String(tenant_id));
    }
    if let Some(description) = args.description {
        attrs.insert("description".to_string(), Value::String(description));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(transport, &SPEC);
    let trunk = api.create(attrs).await?;
    print_record(&trunk, ctx.format)
}
