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

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(help = "Name of the network to create")]
    pub name: String,

    #[clap(long, help = "Owner tenant ID of the network")]
    pub tenant_id: Option<String>,

    #[clap(long, help = "Create the network administratively down")]
    pub admin_state_down: bool,

    #[clap(long, help = "Share the network across tenants")]
    pub shared: bool,

    #[clap(long, help = "Make the network externally routable")]
    pub external: bool,

    #[clap(long, help = "Description of the network")]
    pub description: Option<String>,

    #[clap(
        last = true,
        help = "Additional attributes: --key [type=int|bool|dict] [list=true] value [value ...]"
    )]
    pub extra: Vec<String>,
}

pub async fn create(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let mut attrs = Record::new();
    attrs.insert("name".to_string(), Value::String(args.name));
    attrs.insert(
        "admin_state_up".to_string(),
        Value::Bool(!args.admin_state_down),
    );
    if let Some(tenant_id) = args.tenant_id {
        attrs.insert("tenant_id".to_string(), Value::String(tenant_id));
    }
    if args.shared {
        attrs.insert("shared".to_string(), Value::Bool(true));
    }
    if args.external {
        attrs.insert("router:external".to_string(), Value::Bool(true));
    }
    if let Some(description) = args.description {
        attrs.insert("description".to_string(), Value::String(description));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(ctx.transport.as_ref(), &SPEC);
    let network = api.create(attrs).await?;
    print_record(&network, ctx.format)
}
