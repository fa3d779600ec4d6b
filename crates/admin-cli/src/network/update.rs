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
    #[clap(help = "Name or ID of the network to update")]
    pub network: String,

    #[clap(long, help = "New name for the network")]
    pub name: Option<String>,

    #[clap(long, help = "New description for the network")]
    pub description: Option<String>,

    #[clap(long, conflicts_with = "no_share", help = "Share the network across tenants")]
    pub share: bool,

    #[clap(long, help = "Restrict the network to its owner tenant")]
    pub no_share: bool,

    #[clap(
        long,
        conflicts_with = "admin_state_down",
        help = "Administratively enable the network"
    )]
    pub admin_state_up: bool,

    #[clap(long, help = "Administratively disable the network")]
    pub admin_state_down: bool,

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
    if args.share {
        attrs.insert("shared".to_string(), Value::Bool(true));
    }
    if args.no_share {
        attrs.insert("shared".to_string(), Value::Bool(false));
    }
    if args.admin_state_up {
        attrs.insert("admin_state_up".to_string(), Value::Bool(true));
    }
    if args.admin_state_down {
        attrs.insert("admin_state_up".to_string(), Value::Bool(false));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(ctx.transport.as_ref(), &SPEC);
    api.update(&args.network, attrs).await?;
    println!("Updated network '{}'.", args.network);
    Ok(())
}
