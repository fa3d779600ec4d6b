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
    #[clap(help = "Name or ID of the trunk to update")]
    pub trunk: String,

    #[clap(long, help = "New name for the trunk")]
    pub name: Option<String>,

    #[clap(long, help = "New description for the trunk")]
    pub description: Option<String>,

    #[clap(
        long,
        conflicts_with = "admin_state_down",
        help = "Administratively enable the trunk"
    )]
    pub admin_state_up: bool,

    #[clap(long, help = "Administratively disable the trunk")]
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
    if args.admin_state_up {
        attrs.insert("admin_state_up".to_string(), Value::Bool(true));
    }
    if args.admin_state_down {
        attrs.insert("admin_state_up".to_string(), Value::Bool(false));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(ctx.transport.as_ref(), &SPEC);
    api.update(&args.trunk, attrs).await?;
    println!("Updated trunk '{}'.", args.trunk);
    Ok(())
}
