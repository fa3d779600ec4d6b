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
    #[clap(help = "Name or ID of the port to update")]
    pub port: String,

    #[clap(long, help = "New name for the port")]
    pub name: Option<String>,

    #[clap(long, help = "New description for the port")]
    pub description: Option<String>,

    #[clap(
        long,
        conflicts_with = "admin_state_down",
        help = "Administratively enable the port"
    )]
    pub admin_state_up: bool,

    #[clap(long, help = "Administratively disable the port")]
    pub admin_state_down: bool,

    #[clap(long, help = "New device ID for the port")]
    pub device_id: Option<String>,

    #[clap(long, help = "New device owner for the port")]
    pub device_owner: Option<String>,

    #[clap(long = "security-group", conflicts_with = "no_security_groups")]
    #[clap(help = "Security group ID for the port (repeat to replace with several)")]
    pub security_groups: Vec<String>,

    #[clap(long, help = "Detach the port from all security groups")]
    pub no_security_groups: bool,

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
    if let Some(device_id) = args.device_id {
        attrs.insert("device_id".to_string(), Value::String(device_id));
    }
    if let Some(device_owner) = args.device_owner {
        attrs.insert("device_owner".to_string(), Value::String(device_owner));
    }
    if !args.security_groups.is_empty() {
        attrs.insert(
            "security_groups".to_string(),
            Value::Array(args.security_groups.into_iter().map(Value::String).collect()),
        );
    }
    if args.no_security_groups {
        attrs.insert("security_groups".to_string(), Value::Array(Vec::new()));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(ctx.transport.as_ref(), &SPEC);
    api.update(&args.port, attrs).await?;
    println!("Updated port '{}'.", args.port);
    Ok(())
}
