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
use crate::port;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "snake_case")]
pub enum LoggedResourceType {
    SecurityGroup,
    FirewallGroup,
}

impl LoggedResourceType {
    fn as_str(self) -> &'static str {
        match self {
            LoggedResourceType::SecurityGroup => "security_group",
            LoggedResourceType::FirewallGroup => "firewall_group",
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "UPPER")]
pub enum LoggedEvent {
    All,
    Accept,
    Drop,
}

impl LoggedEvent {
    fn as_str(self) -> &'static str {
        match self {
            LoggedEvent::All => "ALL",
            LoggedEvent::Accept => "ACCEPT",
            LoggedEvent::Drop => "DROP",
        }
    }
}

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(help = "Name of the network log to create")]
    pub name: String,

    #[clap(long, value_enum, help = "Type of resource the log watches")]
    pub resource_type: LoggedResourceType,

    #[clap(long, help = "ID of the watched resource instance")]
    pub resource: Option<String>,

    #[clap(long, help = "Name or ID of the port the log is scoped to")]
    pub target: Option<String>,

    #[clap(long, value_enum, default_value = "ALL", help = "Event kind to log")]
    pub event: LoggedEvent,

    #[clap(long, conflicts_with = "disabled", help = "Create the log enabled (default)")]
    pub enabled: bool,

    #[clap(long, help = "Create the log disabled")]
    pub disabled: bool,

    #[clap(long, help = "Description of the network log")]
    pub description: Option<String>,

    #[clap(long, help = "Owner tenant ID of the network log")]
    pub tenant_id: Option<String>,

    #[clap(
        last = true,
        help = "Additional attributes: --key [type=int|bool|dict] [list=true] value [value ...]"
    )]
    pub extra: Vec<String>,
}

pub async fn create(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let transport = ctx.transport.as_ref();

    let mut attrs = Record::new();
    attrs.insert("name".to_string(), Value::String(args.name));
    attrs.insert(
        "resource_type".to_string(),
        Value::String(args.resource_type.as_str().to_string()),
    );
    attrs.insert(
        "event".to_string(),
        Value::String(args.event.as_str().to_string()),
    );
    attrs.insert("enabled".to_string(), Value::Bool(!args.disabled));
    if let Some(resource) = args.resource {
        attrs.insert("resource_id".to_string(), Value::String(resource));
    }
    if let Some(target) = args.target {
        let target_id = ResourceApi::new(transport, &port::common::SPEC)
            .resolve(&target)
            .await?;
        attrs.insert("target_id".to_string(), Value::String(target_id));
    }
    if let Some(description) = args.description {
        attrs.insert("description".to_string(), Value::String(description));
    }
    if let Some(tenant_id) = args.tenant_id {
        attrs.insert("tenant_id".to_string(), Value::String(tenant_id));
    }
    merge_attributes(&mut attrs, argspec::parse(&args.extra)?)?;

    let api = ResourceApi::new(transport, &SPEC);
    let log = api.create(attrs).await?;
    print_record(&log, ctx.format)
}
