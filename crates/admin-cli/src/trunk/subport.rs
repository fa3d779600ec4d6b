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

//! Trunk subport membership, driven through the trunk's `add_subports` and
//! `remove_subports` member actions rather than plain CRUD.

use clap::Parser;
use neutron_client::output::{print_list, Column};
use neutron_client::resource::{Record, ResourceApi};
use neutron_client::transport::RestTransport;
use neutron_client::{NeutronCliError, NeutronCliResult};
use serde_json::{json, Value};

use super::common::{build_subports, SPEC};
use crate::cfg::runtime::RuntimeContext;
use crate::port;

const SUBPORT_COLUMNS: &[Column] = &[
    Column::both("port_id", "Port ID"),
    Column::both("segmentation_type", "Segmentation Type"),
    Column::both("segmentation_id", "Segmentation ID"),
];

#[derive(Parser, Debug)]
pub struct AddArgs {
    #[clap(help = "Name or ID of the trunk")]
    pub trunk: String,

    #[clap(
        long = "subport",
        required = true,
        value_name = "port=PORT,segmentation-type=TYPE,segmentation-id=ID"
    )]
    #[clap(help = "Subport to add (repeat to add several)")]
    pub subports: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    #[clap(help = "Name or ID of the trunk")]
    pub trunk: String,

    #[clap(required = true, help = "Name(s) or ID(s) of the subport port(s) to remove")]
    pub ports: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[clap(help = "Name or ID of the trunk")]
    pub trunk: String,
}

pub async fn add(args: AddArgs, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let transport = ctx.transport.as_ref();
    let sub_ports = build_subports(transport, &args.subports).await?;
    let api = ResourceApi::new(transport, &SPEC);
    api.member_action(&args.trunk, "add_subports", json!({"sub_ports": sub_ports}))
        .await?;
    println!("Added subport(s) to trunk '{}'.", args.trunk);
    Ok(())
}

pub async fn remove(args: RemoveArgs, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let transport = ctx.transport.as_ref();
    let sub_ports = resolve_port_refs(transport, &args.ports).await?;
    let api = ResourceApi::new(transport, &SPEC);
    api.member_action(&args.trunk, "remove_subports", json!({"sub_ports": sub_ports}))
        .await?;
    println!("Removed subport(s) from trunk '{}'.", args.trunk);
    Ok(())
}

pub async fn list(args: ListArgs, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let api = ResourceApi::new(ctx.transport.as_ref(), &SPEC);
    let trunk = api.show(&args.trunk).await?;
    let sub_ports = match trunk.get("sub_ports") {
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| match entry {
                Value::Object(record) => Ok(record.clone()),
                other => Err(NeutronCliError::MalformedResponse(format!(
                    "non-object entry in 'sub_ports': {other}"
                ))),
            })
            .collect::<NeutronCliResult<Vec<Record>>>()?,
        _ => Vec::new(),
    };
    print_list(&sub_ports, SUBPORT_COLUMNS, false, ctx.format)
}

async fn resolve_port_refs(
    transport: &dyn RestTransport,
    ports: &[String],
) -> NeutronCliResult<Vec<Value>> {
    let api = ResourceApi::new(transport, &port::common::SPEC);
    let mut entries = Vec::with_capacity(ports.len());
    for port in ports {
        entries.push(json!({"port_id": api.resolve(port).await?}));
    }
    Ok(entries)
}
