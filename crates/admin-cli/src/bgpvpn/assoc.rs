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

//! BGP VPN resource associations.
//!
//! Network and router associations share one handler set; everything that
//! differs between the two families lives in an [`AssocKind`] constant, and
//! the nested collection path is derived from the owning BGP VPN at call
//! time.

use std::borrow::Cow;

use clap::Parser;
use neutron_client::output::{print_list, print_record, Column};
use neutron_client::resource::{Record, ResourceApi, ResourceSpec};
use neutron_client::transport::Query;
use neutron_client::NeutronCliResult;
use serde_json::Value;

use super::common::SPEC as BGPVPN_SPEC;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::{network, router};

pub struct AssocKind {
    pub singular: &'static str,
    pub plural: &'static str,
    pub path_segment: &'static str,
    pub ref_attr: &'static str,
    pub ref_spec: ResourceSpec,
    pub columns: &'static [Column],
}

pub const NETWORK_ASSOC: AssocKind = AssocKind {
    singular: "network_association",
    plural: "network_associations",
    path_segment: "network_associations",
    ref_attr: "network_id",
    ref_spec: network::common::SPEC,
    columns: &[
        Column::both("id", "ID"),
        Column::both("network_id", "Network ID"),
        Column::long("tenant_id", "Tenant ID"),
    ],
};

pub const ROUTER_ASSOC: AssocKind = AssocKind {
    singular: "router_association",
    plural: "router_associations",
    path_segment: "router_associations",
    ref_attr: "router_id",
    ref_spec: router::common::SPEC,
    columns: &[
        Column::both("id", "ID"),
        Column::both("router_id", "Router ID"),
        Column::long("tenant_id", "Tenant ID"),
    ],
};

impl AssocKind {
    /// Associations live under their owning BGP VPN; the collection path can
    /// only be built once that parent is resolved. Association IDs are
    /// opaque, so name lookup stays off.
    pub fn spec(&self, bgpvpn_id: &str) -> ResourceSpec {
        ResourceSpec {
            singular: self.singular,
            plural: self.plural,
            collection: Cow::Owned(format!(
                "{}/{}",
                BGPVPN_SPEC.member_path(bgpvpn_id),
                self.path_segment
            )),
            allow_name_lookup: false,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    #[clap(help = "Name or ID of the BGP VPN")]
    pub bgpvpn: String,

    #[clap(help = "Name or ID of the resource to associate")]
    pub resource: String,

    #[clap(long, help = "Owner tenant ID of the association")]
    pub tenant_id: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    #[clap(help = "Name or ID of the BGP VPN")]
    pub bgpvpn: String,

    #[clap(required = true, help = "ID(s) of the association(s) to delete")]
    pub associations: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[clap(help = "Name or ID of the BGP VPN")]
    pub bgpvpn: String,

    #[clap(help = "ID of the association to display")]
    pub association: String,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[clap(help = "Name or ID of the BGP VPN")]
    pub bgpvpn: String,

    #[clap(short, long, help = "Show additional columns")]
    pub long: bool,
}

async fn resolve_bgpvpn(ctx: &RuntimeContext, ident: &str) -> NeutronCliResult<String> {
    ResourceApi::new(ctx.transport.as_ref(), &BGPVPN_SPEC)
        .resolve(ident)
        .await
}

pub async fn create(
    kind: &AssocKind,
    args: CreateArgs,
    ctx: &mut RuntimeContext,
) -> NeutronCliResult<()> {
    let bgpvpn_id = resolve_bgpvpn(ctx, &args.bgpvpn).await?;
    let ref_id = ResourceApi::new(ctx.transport.as_ref(), &kind.ref_spec)
        .resolve(&args.resource)
        .await?;

    let mut attrs = Record::new();
    attrs.insert(kind.ref_attr.to_string(), Value::String(ref_id));
    if let Some(tenant_id) = args.tenant_id {
        attrs.insert("tenant_id".to_string(), Value::String(tenant_id));
    }

    let spec = kind.spec(&bgpvpn_id);
    let api = ResourceApi::new(ctx.transport.as_ref(), &spec);
    let association = api.create(attrs).await?;
    print_record(&association, ctx.format)
}

pub async fn delete(
    kind: &AssocKind,
    args: DeleteArgs,
    ctx: &mut RuntimeContext,
) -> NeutronCliResult<()> {
    let bgpvpn_id = resolve_bgpvpn(ctx, &args.bgpvpn).await?;
    let spec = kind.spec(&bgpvpn_id);
    let api = ResourceApi::new(ctx.transport.as_ref(), &spec);
    api.delete_many(&args.associations).await
}

pub async fn show(
    kind: &AssocKind,
    args: ShowArgs,
    ctx: &mut RuntimeContext,
) -> NeutronCliResult<()> {
    let bgpvpn_id = resolve_bgpvpn(ctx, &args.bgpvpn).await?;
    let spec = kind.spec(&bgpvpn_id);
    let api = ResourceApi::new(ctx.transport.as_ref(), &spec);
    let association = api.show(&args.association).await?;
    print_record(&association, ctx.format)
}

pub async fn list(
    kind: &AssocKind,
    args: ListArgs,
    ctx: &mut RuntimeContext,
) -> NeutronCliResult<()> {
    let bgpvpn_id = resolve_bgpvpn(ctx, &args.bgpvpn).await?;
    let spec = kind.spec(&bgpvpn_id);
    let api = ResourceApi::new(ctx.transport.as_ref(), &spec);
    let associations = api.list(&Query::new()).await?;
    print_list(&associations, kind.columns, args.long, ctx.format)
}

#[derive(Parser, Debug)]
pub enum NetAssocCmd {
    #[clap(about = "Associate a network with a BGP VPN")]
    Create(CreateArgs),
    #[clap(about = "Delete network association(s)")]
    Delete(DeleteArgs),
    #[clap(about = "Display one network association")]
    Show(ShowArgs),
    #[clap(about = "List network associations of a BGP VPN")]
    List(ListArgs),
}

impl Dispatch for NetAssocCmd {
    async fn dispatch(self, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
        match self {
            NetAssocCmd::Create(args) => create(&NETWORK_ASSOC, args, ctx).await,
            NetAssocCmd::Delete(args) => delete(&NETWORK_ASSOC, args, ctx).await,
            NetAssocCmd::Show(args) => show(&NETWORK_ASSOC, args, ctx).await,
            NetAssocCmd::List(args) => list(&NETWORK_ASSOC, args, ctx).await,
        }
    }
}

#[derive(Parser, Debug)]
pub enum RouterAssocCmd {
    #[clap(about = "Associate a router with a BGP VPN")]
    Create(CreateArgs),
    #[clap(about = "Delete router association(s)")]
    Delete(DeleteArgs),
    #[clap(about = "Display one router association")]
    Show(ShowArgs),
    #[clap(about = "List router associations of a BGP VPN")]
    List(ListArgs),
}

impl Dispatch for RouterAssocCmd {
    async fn dispatch(self, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
        match self {
            RouterAssocCmd::Create(args) => create(&ROUTER_ASSOC, args, ctx).await,
            RouterAssocCmd::Delete(args) => delete(&ROUTER_ASSOC, args, ctx).await,
            RouterAssocCmd::Show(args) => show(&ROUTER_ASSOC, args, ctx).await,
            RouterAssocCmd::List(args) => list(&ROUTER_ASSOC, args, ctx).await,
        }
    }
}
