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
use neutron_client::output::print_list;
use neutron_client::resource::ResourceApi;
use neutron_client::transport::Query;
use neutron_client::NeutronCliResult;

use super::common::{COLUMNS, SPEC};
use crate::argspec;
use crate::cfg::runtime::RuntimeContext;

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(short, long, help = "Show additional columns")]
    pub long: bool,

    #[clap(long, help = "Filter by name")]
    pub name: Option<String>,

    #[clap(long, help = "Filter by owner tenant ID")]
    pub tenant_id: Option<String>,

    #[clap(last = true, help = "Additional filters: --key value [value ...]")]
    pub extra: Vec<String>,
}

pub async fn list(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let mut query = Query::new();
    if let Some(name) = args.name {
        query.push("name", name);
    }
    if let Some(tenant_id) = args.tenant_id {
        query.push("tenant_id", tenant_id);
    }
    for (key, value) in argspec::parse(&args.extra)? {
        query.push_json(&key, &value);
    }

    let api = ResourceApi::new(ctx.transport.as_ref(), &SPEC);
    let bgpvpns = api.list(&query).await?;
    print_list(&bgpvpns, COLUMNS, args.long, ctx.format)
}
