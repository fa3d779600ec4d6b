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
use neutron_client::resource::ResourceApi;
use neutron_client::NeutronCliResult;

use super::common::SPEC;
use crate::cfg::runtime::RuntimeContext;

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(required = true, help = "Name(s) or ID(s) of the BGP VPN(s) to delete")]
    pub bgpvpns: Vec<String>,
}

pub async fn delete(args: Args, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
    let api = ResourceApi::new(ctx.transport.as_ref(), &SPEC);
    api.delete_many(&args.bgpvpns).await
}
