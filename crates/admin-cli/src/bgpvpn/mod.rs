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

pub mod common;

mod assoc;
mod create;
mod delete;
mod list;
mod show;
mod update;

#[cfg(test)]
mod tests;

use clap::Parser;
use neutron_client::NeutronCliResult;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Create a BGP VPN")]
    Create(create::Args),
    #[clap(about = "Update a BGP VPN")]
    Update(update::Args),
    #[clap(about = "Delete BGP VPN(s)")]
    Delete(delete::Args),
    #[clap(about = "Display BGP VPN information")]
    Show(show::Args),
    #[clap(about = "List BGP VPNs")]
    List(list::Args),
    #[clap(about = "Network association handling", subcommand)]
    NetAssoc(assoc::NetAssocCmd),
    #[clap(about = "Router association handling", subcommand)]
    RouterAssoc(assoc::RouterAssocCmd),
}

impl Dispatch for Cmd {
    async fn dispatch(self, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
        match self {
            Cmd::Create(args) => create::create(args, ctx).await,
            Cmd::Update(args) => update::update(args, ctx).await,
            Cmd::Delete(args) => delete::delete(args, ctx).await,
            Cmd::Show(args) => show::show(args, ctx).await,
            Cmd::List(args) => list::list(args, ctx).await,
            Cmd::NetAssoc(cmd) => cmd.dispatch(ctx).await,
            Cmd::RouterAssoc(cmd) => cmd.dispatch(ctx).await,
        }
    }
}
