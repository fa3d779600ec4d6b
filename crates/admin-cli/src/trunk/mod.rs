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

mod create;
mod delete;
mod list;
mod show;
mod subport;
mod update;

#[cfg(test)]
mod tests;

use clap::Parser;
use neutron_client::NeutronCliResult;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Create a trunk on a parent port")]
    Create(create::Args),
    #[clap(about = "Update a trunk")]
    Update(update::Args),
    #[clap(about = "Delete trunk(s)")]
    Delete(delete::Args),
    #[clap(about = "Display trunk information")]
    Show(show::Args),
    #[clap(about = "List trunks")]
    List(list::Args),
    #[clap(about = "Add subport(s) to a trunk")]
    SubportAdd(subport::AddArgs),
    #[clap(about = "Remove subport(s) from a trunk")]
    SubportRemove(subport::RemoveArgs),
    #[clap(about = "List subports of a trunk")]
    SubportList(subport::ListArgs),
}

impl Dispatch for Cmd {
    async fn dispatch(self, ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
        match self {
            Cmd::Create(args) => create::create(args, ctx).await,
            Cmd::Update(args) => update::update(args, ctx).await,
            Cmd::Delete(args) => delete::delete(args, ctx).await,
            Cmd::Show(args) => show::show(args, ctx).await,
            Cmd::List(args) => list::list(args, ctx).await,
            Cmd::SubportAdd(args) => subport::add(args, ctx).await,
            Cmd::SubportRemove(args) => subport::remove(args, ctx).await,
            Cmd::SubportList(args) => subport::list(args, ctx).await,
        }
    }
}
