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

mod argspec;
mod bgpvpn;
mod cfg;
mod firewall_group;
mod firewall_policy;
mod firewall_rule;
mod network;
mod network_log;
mod port;
mod router;
mod subnet;
mod trunk;
mod vpn_service;

use neutron_client::NeutronCliResult;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, registry};

use crate::cfg::cli_options::CliOptions;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

fn init_log(debug: bool) {
    let default_level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
        .add_directive("hyper=warn".parse().unwrap())
        .add_directive("hyper_util=warn".parse().unwrap())
        .add_directive("reqwest=warn".parse().unwrap())
        .add_directive("rustls=warn".parse().unwrap());

    // Tables and JSON go to stdout; keep the log stream on stderr.
    let _ = registry()
        .with(fmt::Layer::default().compact().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init();
}

async fn run(options: CliOptions) -> NeutronCliResult<()> {
    let mut ctx = RuntimeContext::new(&options)?;
    options.command.dispatch(&mut ctx).await
}

#[tokio::main]
async fn main() {
    let options = CliOptions::load();
    init_log(options.debug);

    // Every failure funnels into one printed message and exit code 1; the
    // error kind is only distinguishable from the message text.
    if let Err(err) = run(options).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
