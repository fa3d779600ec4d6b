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
use clap::error::ErrorKind;
use clap::Parser;
use neutron_client::output::OutputFormat;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::{
    bgpvpn, firewall_group, firewall_policy, firewall_rule, network, network_log, port, router,
    subnet, trunk, vpn_service,
};

#[derive(Parser, Debug)]
#[clap(name = "neutron-admin-cli")]
#[clap(about = "Command-line client for the networking service API")]
pub struct CliOptions {
    #[clap(long, env = "OS_AUTH_URL")]
    #[clap(help = "Identity service endpoint used to authenticate. Defaults to OS_AUTH_URL or $HOME/.config/neutron_api_cli.json.")]
    pub os_auth_url: Option<String>,

    #[clap(long, env = "OS_USERNAME")]
    #[clap(help = "User name for the password auth strategy. Defaults to OS_USERNAME.")]
    pub os_username: Option<String>,

    #[clap(long, env = "OS_PASSWORD", hide_env_values = true)]
    #[clap(help = "Password for the password auth strategy. Defaults to OS_PASSWORD.")]
    pub os_password: Option<String>,

    #[clap(long, env = "OS_TENANT_NAME")]
    #[clap(help = "Tenant to scope the authentication to. Defaults to OS_TENANT_NAME.")]
    pub os_tenant_name: Option<String>,

    #[clap(long, env = "OS_REGION_NAME")]
    #[clap(help = "Region used to pick the networking endpoint from the catalog. Defaults to OS_REGION_NAME.")]
    pub os_region_name: Option<String>,

    #[clap(long, env = "OS_TOKEN", hide_env_values = true)]
    #[clap(help = "Pre-issued token for the token auth strategy. Defaults to OS_TOKEN.")]
    pub os_token: Option<String>,

    #[clap(long, env = "OS_URL")]
    #[clap(help = "Networking service endpoint, bypassing the catalog lookup. Defaults to OS_URL.")]
    pub os_url: Option<String>,

    #[clap(long, env = "OS_AUTH_STRATEGY", default_value = "keystone")]
    #[clap(help = "One of keystone, token or noauth. Defaults to OS_AUTH_STRATEGY.")]
    pub os_auth_strategy: String,

    #[clap(long, env = "QUANTUM_VERSION", default_value = "2.0")]
    #[clap(help = "API version used as the URL prefix. Defaults to QUANTUM_VERSION.")]
    pub api_version: String,

    #[clap(short, long, value_enum, default_value = "ascii-table")]
    pub format: OutputFormat,

    #[clap(long, default_value_t = 0)]
    #[clap(help = "How many times idempotent requests are retried on connection failures. Requests that create resources are never retried.")]
    pub http_retries: u32,

    #[clap(long, default_value_t = 1, value_name = "SECONDS")]
    #[clap(help = "Fixed delay between connection-failure retries.")]
    pub http_retry_interval: u64,

    #[clap(short, long, help = "Enable debug logging.")]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: CliCommand,
}

#[derive(Parser, Debug)]
pub enum CliCommand {
    #[clap(about = "Network related handling", subcommand, visible_alias = "net")]
    Network(network::Cmd),
    #[clap(about = "Subnet related handling", subcommand)]
    Subnet(subnet::Cmd),
    #[clap(about = "Port related handling", subcommand)]
    Port(port::Cmd),
    #[clap(about = "Router related handling", subcommand)]
    Router(router::Cmd),
    #[clap(
        about = "Firewall rule related handling",
        subcommand,
        visible_alias = "fwr"
    )]
    FirewallRule(firewall_rule::Cmd),
    #[clap(
        about = "Firewall policy related handling",
        subcommand,
        visible_alias = "fwp"
    )]
    FirewallPolicy(firewall_policy::Cmd),
    #[clap(
        about = "Firewall group related handling",
        subcommand,
        visible_alias = "fwg"
    )]
    FirewallGroup(firewall_group::Cmd),
    #[clap(
        about = "VPN service related handling",
        subcommand,
        visible_alias = "vpn"
    )]
    VpnService(vpn_service::Cmd),
    #[clap(about = "BGP VPN related handling", subcommand)]
    Bgpvpn(bgpvpn::Cmd),
    #[clap(
        about = "Network log related handling",
        subcommand,
        visible_alias = "log"
    )]
    NetworkLog(network_log::Cmd),
    #[clap(about = "Trunk related handling", subcommand)]
    Trunk(trunk::Cmd),
}

impl Dispatch for CliCommand {
    async fn dispatch(self, ctx: &mut RuntimeContext) -> neutron_client::NeutronCliResult<()> {
        match self {
            CliCommand::Network(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Subnet(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Port(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Router(cmd) => cmd.dispatch(ctx).await,
            CliCommand::FirewallRule(cmd) => cmd.dispatch(ctx).await,
            CliCommand::FirewallPolicy(cmd) => cmd.dispatch(ctx).await,
            CliCommand::FirewallGroup(cmd) => cmd.dispatch(ctx).await,
            CliCommand::VpnService(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Bgpvpn(cmd) => cmd.dispatch(ctx).await,
            CliCommand::NetworkLog(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Trunk(cmd) => cmd.dispatch(ctx).await,
        }
    }
}

impl CliOptions {
    pub fn load() -> Self {
        // Usage failures exit 1 like every other command failure; help and
        // version requests are not failures.
        match Self::try_parse() {
            Ok(options) => options,
            Err(err) => {
                let code = match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                    _ => 1,
                };
                let _ = err.print();
                std::process::exit(code);
            }
        }
    }
}
