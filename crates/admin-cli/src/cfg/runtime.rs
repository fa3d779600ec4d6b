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

use std::sync::Arc;
use std::time::Duration;

use neutron_client::auth::AuthStrategy;
use neutron_client::config::{self, ClientConfig};
use neutron_client::output::OutputFormat;
use neutron_client::transport::{HttpTransport, RestTransport};
use neutron_client::NeutronCliResult;

use crate::cfg::cli_options::CliOptions;

// RuntimeContext carries everything a command handler needs that is not
// part of its own arguments: the API transport and the output format
// selection.
pub(crate) struct RuntimeContext {
    pub transport: Arc<dyn RestTransport>,
    pub format: OutputFormat,
}

impl RuntimeContext {
    pub fn new(options: &CliOptions) -> NeutronCliResult<Self> {
        let mut client_config = ClientConfig {
            strategy: AuthStrategy::from_name(&options.os_auth_strategy)?,
            auth_url: options.os_auth_url.clone(),
            username: options.os_username.clone(),
            password: options.os_password.clone(),
            tenant_name: options.os_tenant_name.clone(),
            region_name: options.os_region_name.clone(),
            token: options.os_token.clone(),
            url: options.os_url.clone(),
            api_version: options.api_version.clone(),
            retries: options.http_retries,
            retry_interval: Duration::from_secs(options.http_retry_interval),
        };
        if let Some(file) = config::load_file_config() {
            client_config.merge_file(file);
        }

        let transport = HttpTransport::new(client_config)?;
        Ok(Self {
            transport: Arc::new(transport),
            format: options.format,
        })
    }
}
