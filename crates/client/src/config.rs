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

use std::time::Duration;

use serde::Deserialize;

use crate::auth::AuthStrategy;

pub const CONFIG_FILE_NAME: &str = "neutron_api_cli.json";

/// Connection settings for the networking API, assembled by the CLI from
/// flags, environment variables and the optional config file. Read once at
/// startup.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub strategy: AuthStrategy,
    pub auth_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub tenant_name: Option<String>,
    pub region_name: Option<String>,
    pub token: Option<String>,
    pub url: Option<String>,
    pub api_version: String,
    pub retries: u32,
    pub retry_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            strategy: AuthStrategy::default(),
            auth_url: None,
            username: None,
            password: None,
            tenant_name: None,
            region_name: None,
            token: None,
            url: None,
            api_version: "2.0".to_string(),
            retries: 0,
            retry_interval: Duration::from_secs(1),
        }
    }
}

/// Optional `$HOME/.config/neutron_api_cli.json` fallback for credentials
/// the flags and environment left unset.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub auth_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub tenant_name: Option<String>,
    pub region_name: Option<String>,
    pub token: Option<String>,
    pub url: Option<String>,
}

pub fn load_file_config() -> Option<FileConfig> {
    let path = dirs::config_dir()?.join(CONFIG_FILE_NAME);
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(config) => Some(config),
        Err(err) => {
            tracing::warn!("ignoring malformed {CONFIG_FILE_NAME}: {err}");
            None
        }
    }
}

impl ClientConfig {
    /// File values fill only the slots the flags and environment left unset.
    pub fn merge_file(&mut self, file: FileConfig) {
        fill(&mut self.auth_url, file.auth_url);
        fill(&mut self.username, file.username);
        fill(&mut self.password, file.password);
        fill(&mut self.tenant_name, file.tenant_name);
        fill(&mut self.region_name, file.region_name);
        fill(&mut self.token, file.token);
        fill(&mut self.url, file.url);
    }
}

fn fill(slot: &mut Option<String>, value: Option<String>) {
    if slot.is_none() {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_settings_win_over_the_file() {
        let mut config = ClientConfig {
            username: Some("cli-user".to_string()),
            ..ClientConfig::default()
        };
        config.merge_file(FileConfig {
            username: Some("file-user".to_string()),
            password: Some("file-pass".to_string()),
            ..FileConfig::default()
        });
        assert_eq!(config.username.as_deref(), Some("cli-user"));
        assert_eq!(config.password.as_deref(), Some("file-pass"));
    }

    #[test]
    fn file_config_tolerates_unknown_and_missing_fields() {
        let parsed: FileConfig =
            serde_json::from_str(r#"{"auth_url": "http://keystone.example:5000/v2.0"}"#)
                .expect("partial file should parse");
        assert_eq!(
            parsed.auth_url.as_deref(),
            Some("http://keystone.example:5000/v2.0")
        );
        assert!(parsed.token.is_none());
    }
}
