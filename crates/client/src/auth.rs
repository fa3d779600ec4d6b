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

//! Identity service login and session establishment.
//!
//! The default strategy runs the legacy password flow against the identity
//! service and picks the networking endpoint out of the returned service
//! catalog. The `token` and `noauth` strategies skip the identity round-trip
//! entirely and use whatever token/endpoint the operator supplied.

use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{NeutronCliError, NeutronCliResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStrategy {
    #[default]
    Keystone,
    Token,
    NoAuth,
}

impl AuthStrategy {
    pub fn from_name(name: &str) -> NeutronCliResult<Self> {
        match name {
            "keystone" => Ok(AuthStrategy::Keystone),
            "token" => Ok(AuthStrategy::Token),
            "noauth" => Ok(AuthStrategy::NoAuth),
            other => Err(NeutronCliError::AuthSetup(format!(
                "unknown auth strategy '{other}', expected keystone, token or noauth"
            ))),
        }
    }

    // Only the password flow can mint a fresh token when the server says 401.
    pub fn can_reauthenticate(self) -> bool {
        matches!(self, AuthStrategy::Keystone)
    }
}

/// One established authentication: the token to attach (if any) and the
/// networking service endpoint to talk to.
#[derive(Clone, Debug)]
pub struct Session {
    pub token: Option<String>,
    pub endpoint: String,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    auth: AuthPayload<'a>,
}

#[derive(Serialize)]
struct AuthPayload<'a> {
    #[serde(rename = "passwordCredentials")]
    password_credentials: PasswordCredentials<'a>,
    #[serde(rename = "tenantName", skip_serializing_if = "Option::is_none")]
    tenant_name: Option<&'a str>,
}

#[derive(Serialize)]
struct PasswordCredentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access: Access,
}

#[derive(Deserialize)]
struct Access {
    token: Token,
    #[serde(rename = "serviceCatalog", default)]
    service_catalog: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct Token {
    id: String,
}

#[derive(Deserialize)]
struct CatalogEntry {
    #[serde(rename = "type")]
    service_type: String,
    #[serde(default)]
    endpoints: Vec<CatalogEndpoint>,
}

#[derive(Deserialize)]
struct CatalogEndpoint {
    #[serde(default)]
    region: Option<String>,
    #[serde(rename = "publicURL")]
    public_url: String,
}

pub async fn authenticate(
    http: &reqwest::Client,
    config: &ClientConfig,
) -> NeutronCliResult<Session> {
    match config.strategy {
        AuthStrategy::NoAuth => Ok(Session {
            token: None,
            endpoint: require(config.url.clone(), "OS_URL is required with the noauth strategy")?,
        }),
        AuthStrategy::Token => Ok(Session {
            token: Some(require(
                config.token.clone(),
                "OS_TOKEN is required with the token strategy",
            )?),
            endpoint: require(config.url.clone(), "OS_URL is required with the token strategy")?,
        }),
        AuthStrategy::Keystone => keystone_login(http, config).await,
    }
}

fn require(value: Option<String>, message: &str) -> NeutronCliResult<String> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| NeutronCliError::AuthSetup(message.to_string()))
}

async fn keystone_login(
    http: &reqwest::Client,
    config: &ClientConfig,
) -> NeutronCliResult<Session> {
    let auth_url = require(
        config.auth_url.clone(),
        "OS_AUTH_URL is required with the keystone strategy",
    )?;
    let username = require(
        config.username.clone(),
        "OS_USERNAME is required with the keystone strategy",
    )?;
    let password = require(
        config.password.clone(),
        "OS_PASSWORD is required with the keystone strategy",
    )?;

    let request = TokenRequest {
        auth: AuthPayload {
            password_credentials: PasswordCredentials {
                username: &username,
                password: &password,
            },
            tenant_name: config.tenant_name.as_deref(),
        },
    };

    let url = format!("{}/tokens", auth_url.trim_end_matches('/'));
    let response = http
        .post(&url)
        .header("Accept", "application/json")
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if status.as_u16() == 401 {
        return Err(NeutronCliError::Unauthorized);
    }
    if !status.is_success() {
        return Err(NeutronCliError::AuthSetup(format!(
            "identity service returned status {status}"
        )));
    }

    let parsed: TokenResponse = response.json().await?;
    let endpoint = match config.url.clone().filter(|url| !url.is_empty()) {
        Some(url) => url,
        None => network_endpoint(&parsed.access.service_catalog, config.region_name.as_deref())?,
    };
    tracing::debug!("authenticated against {url}, networking endpoint is {endpoint}");

    Ok(Session {
        token: Some(parsed.access.token.id),
        endpoint,
    })
}

fn network_endpoint(catalog: &[CatalogEntry], region: Option<&str>) -> NeutronCliResult<String> {
    let entry = catalog
        .iter()
        .find(|entry| entry.service_type == "network")
        .ok_or_else(|| {
            NeutronCliError::AuthSetup(
                "no 'network' service in the identity service catalog".to_string(),
            )
        })?;

    let endpoint = match region {
        Some(region) => entry
            .endpoints
            .iter()
            .find(|endpoint| endpoint.region.as_deref() == Some(region)),
        None => entry.endpoints.first(),
    };

    endpoint
        .map(|endpoint| endpoint.public_url.clone())
        .ok_or_else(|| match region {
            Some(region) => NeutronCliError::AuthSetup(format!(
                "no 'network' endpoint for region '{region}' in the identity service catalog"
            )),
            None => NeutronCliError::AuthSetup(
                "the 'network' catalog entry lists no endpoints".to_string(),
            ),
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_catalog() -> Vec<CatalogEntry> {
        let raw = json!([
            {
                "type": "compute",
                "endpoints": [{"region": "RegionOne", "publicURL": "http://compute.example:8774"}]
            },
            {
                "type": "network",
                "endpoints": [
                    {"region": "RegionOne", "publicURL": "http://neutron.one.example:9696"},
                    {"region": "RegionTwo", "publicURL": "http://neutron.two.example:9696"}
                ]
            }
        ]);
        serde_json::from_value(raw).expect("catalog fixture should deserialize")
    }

    #[test]
    fn token_request_serializes_the_legacy_field_names() {
        let request = TokenRequest {
            auth: AuthPayload {
                password_credentials: PasswordCredentials {
                    username: "admin",
                    password: "secret",
                },
                tenant_name: Some("demo"),
            },
        };
        let value = serde_json::to_value(&request).expect("request should serialize");
        assert_eq!(
            value,
            json!({
                "auth": {
                    "passwordCredentials": {"username": "admin", "password": "secret"},
                    "tenantName": "demo"
                }
            })
        );
    }

    #[test]
    fn token_request_omits_an_unset_tenant() {
        let request = TokenRequest {
            auth: AuthPayload {
                password_credentials: PasswordCredentials {
                    username: "admin",
                    password: "secret",
                },
                tenant_name: None,
            },
        };
        let value = serde_json::to_value(&request).expect("request should serialize");
        assert!(value["auth"].get("tenantName").is_none());
    }

    #[test]
    fn token_response_parses_token_and_catalog() {
        let raw = json!({
            "access": {
                "token": {"id": "tok-123", "expires": "2026-01-01T00:00:00Z"},
                "serviceCatalog": [
                    {"type": "network", "endpoints": [{"publicURL": "http://neutron.example:9696"}]}
                ]
            }
        });
        let parsed: TokenResponse =
            serde_json::from_value(raw).expect("response fixture should deserialize");
        assert_eq!(parsed.access.token.id, "tok-123");
        assert_eq!(parsed.access.service_catalog.len(), 1);
    }

    #[test]
    fn endpoint_selection_honors_the_region() {
        let catalog = sample_catalog();
        let endpoint =
            network_endpoint(&catalog, Some("RegionTwo")).expect("region should resolve");
        assert_eq!(endpoint, "http://neutron.two.example:9696");
    }

    #[test]
    fn endpoint_selection_defaults_to_the_first_entry() {
        let catalog = sample_catalog();
        let endpoint = network_endpoint(&catalog, None).expect("first endpoint should resolve");
        assert_eq!(endpoint, "http://neutron.one.example:9696");
    }

    #[test]
    fn missing_network_service_is_an_error() {
        let catalog: Vec<CatalogEntry> = serde_json::from_value(json!([
            {"type": "compute", "endpoints": []}
        ]))
        .expect("catalog fixture should deserialize");
        assert!(network_endpoint(&catalog, None).is_err());
    }

    #[test]
    fn unknown_region_is_an_error() {
        let catalog = sample_catalog();
        assert!(network_endpoint(&catalog, Some("RegionNine")).is_err());
    }

    #[test]
    fn unknown_strategy_name_is_rejected() {
        assert!(AuthStrategy::from_name("kerberos").is_err());
        assert_eq!(
            AuthStrategy::from_name("noauth").expect("noauth should parse"),
            AuthStrategy::NoAuth
        );
    }
}
