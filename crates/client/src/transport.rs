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

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::auth::{self, Session};
use crate::config::ClientConfig;
use crate::error::{NeutronCliError, NeutronCliResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    // Replaying a POST on a flaky connection could create a duplicate
    // resource, so POST is excluded from connection-failure retries.
    pub fn is_idempotent(self) -> bool {
        !matches!(self, Method::Post)
    }
}

/// URL query parameters with repeated-key semantics for sequence values.
#[derive(Clone, Debug, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    /// Flatten a JSON value into query parameters, repeating the key for
    /// each element of a sequence value.
    pub fn push_json(&mut self, key: &str, value: &Value) {
        match value {
            Value::Array(items) => {
                for item in items {
                    self.push_scalar(key, item);
                }
            }
            other => self.push_scalar(key, other),
        }
    }

    fn push_scalar(&mut self, key: &str, value: &Value) {
        let text = match value {
            Value::String(text) => text.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        };
        self.pairs.push((key.to_string(), text));
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// RestTransport is the seam between the resource layer and the wire. The
// production implementation is [`HttpTransport`]; tests substitute a
// recording mock instead of monkey-patching lookups.
#[async_trait]
pub trait RestTransport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> NeutronCliResult<ApiResponse>;
}

/// HTTP transport over `reqwest`, carrying the token lifecycle: lazy
/// authentication on first use, one silent re-authentication and retry when
/// an established session gets a 401, and connection-failure retries for
/// idempotent verbs only.
pub struct HttpTransport {
    http: reqwest::Client,
    config: ClientConfig,
    session: Mutex<Option<Session>>,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> NeutronCliResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            config,
            session: Mutex::new(None),
        })
    }

    async fn session(&self) -> NeutronCliResult<Session> {
        let mut guard = self.session.lock().await;
        if let Some(session) = guard.as_ref() {
            return Ok(session.clone());
        }
        let session = auth::authenticate(&self.http, &self.config).await?;
        *guard = Some(session.clone());
        Ok(session)
    }

    async fn reauthenticate(&self) -> NeutronCliResult<Session> {
        let mut guard = self.session.lock().await;
        let session = auth::authenticate(&self.http, &self.config).await?;
        *guard = Some(session.clone());
        Ok(session)
    }

    fn url_for(&self, endpoint: &str, path: &str) -> String {
        format!(
            "{}/v{}/{}",
            endpoint.trim_end_matches('/'),
            self.config.api_version,
            path.trim_start_matches('/')
        )
    }

    async fn send_once(
        &self,
        session: &Session,
        method: Method,
        url: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let mut builder = match method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
            Method::Put => self.http.put(url),
            Method::Delete => self.http.delete(url),
        };
        builder = builder.header("Accept", "application/json");
        if let Some(token) = session.token.as_deref() {
            builder = builder.header("X-Auth-Token", token);
        }
        if !query.is_empty() {
            builder = builder.query(query.pairs());
        }
        if let Some(body) = body {
            // Also sets Content-Type: application/json.
            builder = builder.json(body);
        }
        builder.send().await
    }
}

#[async_trait]
impl RestTransport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> NeutronCliResult<ApiResponse> {
        let mut session = self.session().await?;
        let mut reauthenticated = false;
        let mut attempt: u32 = 0;

        loop {
            let url = self.url_for(&session.endpoint, path);
            let response = match self.send_once(&session, method, &url, query, body).await {
                Ok(response) => response,
                Err(err)
                    if is_connection_error(&err)
                        && should_retry(method, attempt, self.config.retries) =>
                {
                    attempt += 1;
                    tracing::warn!(
                        "connection failure on {} {url} (attempt {attempt}/{}): {err}",
                        method.as_str(),
                        self.config.retries
                    );
                    tokio::time::sleep(self.config.retry_interval).await;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            let status = response.status().as_u16();
            if status == 401 {
                if !reauthenticated && self.config.strategy.can_reauthenticate() {
                    tracing::debug!("token rejected with 401, re-authenticating once");
                    session = self.reauthenticate().await?;
                    reauthenticated = true;
                    continue;
                }
                return Err(NeutronCliError::Unauthorized);
            }

            let body = read_json_body(response).await?;
            if status == 403 {
                return Err(NeutronCliError::Forbidden(server_message(&body)));
            }
            return Ok(ApiResponse { status, body });
        }
    }
}

fn is_connection_error(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}

fn should_retry(method: Method, attempt: u32, retries: u32) -> bool {
    method.is_idempotent() && attempt < retries
}

async fn read_json_body(response: reqwest::Response) -> NeutronCliResult<Value> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    // Error responses are not always JSON; keep the raw text in that case.
    Ok(serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text)))
}

/// Best-effort extraction of the server-supplied error message from a
/// response body.
pub fn server_message(body: &Value) -> String {
    if let Some(message) = body.pointer("/NeutronError/message").and_then(Value::as_str) {
        return message.to_string();
    }
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return message.to_string();
    }
    match body {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn post_is_never_retried() {
        assert!(!should_retry(Method::Post, 0, 3));
        assert!(!should_retry(Method::Post, 1, 3));
    }

    #[test]
    fn idempotent_methods_retry_up_to_the_configured_count() {
        for method in [Method::Get, Method::Put, Method::Delete] {
            assert!(should_retry(method, 0, 2));
            assert!(should_retry(method, 1, 2));
            assert!(!should_retry(method, 2, 2));
        }
    }

    #[test]
    fn nothing_retries_when_retries_are_disabled() {
        for method in [Method::Get, Method::Post, Method::Put, Method::Delete] {
            assert!(!should_retry(method, 0, 0));
        }
    }

    #[test]
    fn query_repeats_keys_for_sequences() {
        let mut query = Query::new();
        query.push("name", "n1");
        query.push_json("id", &json!(["a", "b"]));
        assert_eq!(
            query.pairs(),
            &[
                ("name".to_string(), "n1".to_string()),
                ("id".to_string(), "a".to_string()),
                ("id".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn query_renders_scalars_as_text() {
        let mut query = Query::new();
        query.push_json("admin_state_up", &json!(true));
        query.push_json("mtu", &json!(1450));
        assert_eq!(
            query.pairs(),
            &[
                ("admin_state_up".to_string(), "true".to_string()),
                ("mtu".to_string(), "1450".to_string()),
            ]
        );
    }

    #[test]
    fn server_message_prefers_the_error_envelope() {
        let body = json!({"NeutronError": {"type": "NetworkNotFound", "message": "nope"}});
        assert_eq!(server_message(&body), "nope");

        let body = json!({"message": "plain"});
        assert_eq!(server_message(&body), "plain");

        assert_eq!(server_message(&Value::String("raw text".into())), "raw text");
        assert_eq!(server_message(&Value::Null), "");
    }
}
