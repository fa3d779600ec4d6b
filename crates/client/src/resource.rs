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

//! Generic CRUD verbs over one REST resource collection.
//!
//! Every resource the CLI knows is described by a [`ResourceSpec`] constant;
//! [`ResourceApi`] binds one spec to a transport and provides the verbs all
//! resource commands share, including name-or-ID resolution.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::error::{NeutronCliError, NeutronCliResult};
use crate::transport::{server_message, ApiResponse, Method, Query, RestTransport};

/// One deserialized REST resource object.
pub type Record = Map<String, Value>;

/// Static description of one REST resource collection. Commands configure
/// the generic verbs with one of these instead of subclassing anything.
#[derive(Clone, Debug)]
pub struct ResourceSpec {
    pub singular: &'static str,
    pub plural: &'static str,
    pub collection: Cow<'static, str>,
    pub allow_name_lookup: bool,
}

impl ResourceSpec {
    pub const fn new(singular: &'static str, plural: &'static str, path: &'static str) -> Self {
        Self {
            singular,
            plural,
            collection: Cow::Borrowed(path),
            allow_name_lookup: true,
        }
    }

    pub fn member_path(&self, id: &str) -> String {
        format!("{}/{}", self.collection, id)
    }
}

/// Whether a user-supplied identifier has the textual 8-4-4-4-12 UUID shape.
/// Anything shaped like a UUID is used verbatim as the resource ID and never
/// goes through the name-filtered lookup.
pub fn is_uuid_like(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 36
        && bytes.iter().enumerate().all(|(i, byte)| match i {
            8 | 13 | 18 | 23 => *byte == b'-',
            _ => byte.is_ascii_hexdigit(),
        })
}

/// Merge ad hoc attributes into a request body. Keys already present came
/// from recognized flags; clobbering them silently would hide a user
/// mistake, so a collision is an error.
pub fn merge_attributes(attrs: &mut Record, extra: Record) -> NeutronCliResult<()> {
    for (key, value) in extra {
        if attrs.contains_key(&key) {
            return Err(NeutronCliError::DuplicateAttribute(key));
        }
        attrs.insert(key, value);
    }
    Ok(())
}

pub struct ResourceApi<'a> {
    transport: &'a dyn RestTransport,
    spec: &'a ResourceSpec,
}

impl<'a> ResourceApi<'a> {
    pub fn new(transport: &'a dyn RestTransport, spec: &'a ResourceSpec) -> Self {
        Self { transport, spec }
    }

    /// POST the wrapped attributes to the collection endpoint and return the
    /// created record. Never retried at any layer.
    pub async fn create(&self, attrs: Record) -> NeutronCliResult<Record> {
        let body = wrap(self.spec.singular, attrs);
        let response = self
            .transport
            .request(Method::Post, self.spec.collection.as_ref(), &Query::new(), Some(&body))
            .await?;
        if !response.is_success() {
            return Err(self.request_failed(response));
        }
        self.unwrap_record(response.body)
    }

    pub async fn update(&self, ident: &str, attrs: Record) -> NeutronCliResult<()> {
        if attrs.is_empty() {
            return Err(NeutronCliError::NothingToUpdate(self.spec.singular));
        }
        let id = self.resolve(ident).await?;
        let body = wrap(self.spec.singular, attrs);
        let response = self
            .transport
            .request(Method::Put, &self.spec.member_path(&id), &Query::new(), Some(&body))
            .await?;
        if !response.is_success() {
            return Err(self.status_error(ident, response));
        }
        Ok(())
    }

    pub async fn delete(&self, ident: &str) -> NeutronCliResult<()> {
        let id = self.resolve(ident).await?;
        let response = self
            .transport
            .request(Method::Delete, &self.spec.member_path(&id), &Query::new(), None)
            .await?;
        if !response.is_success() {
            return Err(self.status_error(ident, response));
        }
        Ok(())
    }

    /// Best-effort bulk delete. Every entry is attempted in input order even
    /// when earlier entries fail; the per-item failures are reported once at
    /// the end. Not a transaction.
    pub async fn delete_many(&self, idents: &[String]) -> NeutronCliResult<()> {
        let mut failures = 0usize;
        for ident in idents {
            match self.delete(ident).await {
                Ok(()) => tracing::info!("deleted {} '{}'", self.spec.singular, ident),
                Err(err) => {
                    failures += 1;
                    tracing::warn!("unable to delete {} '{}': {err}", self.spec.singular, ident);
                }
            }
        }
        if failures > 0 {
            return Err(NeutronCliError::BulkDelete {
                resource: self.spec.singular,
                failures,
                total: idents.len(),
            });
        }
        Ok(())
    }

    pub async fn show(&self, ident: &str) -> NeutronCliResult<Record> {
        let id = self.resolve(ident).await?;
        let response = self
            .transport
            .request(Method::Get, &self.spec.member_path(&id), &Query::new(), None)
            .await?;
        if !response.is_success() {
            return Err(self.status_error(ident, response));
        }
        self.unwrap_record(response.body)
    }

    pub async fn list(&self, query: &Query) -> NeutronCliResult<Vec<Record>> {
        let response = self
            .transport
            .request(Method::Get, self.spec.collection.as_ref(), query, None)
            .await?;
        if !response.is_success() {
            return Err(self.request_failed(response));
        }
        let mut body = response.body;
        match body.get_mut(self.spec.plural).map(Value::take) {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(record) => Ok(record),
                    other => Err(NeutronCliError::MalformedResponse(format!(
                        "non-object entry in '{}' list: {other}",
                        self.spec.plural
                    ))),
                })
                .collect(),
            _ => Err(NeutronCliError::MalformedResponse(format!(
                "response missing the '{}' list",
                self.spec.plural
            ))),
        }
    }

    /// Member-scoped action endpoint: `PUT {collection}/{id}/{action}`.
    pub async fn member_action(
        &self,
        ident: &str,
        action: &str,
        body: Value,
    ) -> NeutronCliResult<Value> {
        let id = self.resolve(ident).await?;
        let path = format!("{}/{action}", self.spec.member_path(&id));
        let response = self
            .transport
            .request(Method::Put, &path, &Query::new(), Some(&body))
            .await?;
        if !response.is_success() {
            return Err(self.status_error(ident, response));
        }
        Ok(response.body)
    }

    /// Name-or-ID resolution. UUID-shaped input is taken as the ID verbatim;
    /// anything else is matched against the collection by name and must
    /// match exactly one record.
    pub async fn resolve(&self, ident: &str) -> NeutronCliResult<String> {
        if !self.spec.allow_name_lookup || is_uuid_like(ident) {
            return Ok(ident.to_string());
        }
        let mut query = Query::new();
        query.push("name", ident);
        query.push("fields", "id");
        let matches = self.list(&query).await?;
        match matches.as_slice() {
            [] => Err(NeutronCliError::NotFound {
                resource: self.spec.singular,
                ident: ident.to_string(),
            }),
            [record] => record
                .get("id")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    NeutronCliError::MalformedResponse(format!(
                        "{} record without an 'id' field",
                        self.spec.singular
                    ))
                }),
            _ => Err(NeutronCliError::AmbiguousName {
                resource: self.spec.singular,
                name: ident.to_string(),
            }),
        }
    }

    fn status_error(&self, ident: &str, response: ApiResponse) -> NeutronCliError {
        if response.status == 404 {
            return NeutronCliError::NotFound {
                resource: self.spec.singular,
                ident: ident.to_string(),
            };
        }
        self.request_failed(response)
    }

    fn request_failed(&self, response: ApiResponse) -> NeutronCliError {
        NeutronCliError::RequestFailed {
            status: response.status,
            message: server_message(&response.body),
        }
    }

    fn unwrap_record(&self, mut body: Value) -> NeutronCliResult<Record> {
        match body.get_mut(self.spec.singular).map(Value::take) {
            Some(Value::Object(record)) => Ok(record),
            _ => Err(NeutronCliError::MalformedResponse(format!(
                "response missing the '{}' object",
                self.spec.singular
            ))),
        }
    }
}

fn wrap(singular: &str, attrs: Record) -> Value {
    let mut body = Map::new();
    body.insert(singular.to_string(), Value::Object(attrs));
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    const SPEC: ResourceSpec = ResourceSpec::new("network", "networks", "networks");
    const TRUNK_SPEC: ResourceSpec = ResourceSpec::new("trunk", "trunks", "trunks");
    const NET_ID: &str = "d3255060-bb90-4089-9be5-0e4c2f5f7ad5";

    /// Records every request and plays back canned responses, front first.
    #[derive(Default)]
    struct MockTransport {
        responses: Mutex<Vec<NeutronCliResult<ApiResponse>>>,
        calls: Mutex<Vec<(Method, String)>>,
    }

    impl MockTransport {
        fn playing(responses: Vec<NeutronCliResult<ApiResponse>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(Method, String)> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    #[async_trait]
    impl RestTransport for MockTransport {
        async fn request(
            &self,
            method: Method,
            path: &str,
            _query: &Query,
            _body: Option<&Value>,
        ) -> NeutronCliResult<ApiResponse> {
            self.calls
                .lock()
                .expect("calls lock")
                .push((method, path.to_string()));
            let mut responses = self.responses.lock().expect("responses lock");
            assert!(!responses.is_empty(), "unexpected request {method:?} {path}");
            responses.remove(0)
        }
    }

    fn ok(status: u16, body: Value) -> NeutronCliResult<ApiResponse> {
        Ok(ApiResponse { status, body })
    }

    #[test]
    fn uuid_shape_detection() {
        assert!(is_uuid_like(NET_ID));
        assert!(!is_uuid_like("public"));
        assert!(!is_uuid_like("d3255060bb9040899be50e4c2f5f7ad5"));
        assert!(!is_uuid_like("d3255060-bb90-4089-9be5-0e4c2f5f7adX"));
        assert!(!is_uuid_like("d3255060-bb90-4089-9be5-0e4c2f5f7ad5-extra"));
    }

    #[tokio::test]
    async fn resolve_uses_a_uuid_verbatim_without_listing() {
        let transport = MockTransport::default();
        let api = ResourceApi::new(&transport, &SPEC);
        let id = api.resolve(NET_ID).await.expect("uuid should resolve");
        assert_eq!(id, NET_ID);
        assert!(transport.calls().is_empty(), "no lookup request expected");
    }

    #[tokio::test]
    async fn resolve_matches_exactly_one_name() {
        let transport =
            MockTransport::playing(vec![ok(200, json!({"networks": [{"id": NET_ID}]}))]);
        let api = ResourceApi::new(&transport, &SPEC);
        let id = api.resolve("public").await.expect("name should resolve");
        assert_eq!(id, NET_ID);
        assert_eq!(transport.calls(), vec![(Method::Get, "networks".to_string())]);
    }

    #[tokio::test]
    async fn resolve_reports_zero_matches_as_not_found() {
        let transport = MockTransport::playing(vec![ok(200, json!({"networks": []}))]);
        let api = ResourceApi::new(&transport, &SPEC);
        let err = api.resolve("ghost").await.expect_err("should not resolve");
        assert!(matches!(err, NeutronCliError::NotFound { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn resolve_reports_multiple_matches_as_ambiguous() {
        let transport = MockTransport::playing(vec![ok(
            200,
            json!({"networks": [{"id": "a"}, {"id": "b"}]}),
        )]);
        let api = ResourceApi::new(&transport, &SPEC);
        let err = api.resolve("dup").await.expect_err("should be ambiguous");
        assert!(
            matches!(err, NeutronCliError::AmbiguousName { .. }),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn create_unwraps_the_singular_record() {
        let transport = MockTransport::playing(vec![ok(
            201,
            json!({"network": {"id": NET_ID, "name": "n1"}}),
        )]);
        let api = ResourceApi::new(&transport, &SPEC);
        let mut attrs = Record::new();
        attrs.insert("name".to_string(), json!("n1"));
        let record = api.create(attrs).await.expect("create should succeed");
        assert_eq!(record.get("id"), Some(&json!(NET_ID)));
        assert_eq!(transport.calls(), vec![(Method::Post, "networks".to_string())]);
    }

    #[tokio::test]
    async fn create_surfaces_the_server_message_on_failure() {
        let transport = MockTransport::playing(vec![ok(
            409,
            json!({"NeutronError": {"message": "quota exceeded"}}),
        )]);
        let api = ResourceApi::new(&transport, &SPEC);
        let err = api.create(Record::new()).await.expect_err("should fail");
        match err {
            NeutronCliError::RequestFailed { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected RequestFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_requires_attributes() {
        let transport = MockTransport::default();
        let api = ResourceApi::new(&transport, &SPEC);
        let err = api
            .update(NET_ID, Record::new())
            .await
            .expect_err("empty update should fail");
        assert!(
            matches!(err, NeutronCliError::NothingToUpdate("network")),
            "got {err:?}"
        );
        assert!(transport.calls().is_empty(), "no request expected");
    }

    #[tokio::test]
    async fn update_puts_to_the_member_endpoint() {
        let transport = MockTransport::playing(vec![ok(200, json!({"network": {"id": NET_ID}}))]);
        let api = ResourceApi::new(&transport, &SPEC);
        let mut attrs = Record::new();
        attrs.insert("name".to_string(), json!("renamed"));
        api.update(NET_ID, attrs).await.expect("update should succeed");
        assert_eq!(
            transport.calls(),
            vec![(Method::Put, format!("networks/{NET_ID}"))]
        );
    }

    #[tokio::test]
    async fn show_maps_404_to_not_found() {
        let transport = MockTransport::playing(vec![ok(404, Value::Null)]);
        let api = ResourceApi::new(&transport, &SPEC);
        let err = api.show(NET_ID).await.expect_err("should be missing");
        assert!(matches!(err, NeutronCliError::NotFound { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn list_unwraps_the_plural_key() {
        let transport = MockTransport::playing(vec![ok(
            200,
            json!({"networks": [{"id": "a"}, {"id": "b"}]}),
        )]);
        let api = ResourceApi::new(&transport, &SPEC);
        let records = api.list(&Query::new()).await.expect("list should succeed");
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn bulk_delete_attempts_every_item_and_reports_at_the_end() {
        let ids = vec![
            "11111111-1111-4111-8111-111111111111".to_string(),
            "22222222-2222-4222-8222-222222222222".to_string(),
            "33333333-3333-4333-8333-333333333333".to_string(),
        ];
        let transport = MockTransport::playing(vec![
            ok(204, Value::Null),
            ok(500, json!({"NeutronError": {"message": "backend down"}})),
            ok(204, Value::Null),
        ]);
        let api = ResourceApi::new(&transport, &SPEC);
        let err = api
            .delete_many(&ids)
            .await
            .expect_err("one failure should fail the bulk");
        match err {
            NeutronCliError::BulkDelete {
                resource,
                failures,
                total,
            } => {
                assert_eq!(resource, "network");
                assert_eq!(failures, 1);
                assert_eq!(total, 3);
            }
            other => panic!("expected BulkDelete, got {other:?}"),
        }
        // The failing 2nd item must not stop the 3rd from being attempted.
        assert_eq!(transport.calls().len(), 3);
    }

    #[tokio::test]
    async fn member_action_hits_the_action_path() {
        let trunk_id = "44444444-4444-4444-8444-444444444444";
        let transport = MockTransport::playing(vec![ok(200, json!({"trunk": {"id": trunk_id}}))]);
        let api = ResourceApi::new(&transport, &TRUNK_SPEC);
        api.member_action(trunk_id, "add_subports", json!({"sub_ports": []}))
            .await
            .expect("action should succeed");
        assert_eq!(
            transport.calls(),
            vec![(Method::Put, format!("trunks/{trunk_id}/add_subports"))]
        );
    }

    #[test]
    fn merge_rejects_colliding_attributes() {
        let mut attrs = Record::new();
        attrs.insert("name".to_string(), json!("n1"));
        let mut extra = Record::new();
        extra.insert("name".to_string(), json!("other"));
        let err = merge_attributes(&mut attrs, extra).expect_err("collision should fail");
        assert!(
            matches!(err, NeutronCliError::DuplicateAttribute(key) if key == "name"),
            "unexpected error"
        );
    }

    #[test]
    fn merge_appends_fresh_attributes() {
        let mut attrs = Record::new();
        attrs.insert("name".to_string(), json!("n1"));
        let mut extra = Record::new();
        extra.insert("mtu".to_string(), json!(1450));
        merge_attributes(&mut attrs, extra).expect("merge should succeed");
        assert_eq!(attrs.get("mtu"), Some(&json!(1450)));
    }
}
