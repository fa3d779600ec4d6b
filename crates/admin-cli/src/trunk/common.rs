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

use neutron_client::output::Column;
use neutron_client::resource::{Record, ResourceApi, ResourceSpec};
use neutron_client::transport::RestTransport;
use neutron_client::{NeutronCliError, NeutronCliResult};
use serde_json::Value;

use crate::argspec;
use crate::port;

pub const SPEC: ResourceSpec = ResourceSpec::new("trunk", "trunks", "trunks");

pub const COLUMNS: &[Column] = &[
    Column::both("id", "ID"),
    Column::both("name", "Name"),
    Column::both("port_id", "Parent Port"),
    Column::both("status", "Status"),
    Column::long("admin_state_up", "Admin State Up"),
    Column::long("sub_ports", "Subports"),
    Column::long("tenant_id", "Tenant ID"),
    Column::long("description", "Description"),
];

/// Parse one `port=...,segmentation-type=...,segmentation-id=...` token into
/// the referenced port (still a name or ID) and the remaining subport
/// attributes in API form.
pub(crate) fn parse_subport_token(token: &str) -> NeutronCliResult<(String, Record)> {
    let mut port: Option<String> = None;
    let mut entry = Record::new();
    for (key, value) in argspec::parse_pairs(token)? {
        let text = value.as_str().unwrap_or_default().to_string();
        match key.as_str() {
            "port" => port = Some(text),
            "segmentation-type" => {
                entry.insert("segmentation_type".to_string(), Value::String(text));
            }
            "segmentation-id" => {
                let id = text.parse::<i64>().map_err(|_| {
                    NeutronCliError::ArgumentSpec(format!("Invalid segmentation-id '{text}'"))
                })?;
                entry.insert("segmentation_id".to_string(), Value::from(id));
            }
            other => {
                return Err(NeutronCliError::ArgumentSpec(format!(
                    "Unknown subport attribute '{other}', expected port, segmentation-type or segmentation-id"
                )));
            }
        }
    }
    let port = port.ok_or_else(|| {
        NeutronCliError::ArgumentSpec("A subport requires a 'port' attribute".to_string())
    })?;
    Ok((port, entry))
}

/// Resolve every `--subport` token into the API's `sub_ports` list shape.
pub(crate) async fn build_subports(
    transport: &dyn RestTransport,
    tokens: &[String],
) -> NeutronCliResult<Value> {
    let api = ResourceApi::new(transport, &port::common::SPEC);
    let mut entries = Vec::with_capacity(tokens.len());
    for token in tokens {
        let (port, mut entry) = parse_subport_token(token)?;
        entry.insert(
            "port_id".to_string(),
            Value::String(api.resolve(&port).await?),
        );
        entries.push(Value::Object(entry));
    }
    Ok(Value::Array(entries))
}
