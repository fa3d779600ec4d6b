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
use neutron_client::resource::{ResourceApi, ResourceSpec};
use neutron_client::transport::RestTransport;
use neutron_client::NeutronCliResult;
use serde_json::Value;

use crate::port;

pub const SPEC: ResourceSpec =
    ResourceSpec::new("firewall_group", "firewall_groups", "fwaas/firewall_groups");

pub const COLUMNS: &[Column] = &[
    Column::both("id", "ID"),
    Column::both("name", "Name"),
    Column::both("ingress_firewall_policy_id", "Ingress Policy"),
    Column::both("egress_firewall_policy_id", "Egress Policy"),
    Column::both("status", "Status"),
    Column::long("ports", "Ports"),
    Column::long("admin_state_up", "Admin State Up"),
    Column::long("shared", "Shared"),
    Column::long("tenant_id", "Tenant ID"),
    Column::long("description", "Description"),
];

/// Resolve each referenced port to its ID, preserving the given order.
pub async fn resolve_ports(
    transport: &dyn RestTransport,
    ports: &[String],
) -> NeutronCliResult<Value> {
    let api = ResourceApi::new(transport, &port::common::SPEC);
    let mut ids = Vec::with_capacity(ports.len());
    for port in ports {
        ids.push(Value::String(api.resolve(port).await?));
    }
    Ok(Value::Array(ids))
}
