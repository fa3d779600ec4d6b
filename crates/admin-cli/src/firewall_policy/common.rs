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

use neutron_client::resource::{ResourceApi, ResourceSpec};
use neutron_client::transport::RestTransport;
use neutron_client::NeutronCliResult;
use neutron_client::output::Column;
use serde_json::Value;

use crate::firewall_rule;

pub const SPEC: ResourceSpec = ResourceSpec::new(
    "firewall_policy",
    "firewall_policies",
    "fwaas/firewall_policies",
);

pub const COLUMNS: &[Column] = &[
    Column::both("id", "ID"),
    Column::both("name", "Name"),
    Column::both("firewall_rules", "Firewall Rules"),
    Column::long("audited", "Audited"),
    Column::long("shared", "Shared"),
    Column::long("tenant_id", "Tenant ID"),
    Column::long("description", "Description"),
];

/// Resolve each referenced rule to its ID, preserving the given order (the
/// API applies rules in list order).
pub async fn resolve_rules(
    transport: &dyn RestTransport,
    rules: &[String],
) -> NeutronCliResult<Value> {
    let api = ResourceApi::new(transport, &firewall_rule::common::SPEC);
    let mut ids = Vec::with_capacity(rules.len());
    for rule in rules {
        ids.push(Value::String(api.resolve(rule).await?));
    }
    Ok(Value::Array(ids))
}
