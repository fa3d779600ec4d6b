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
use neutron_client::resource::ResourceSpec;

pub const SPEC: ResourceSpec = ResourceSpec::new("router", "routers", "routers");

pub const COLUMNS: &[Column] = &[
    Column::both("id", "ID"),
    Column::both("name", "Name"),
    Column::both("status", "Status"),
    Column::both("external_gateway_info", "External Gateway"),
    Column::long("admin_state_up", "Admin State Up"),
    Column::long("distributed", "Distributed"),
    Column::long("ha", "HA"),
    Column::long("tenant_id", "Tenant ID"),
    Column::long("description", "Description"),
];
