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

pub const SPEC: ResourceSpec = ResourceSpec::new("port", "ports", "ports");

pub const COLUMNS: &[Column] = &[
    Column::both("id", "ID"),
    Column::both("name", "Name"),
    Column::both("mac_address", "MAC Address"),
    Column::both("fixed_ips", "Fixed IPs"),
    Column::both("status", "Status"),
    Column::long("network_id", "Network ID"),
    Column::long("admin_state_up", "Admin State Up"),
    Column::long("device_id", "Device ID"),
    Column::long("device_owner", "Device Owner"),
    Column::long("security_groups", "Security Groups"),
    Column::long("tenant_id", "Tenant ID"),
];
