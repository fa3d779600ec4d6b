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

use clap::ValueEnum;
use neutron_client::output::Column;
use neutron_client::resource::ResourceSpec;

pub const SPEC: ResourceSpec = ResourceSpec::new("subnet", "subnets", "subnets");

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum IpVersion {
    #[clap(name = "4")]
    V4,
    #[clap(name = "6")]
    V6,
}

impl IpVersion {
    pub fn as_number(self) -> i64 {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }
}

pub const COLUMNS: &[Column] = &[
    Column::both("id", "ID"),
    Column::both("name", "Name"),
    Column::both("cidr", "CIDR"),
    Column::both("allocation_pools", "Allocation Pools"),
    Column::long("ip_version", "IP Version"),
    Column::long("gateway_ip", "Gateway IP"),
    Column::long("enable_dhcp", "DHCP Enabled"),
    Column::long("network_id", "Network ID"),
    Column::long("tenant_id", "Tenant ID"),
    Column::long("dns_nameservers", "DNS Nameservers"),
    Column::long("host_routes", "Host Routes"),
];
