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

//! Client SDK for an OpenStack-style networking service API.
//!
//! The API speaks plain JSON over REST: every resource lives under a
//! collection endpoint (`networks`, `fwaas/firewall_rules`, ...) and is
//! wrapped in its singular name on the wire, e.g.
//! `{"network": {"name": "n1", "admin_state_up": true}}`.
//!
//! [`transport::HttpTransport`] owns the HTTP session and token lifecycle,
//! [`resource::ResourceApi`] layers the generic CRUD verbs plus name-or-ID
//! resolution on top of any [`transport::RestTransport`], and [`output`]
//! holds the attribute-map driven table/detail rendering shared with the CLI.

pub mod auth;
pub mod config;
pub mod error;
pub mod output;
pub mod resource;
pub mod transport;

pub use error::{NeutronCliError, NeutronCliResult};
