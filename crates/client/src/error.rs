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

use thiserror::Error;

pub type NeutronCliResult<T> = Result<T, NeutronCliError>;

/// Error type shared by the SDK and the CLI. Every variant ends up printed
/// as a single message at the CLI entry point; the process exit code is 1
/// for all of them.
#[derive(Error, Debug)]
pub enum NeutronCliError {
    #[error("{0}")]
    ArgumentSpec(String),

    #[error("Unable to find {resource} with name or id '{ident}'")]
    NotFound { resource: &'static str, ident: String },

    #[error("Multiple {resource} matches found for name '{name}', use an ID to be more specific")]
    AmbiguousName { resource: &'static str, name: String },

    #[error("Authentication failed, credentials were rejected")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Unable to delete {failures} of {total} {resource}(s)")]
    BulkDelete {
        resource: &'static str,
        failures: usize,
        total: usize,
    },

    #[error("Attribute '{0}' is specified more than once")]
    DuplicateAttribute(String),

    #[error("Must specify new values to update {0}")]
    NothingToUpdate(&'static str),

    #[error("Authentication setup failed: {0}")]
    AuthSetup(String),

    #[error("Unexpected API response: {0}")]
    MalformedResponse(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}
