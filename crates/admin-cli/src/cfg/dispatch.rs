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

use neutron_client::NeutronCliResult;

use crate::cfg::runtime::RuntimeContext;

// Dispatch is a trait implemented by all CLI command types.
// It provides a unified interface for executing commands with
// the runtime context. Each command enum routes its variants to
// the verb handlers in an explicit match, so the full command
// table is checked at compile time.
pub(crate) trait Dispatch {
    fn dispatch(
        self,
        ctx: &mut RuntimeContext,
    ) -> impl std::future::Future<Output = NeutronCliResult<()>>;
}

#[cfg(test)]
mod tests {
    use neutron_client::NeutronCliResult;

    use super::Dispatch;
    use crate::cfg::runtime::RuntimeContext;

    // Stub leaf command type, for the purpose of making sure the
    // trait stays implementable with a plain async fn.
    struct StubArgs;

    impl Dispatch for StubArgs {
        async fn dispatch(self, _ctx: &mut RuntimeContext) -> NeutronCliResult<()> {
            Ok(())
        }
    }

    fn assert_dispatch<T: Dispatch>() {}

    #[test]
    fn async_fn_impls_satisfy_dispatch() {
        assert_dispatch::<StubArgs>();
    }
}
