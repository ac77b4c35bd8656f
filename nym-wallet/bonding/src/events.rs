// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::funding::TokenPool;
use crate::pledge::UpdateBondArgs;
use async_trait::async_trait;

/// Callbacks delivered to the owner of a [BondUpdateFlow](crate::flow::BondUpdateFlow).
#[async_trait]
pub trait BondUpdateEvents {
    /// The operator confirmed the change: submit it, debiting the given pool.
    /// Fires at most once per flow instance; reporting the submission outcome
    /// is the implementor's responsibility, the flow is over at dispatch.
    async fn on_update_bond(&self, args: UpdateBondArgs, token_pool: TokenPool);

    /// The flow was cancelled.
    fn on_close(&self);

    /// Fee simulation failed; the flow has returned to amount entry.
    fn on_error(&self, message: String);
}
