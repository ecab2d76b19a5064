// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::handler::AckResult;
use crate::stub;
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

/// A convenience struct that groups the components of the lease loop.
pub(super) struct LeaseLoop {
    /// A handle to the task running the lease loop.
    pub(super) handle: JoinHandle<()>,
    /// For sending acks/nacks from the application to the lease loop.
    pub(super) ack_tx: UnboundedSender<AckResult>,
}

impl LeaseLoop {
    /// Starts a task forwarding acks and nacks to the service.
    ///
    /// The task runs until every sender (the session and all its handlers) is
    /// dropped. Acks and nacks already queued at that point are still sent.
    pub(super) fn new(inner: Arc<dyn stub::Subscriber>, subscription: String) -> Self {
        let (ack_tx, ack_rx) = unbounded_channel();
        let handle = tokio::spawn(run(inner, subscription, ack_rx));
        LeaseLoop { handle, ack_tx }
    }
}

async fn run(
    inner: Arc<dyn stub::Subscriber>,
    subscription: String,
    mut ack_rx: UnboundedReceiver<AckResult>,
) {
    while let Some(first) = ack_rx.recv().await {
        // Batch whatever else is already queued.
        let mut acks = Vec::new();
        let mut nacks = Vec::new();
        let mut next = Some(first);
        while let Some(r) = next {
            match r {
                AckResult::Ack(id) => acks.push(id),
                AckResult::Nack(id) => nacks.push(id),
            }
            next = ack_rx.try_recv().ok();
        }
        flush(&inner, &subscription, acks, nacks).await;
    }
}

async fn flush(
    inner: &Arc<dyn stub::Subscriber>,
    subscription: &str,
    acks: Vec<String>,
    nacks: Vec<String>,
) {
    if !acks.is_empty() {
        let count = acks.len();
        if let Err(e) = inner.acknowledge(subscription.to_string(), acks).await {
            tracing::warn!("cannot acknowledge {count} message(s) on {subscription}: {e}");
        }
    }
    if !nacks.is_empty() {
        let count = nacks.len();
        if let Err(e) = inner
            .modify_ack_deadline(subscription.to_string(), nacks, 0)
            .await
        {
            tracing::warn!("cannot nack {count} message(s) on {subscription}: {e}");
        }
    }
}
