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

use super::builder::StreamingPull;
use super::handler::{AckResult, AtLeastOnce, Handler};
use super::lease_loop::LeaseLoop;
use crate::Result;
use crate::model::Message;
use crate::stub;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Represents an open subscribe session.
///
/// This is a stream-like struct for serving messages to an application.
///
/// # Example
/// ```
/// # use quickstart_pubsub::client::Subscriber;
/// # async fn sample(client: Subscriber) -> anyhow::Result<()> {
/// let mut session = client
///     .streaming_pull("projects/my-project/subscriptions/my-subscription")
///     .start();
/// while let Some((m, h)) = session.next().await.transpose()? {
///     println!("Received message m={m:?}");
///     h.ack();
/// }
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct Session {
    /// The stub implementing this struct.
    inner: Arc<dyn stub::Subscriber>,

    subscription: String,
    max_messages: i32,
    empty_pull_delay: Duration,

    /// Applications ask for messages one at a time. Individual pull responses
    /// can contain multiple messages. We use `pool` to hold the extra messages
    /// while we wait to serve them to applications.
    ///
    /// A FIFO queue is necessary to preserve ordering.
    pool: VecDeque<(Message, Handler)>,

    /// A sender for forwarding acks/nacks from the application to the lease
    /// management task. Each `Handler` holds a clone of this.
    ack_tx: UnboundedSender<AckResult>,

    /// A handle on the lease loop task, awaited by [close()][Session::close].
    lease_loop: JoinHandle<()>,

    /// Set once the session returns a permanent error.
    closed: bool,
}

impl Session {
    pub(super) fn new(builder: StreamingPull) -> Self {
        let LeaseLoop { handle, ack_tx } =
            LeaseLoop::new(builder.inner.clone(), builder.subscription.clone());
        Self {
            inner: builder.inner,
            subscription: builder.subscription,
            max_messages: builder.max_messages,
            empty_pull_delay: builder.empty_pull_delay,
            pool: VecDeque::new(),
            ack_tx,
            lease_loop: handle,
            closed: false,
        }
    }

    /// Returns the next message received on this subscription.
    ///
    /// The message data is returned along with a [Handler] for acknowledging
    /// (ack) or rejecting (nack) the message.
    ///
    /// If the service returns an error, the error is returned instead. After a
    /// permanent (not transient) error the session ends, and all future calls
    /// return `None`.
    ///
    /// The session waits for messages indefinitely. Applications that need to
    /// stop receiving should race this function against a timeout or a
    /// cancellation signal.
    pub async fn next(&mut self) -> Option<Result<(Message, Handler)>> {
        loop {
            // Serve a message if we have one ready.
            if let Some(item) = self.pool.pop_front() {
                return Some(Ok(item));
            }
            if self.closed {
                return None;
            }
            let batch = match self
                .inner
                .pull(self.subscription.clone(), self.max_messages)
                .await
            {
                Ok(batch) => batch,
                Err(e) => {
                    self.closed = !e.is_transient();
                    return Some(Err(e));
                }
            };
            if batch.is_empty() {
                tokio::time::sleep(self.empty_pull_delay).await;
                continue;
            }
            for rm in batch {
                let handler = Handler::AtLeastOnce(AtLeastOnce {
                    ack_id: rm.ack_id,
                    ack_tx: self.ack_tx.clone(),
                });
                self.pool.push_back((rm.message, handler));
            }
        }
    }

    /// Converts the session into a [Stream][futures::Stream].
    ///
    /// # Example
    /// ```
    /// # use quickstart_pubsub::subscriber::Session;
    /// # async fn sample(session: Session) -> anyhow::Result<()> {
    /// use futures::StreamExt as _;
    /// let stream = session.into_stream();
    /// futures::pin_mut!(stream);
    /// while let Some((m, h)) = stream.next().await.transpose()? {
    ///     println!("Received message m={m:?}");
    ///     h.ack();
    /// }
    /// # Ok(()) }
    /// ```
    pub fn into_stream(self) -> impl futures::Stream<Item = Result<(Message, Handler)>> {
        futures::stream::unfold(self, |mut session| async move {
            session.next().await.map(|item| (item, session))
        })
    }

    /// Closes the session.
    ///
    /// Messages received from the service but not yet returned to the
    /// application are rejected, so the service can redeliver them. The
    /// function waits until all the acks and nacks sent through the handlers
    /// returned by this session (and already dropped) reach the service.
    pub async fn close(self) {
        let Self {
            pool,
            ack_tx,
            lease_loop,
            ..
        } = self;
        for (_, handler) in pool {
            handler.nack();
        }
        drop(ack_tx);
        if let Err(e) = lease_loop.await {
            tracing::warn!("the lease management task did not complete: {e}");
        }
    }
}
