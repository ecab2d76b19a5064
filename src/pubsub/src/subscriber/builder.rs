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

use super::session::Session;
use crate::stub;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_MAX_MESSAGES: i32 = 100;
const DEFAULT_EMPTY_PULL_DELAY: Duration = Duration::from_millis(50);

/// Builder for the `client::Subscriber::streaming_pull` method.
#[derive(Debug)]
pub struct StreamingPull {
    pub(crate) inner: Arc<dyn stub::Subscriber>,
    pub(crate) subscription: String,
    pub(crate) max_messages: i32,
    pub(crate) empty_pull_delay: Duration,
}

impl StreamingPull {
    pub(crate) fn new(inner: Arc<dyn stub::Subscriber>, subscription: String) -> Self {
        Self {
            inner,
            subscription,
            max_messages: DEFAULT_MAX_MESSAGES,
            empty_pull_delay: DEFAULT_EMPTY_PULL_DELAY,
        }
    }

    /// The maximum number of messages requested from the service at a time.
    ///
    /// Values below 1 are treated as 1. The default value is 100 messages.
    ///
    /// # Example
    ///
    /// ```
    /// # use quickstart_pubsub::client::Subscriber;
    /// # async fn sample(client: Subscriber) -> anyhow::Result<()> {
    /// let session = client.streaming_pull("projects/my-project/subscriptions/my-subscription")
    ///     .set_max_messages(10)
    ///     .start();
    /// # Ok(()) }
    /// ```
    pub fn set_max_messages<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_messages = v.into().max(1);
        self
    }

    /// How long to wait before pulling again after the service returns no
    /// messages.
    ///
    /// The default value is 50 milliseconds.
    pub fn set_empty_pull_delay(mut self, v: Duration) -> Self {
        self.empty_pull_delay = v;
        self
    }

    /// Creates a new session to receive messages from the subscription.
    ///
    /// Note that the underlying connection with the server is lazy-initialized.
    /// It is not established until `Session::next()` is called.
    ///
    /// This function must be called from within a tokio runtime.
    pub fn start(self) -> Session {
        Session::new(self)
    }
}
