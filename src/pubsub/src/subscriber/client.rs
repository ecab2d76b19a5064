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
use crate::stub;
use std::sync::Arc;

/// A Subscriber client.
///
/// Use this client to receive messages from a pull subscription on a topic.
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
///
/// # Pooling and Cloning
///
/// `Subscriber` holds its stub in an [Arc]. Cloning the client is cheap, there
/// is no need to wrap it in an `Arc` to share it.
#[derive(Clone, Debug)]
pub struct Subscriber {
    inner: Arc<dyn stub::Subscriber>,
}

impl Subscriber {
    /// Creates a new client from the provided stub.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: stub::Subscriber + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    /// Returns a builder to open a streaming pull session on `subscription`.
    pub fn streaming_pull<T: Into<String>>(&self, subscription: T) -> StreamingPull {
        StreamingPull::new(self.inner.clone(), subscription.into())
    }
}
