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

use super::model_ext::PublishFuture;
use crate::Error;
use crate::model::Message;
use crate::stub;
use std::sync::Arc;

/// Creates [Publisher]s bound to individual topics.
///
/// # Example
/// ```
/// # use quickstart_pubsub::client::PublisherClient;
/// # use quickstart_pubsub::model::Message;
/// # async fn sample(client: PublisherClient) -> anyhow::Result<()> {
/// let publisher = client.publisher("projects/my-project/topics/my-topic");
/// let message_id = publisher.publish(Message::new().set_data("Hello World!")).await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct PublisherClient {
    inner: Arc<dyn stub::Publisher>,
}

impl PublisherClient {
    /// Creates a new client from the provided stub.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: stub::Publisher + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    /// Returns a publisher for `topic`.
    pub fn publisher<T: Into<String>>(&self, topic: T) -> Publisher {
        Publisher {
            inner: self.inner.clone(),
            topic: topic.into(),
        }
    }
}

/// Publishes messages to a single topic.
///
/// `publish()` returns immediately. The message is sent by a background task,
/// awaiting the returned [PublishFuture] waits until the service confirms the
/// message, and yields the id assigned by the service.
#[derive(Clone, Debug)]
pub struct Publisher {
    inner: Arc<dyn stub::Publisher>,
    topic: String,
}

impl Publisher {
    /// The topic this publisher sends messages to.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Publishes a message to the topic.
    ///
    /// This function must be called from within a tokio runtime.
    ///
    /// ```
    /// # use quickstart_pubsub::client::Publisher;
    /// # use quickstart_pubsub::model::Message;
    /// # async fn sample(publisher: Publisher) -> anyhow::Result<()> {
    /// let handle = publisher.publish(Message::new().set_data("Hello World!"));
    /// // ... do other work ...
    /// let message_id = handle.await?;
    /// # Ok(()) }
    /// ```
    pub fn publish(&self, msg: Message) -> PublishFuture {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let inner = self.inner.clone();
        let topic = self.topic.clone();
        tokio::spawn(async move {
            let result = inner
                .publish(topic, vec![msg])
                .await
                .and_then(|ids| {
                    ids.into_iter().next().ok_or_else(|| {
                        Error::UnexpectedResponse("publish returned no message ids".into())
                    })
                });
            // The application may have dropped the future, that is not an
            // error.
            let _ = tx.send(result);
        });
        PublishFuture { rx }
    }
}
