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

pub(crate) mod builder;

use crate::stub;
use std::sync::Arc;

/// A client to create, query, and delete topics.
///
/// # Example
/// ```
/// # use quickstart_pubsub::client::TopicAdmin;
/// # async fn sample(client: &TopicAdmin) -> anyhow::Result<()> {
/// let topic = client
///     .create_topic()
///     .set_name("projects/my-project/topics/my-topic")
///     .send()
///     .await?;
/// println!("created {topic:?}");
/// # Ok(()) }
/// ```
///
/// # Pooling and Cloning
///
/// `TopicAdmin` holds its stub in an [Arc]. Cloning the client is cheap, there
/// is no need to wrap it in an `Arc` to share it.
#[derive(Clone, Debug)]
pub struct TopicAdmin {
    inner: Arc<dyn stub::TopicAdmin>,
}

impl TopicAdmin {
    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: stub::TopicAdmin + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    /// Creates a topic.
    pub fn create_topic(&self) -> builder::CreateTopic {
        builder::CreateTopic::new(self.inner.clone())
    }

    /// Gets the configuration of a topic.
    pub fn get_topic(&self) -> builder::GetTopic {
        builder::GetTopic::new(self.inner.clone())
    }

    /// Deletes a topic.
    pub fn delete_topic(&self) -> builder::DeleteTopic {
        builder::DeleteTopic::new(self.inner.clone())
    }
}

/// A client to create, query, and delete subscriptions.
///
/// # Example
/// ```
/// # use quickstart_pubsub::client::SubscriptionAdmin;
/// # async fn sample(client: &SubscriptionAdmin) -> anyhow::Result<()> {
/// let subscription = client
///     .create_subscription()
///     .set_name("projects/my-project/subscriptions/my-subscription")
///     .set_topic("projects/my-project/topics/my-topic")
///     .send()
///     .await?;
/// println!("created {subscription:?}");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct SubscriptionAdmin {
    inner: Arc<dyn stub::SubscriptionAdmin>,
}

impl SubscriptionAdmin {
    /// Creates a new client from the provided stub.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: stub::SubscriptionAdmin + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    /// Creates a subscription.
    pub fn create_subscription(&self) -> builder::CreateSubscription {
        builder::CreateSubscription::new(self.inner.clone())
    }

    /// Gets the configuration of a subscription.
    pub fn get_subscription(&self) -> builder::GetSubscription {
        builder::GetSubscription::new(self.inner.clone())
    }

    /// Deletes a subscription.
    pub fn delete_subscription(&self) -> builder::DeleteSubscription {
        builder::DeleteSubscription::new(self.inner.clone())
    }
}
