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

//! Traits to mock the clients in this crate.
//!
//! Application developers may need to mock the clients in this crate to test
//! how their application works with different (and sometimes hard to trigger)
//! behavior from the service. Each client wraps one of these traits, use the
//! `from_stub()` function on the client to create a client from a mock or from
//! an alternative implementation of the service.
//!
//! # Example
//! ```
//! # use quickstart_pubsub::{client::TopicAdmin, model::Topic, stub, Error, Result};
//! #[derive(Debug)]
//! struct AlwaysExists;
//!
//! #[async_trait::async_trait]
//! impl stub::TopicAdmin for AlwaysExists {
//!     async fn create_topic(&self, req: Topic) -> Result<Topic> {
//!         Err(Error::AlreadyExists(req.name))
//!     }
//!     async fn get_topic(&self, name: String) -> Result<Topic> {
//!         Ok(Topic::new().set_name(name))
//!     }
//!     async fn delete_topic(&self, _name: String) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let client = TopicAdmin::from_stub(AlwaysExists);
//! ```

use crate::Result;
use crate::model::{Message, ReceivedMessage, Subscription, Topic};

/// Implements the topic administration operations.
#[async_trait::async_trait]
pub trait TopicAdmin: std::fmt::Debug + Send + Sync {
    /// Creates a topic, fails with `AlreadyExists` if the name is in use.
    async fn create_topic(&self, req: Topic) -> Result<Topic>;

    /// Gets the configuration of a topic.
    async fn get_topic(&self, name: String) -> Result<Topic>;

    /// Deletes a topic. Subscriptions on the topic are detached, not deleted.
    async fn delete_topic(&self, name: String) -> Result<()>;
}

/// Implements the subscription administration operations.
#[async_trait::async_trait]
pub trait SubscriptionAdmin: std::fmt::Debug + Send + Sync {
    /// Creates a subscription bound to `req.topic`.
    async fn create_subscription(&self, req: Subscription) -> Result<Subscription>;

    /// Gets the configuration of a subscription.
    async fn get_subscription(&self, name: String) -> Result<Subscription>;

    /// Deletes a subscription, dropping any messages it retains.
    async fn delete_subscription(&self, name: String) -> Result<()>;
}

/// Implements the publish operation.
#[async_trait::async_trait]
pub trait Publisher: std::fmt::Debug + Send + Sync {
    /// Publishes a batch of messages, returning their ids in the same order.
    async fn publish(&self, topic: String, messages: Vec<Message>) -> Result<Vec<String>>;
}

/// Implements the pull and acknowledgement operations.
#[async_trait::async_trait]
pub trait Subscriber: std::fmt::Debug + Send + Sync {
    /// Pulls up to `max_messages` from a subscription.
    ///
    /// Implementations may wait for messages to become available, but must
    /// eventually return, possibly with an empty batch.
    async fn pull(&self, subscription: String, max_messages: i32) -> Result<Vec<ReceivedMessage>>;

    /// Acknowledges the deliveries identified by `ack_ids`.
    async fn acknowledge(&self, subscription: String, ack_ids: Vec<String>) -> Result<()>;

    /// Changes the ack deadline for the deliveries identified by `ack_ids`.
    ///
    /// A deadline of zero makes the messages immediately available for
    /// redelivery.
    async fn modify_ack_deadline(
        &self,
        subscription: String,
        ack_ids: Vec<String>,
        ack_deadline_seconds: i32,
    ) -> Result<()>;
}

/// [mockall] mocks of every stub, for tests that inject failures.
///
/// Enabled in other crates with the `test-mocks` feature.
///
/// # Example
/// ```
/// # #[cfg(feature = "test-mocks")]
/// # fn sample() {
/// use quickstart_pubsub::{client::TopicAdmin, stub::mocks::MockTopicAdmin, Error};
/// let mut mock = MockTopicAdmin::new();
/// mock.expect_create_topic()
///     .returning(|r| Err(Error::AlreadyExists(r.name)));
/// let client = TopicAdmin::from_stub(mock);
/// # }
/// ```
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks {
    use super::*;

    mockall::mock! {
        #[derive(Debug)]
        pub TopicAdmin {}
        #[async_trait::async_trait]
        impl super::TopicAdmin for TopicAdmin {
            async fn create_topic(&self, req: Topic) -> Result<Topic>;
            async fn get_topic(&self, name: String) -> Result<Topic>;
            async fn delete_topic(&self, name: String) -> Result<()>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        pub SubscriptionAdmin {}
        #[async_trait::async_trait]
        impl super::SubscriptionAdmin for SubscriptionAdmin {
            async fn create_subscription(&self, req: Subscription) -> Result<Subscription>;
            async fn get_subscription(&self, name: String) -> Result<Subscription>;
            async fn delete_subscription(&self, name: String) -> Result<()>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        pub Publisher {}
        #[async_trait::async_trait]
        impl super::Publisher for Publisher {
            async fn publish(&self, topic: String, messages: Vec<Message>) -> Result<Vec<String>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        pub Subscriber {}
        #[async_trait::async_trait]
        impl super::Subscriber for Subscriber {
            async fn pull(&self, subscription: String, max_messages: i32) -> Result<Vec<ReceivedMessage>>;
            async fn acknowledge(&self, subscription: String, ack_ids: Vec<String>) -> Result<()>;
            async fn modify_ack_deadline(&self, subscription: String, ack_ids: Vec<String>, ack_deadline_seconds: i32) -> Result<()>;
        }
    }
}
