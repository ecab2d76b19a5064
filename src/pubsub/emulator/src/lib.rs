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

//! An in-memory Pub/Sub service.
//!
//! Use this crate for end-to-end tests of the quickstart samples. The
//! [Emulator] implements every stub trait in `quickstart_pubsub::stub`, so any
//! client can be created from it. Clones share the same service state.
//!
//! # Example
//! ```
//! use pubsub_emulator::Emulator;
//! use quickstart_pubsub::client::{PublisherClient, TopicAdmin};
//! use quickstart_pubsub::model::Message;
//!
//! # async fn test() -> anyhow::Result<()> {
//! let emulator = Emulator::new();
//! let admin = TopicAdmin::from_stub(emulator.clone());
//! admin.create_topic().set_name("projects/p/topics/t").send().await?;
//!
//! let publisher = PublisherClient::from_stub(emulator.clone()).publisher("projects/p/topics/t");
//! let id = publisher.publish(Message::new().set_data("Hello World!")).await?;
//! assert_eq!(id, "1");
//! # Ok(()) }
//! ```

mod state;

use quickstart_pubsub::model::{Message, ReceivedMessage, Subscription, Topic};
use quickstart_pubsub::{Error, Result, stub};
use state::State;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;

const DEFAULT_PULL_WAIT: Duration = Duration::from_secs(1);

/// The operations of the emulated service, used to inject faults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Operation {
    CreateTopic,
    GetTopic,
    DeleteTopic,
    CreateSubscription,
    GetSubscription,
    DeleteSubscription,
    Publish,
    Pull,
    Acknowledge,
    ModifyAckDeadline,
}

/// An in-memory Pub/Sub service.
///
/// Topics, subscriptions, and messages live only as long as the last clone of
/// the emulator.
#[derive(Clone, Debug)]
pub struct Emulator {
    state: Arc<Mutex<State>>,
    notify: Arc<Notify>,
    pull_wait: Duration,
}

impl Default for Emulator {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            notify: Arc::new(Notify::new()),
            pull_wait: DEFAULT_PULL_WAIT,
        }
    }
}

impl Emulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// How long `pull` waits for messages before returning an empty batch.
    ///
    /// The default is one second.
    pub fn with_pull_wait(mut self, v: Duration) -> Self {
        self.pull_wait = v;
        self
    }

    /// Makes the next call to `operation` fail with `error`.
    ///
    /// Faults for the same operation are consumed in the order they are
    /// injected.
    ///
    /// # Example
    /// ```
    /// # use pubsub_emulator::{Emulator, Operation};
    /// # use quickstart_pubsub::Error;
    /// let emulator = Emulator::new();
    /// emulator.fail_next(Operation::Publish, Error::Unavailable("try again".into()));
    /// ```
    pub fn fail_next(&self, operation: Operation, error: Error) {
        self.lock().push_fault(operation, error);
    }

    /// Returns true if the topic exists.
    pub fn topic_exists(&self, name: &str) -> bool {
        self.lock().has_topic(name)
    }

    /// Returns true if the subscription exists.
    pub fn subscription_exists(&self, name: &str) -> bool {
        self.lock().has_subscription(name)
    }

    /// The number of messages waiting for delivery on a subscription.
    pub fn pending_count(&self, subscription: &str) -> usize {
        self.lock().pending_count(subscription)
    }

    /// The number of messages delivered but not acknowledged yet.
    pub fn outstanding_count(&self, subscription: &str) -> usize {
        self.lock().outstanding_count(subscription)
    }

    /// The number of messages acknowledged on a subscription.
    pub fn acked_count(&self, subscription: &str) -> usize {
        self.lock().acked_count(subscription)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // The state is always consistent between calls, a panic while holding
        // the lock cannot corrupt it.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn call<F, T>(&self, operation: Operation, f: F) -> Result<T>
    where
        F: FnOnce(&mut State) -> Result<T>,
    {
        let mut state = self.lock();
        state.take_fault(operation)?;
        f(&mut state)
    }
}

#[async_trait::async_trait]
impl stub::TopicAdmin for Emulator {
    async fn create_topic(&self, req: Topic) -> Result<Topic> {
        self.call(Operation::CreateTopic, |s| s.create_topic(req))
    }

    async fn get_topic(&self, name: String) -> Result<Topic> {
        self.call(Operation::GetTopic, |s| s.get_topic(&name))
    }

    async fn delete_topic(&self, name: String) -> Result<()> {
        self.call(Operation::DeleteTopic, |s| s.delete_topic(&name))
    }
}

#[async_trait::async_trait]
impl stub::SubscriptionAdmin for Emulator {
    async fn create_subscription(&self, req: Subscription) -> Result<Subscription> {
        self.call(Operation::CreateSubscription, |s| s.create_subscription(req))
    }

    async fn get_subscription(&self, name: String) -> Result<Subscription> {
        self.call(Operation::GetSubscription, |s| s.get_subscription(&name))
    }

    async fn delete_subscription(&self, name: String) -> Result<()> {
        self.call(Operation::DeleteSubscription, |s| {
            s.delete_subscription(&name)
        })
    }
}

#[async_trait::async_trait]
impl stub::Publisher for Emulator {
    async fn publish(&self, topic: String, messages: Vec<Message>) -> Result<Vec<String>> {
        let ids = self.call(Operation::Publish, |s| s.publish(&topic, messages))?;
        tracing::debug!("published {} message(s) to {topic}", ids.len());
        self.notify.notify_waiters();
        Ok(ids)
    }
}

#[async_trait::async_trait]
impl stub::Subscriber for Emulator {
    async fn pull(&self, subscription: String, max_messages: i32) -> Result<Vec<ReceivedMessage>> {
        self.call(Operation::Pull, |_| Ok(()))?;
        let deadline = Instant::now() + self.pull_wait;
        loop {
            // Register for wake ups before looking at the state, so a publish
            // between the check and the wait is not lost.
            let notified = self.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            {
                let batch = self
                    .lock()
                    .pull(&subscription, max_messages, Instant::now())?;
                if !batch.is_empty() {
                    return Ok(batch);
                }
            }
            if tokio::time::timeout_at(deadline, notified).await.is_err() {
                return Ok(Vec::new());
            }
        }
    }

    async fn acknowledge(&self, subscription: String, ack_ids: Vec<String>) -> Result<()> {
        self.call(Operation::Acknowledge, |s| {
            s.acknowledge(&subscription, ack_ids)
        })
    }

    async fn modify_ack_deadline(
        &self,
        subscription: String,
        ack_ids: Vec<String>,
        ack_deadline_seconds: i32,
    ) -> Result<()> {
        let nacked = ack_deadline_seconds == 0;
        self.call(Operation::ModifyAckDeadline, |s| {
            s.modify_ack_deadline(&subscription, ack_ids, ack_deadline_seconds, Instant::now())
        })?;
        if nacked {
            self.notify.notify_waiters();
        }
        Ok(())
    }
}
