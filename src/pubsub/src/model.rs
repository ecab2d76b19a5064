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

//! The resources and messages exchanged with the service.

use bytes::Bytes;
use std::collections::HashMap;

/// The default ack deadline for new subscriptions.
pub const DEFAULT_ACK_DEADLINE_SECONDS: i32 = 10;

/// A topic resource.
///
/// # Example
/// ```
/// # use quickstart_pubsub::model::Topic;
/// let topic = Topic::new()
///     .set_name("projects/my-project/topics/my-topic")
///     .set_labels([("integration-test", "true")]);
/// assert_eq!(topic.labels.get("integration-test").map(String::as_str), Some("true"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Topic {
    /// The name of the topic, in `projects/{project}/topics/{topic}` format.
    pub name: String,

    /// Labels attached to the topic.
    pub labels: HashMap<String, String>,
}

impl Topic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Topic::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [labels][Topic::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// A subscription resource.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Subscription {
    /// The name of the subscription, in
    /// `projects/{project}/subscriptions/{subscription}` format.
    pub name: String,

    /// The name of the topic this subscription is bound to.
    ///
    /// The service sets this to [DELETED_TOPIC] once the topic is deleted.
    pub topic: String,

    /// How long the service waits for an acknowledgement before it
    /// redelivers a message.
    pub ack_deadline_seconds: i32,

    /// Labels attached to the subscription.
    pub labels: HashMap<String, String>,
}

/// The value of [Subscription::topic] after the topic is deleted.
pub const DELETED_TOPIC: &str = "_deleted-topic_";

impl Default for Subscription {
    fn default() -> Self {
        Self {
            name: String::new(),
            topic: String::new(),
            ack_deadline_seconds: DEFAULT_ACK_DEADLINE_SECONDS,
            labels: HashMap::new(),
        }
    }
}

impl Subscription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Subscription::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [topic][Subscription::topic].
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }

    /// Sets the value of [ack_deadline_seconds][Subscription::ack_deadline_seconds].
    pub fn set_ack_deadline_seconds<T: Into<i32>>(mut self, v: T) -> Self {
        self.ack_deadline_seconds = v.into();
        self
    }

    /// Sets the value of [labels][Subscription::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Returns true if the topic for this subscription was deleted.
    pub fn is_detached(&self) -> bool {
        self.topic == DELETED_TOPIC
    }
}

/// A message published to a topic.
///
/// # Example
/// ```
/// # use quickstart_pubsub::model::Message;
/// let message = Message::new().set_data("Hello World!");
/// assert_eq!(message.data.as_ref(), b"Hello World!");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Message {
    /// The message payload.
    pub data: Bytes,

    /// Optional attributes for the message.
    pub attributes: HashMap<String, String>,

    /// The id assigned by the service when the message is published.
    ///
    /// Applications should leave this empty when publishing.
    pub message_id: String,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [data][Message::data].
    pub fn set_data<T: Into<Bytes>>(mut self, v: T) -> Self {
        self.data = v.into();
        self
    }

    /// Sets the value of [attributes][Message::attributes].
    pub fn set_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [message_id][Message::message_id].
    pub fn set_message_id<T: Into<String>>(mut self, v: T) -> Self {
        self.message_id = v.into();
        self
    }
}

/// A message delivered to a subscriber, with the id used to acknowledge it.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ReceivedMessage {
    /// The id used to acknowledge (or reject) this delivery.
    pub ack_id: String,

    /// The message.
    pub message: Message,

    /// How many times the service has delivered this message, starting at 1.
    pub delivery_attempt: i32,
}

impl ReceivedMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [ack_id][ReceivedMessage::ack_id].
    pub fn set_ack_id<T: Into<String>>(mut self, v: T) -> Self {
        self.ack_id = v.into();
        self
    }

    /// Sets the value of [message][ReceivedMessage::message].
    pub fn set_message(mut self, v: Message) -> Self {
        self.message = v;
        self
    }

    /// Sets the value of [delivery_attempt][ReceivedMessage::delivery_attempt].
    pub fn set_delivery_attempt<T: Into<i32>>(mut self, v: T) -> Self {
        self.delivery_attempt = v.into();
        self
    }
}
