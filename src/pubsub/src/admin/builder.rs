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

//! Request builders for [TopicAdmin][crate::client::TopicAdmin] and
//! [SubscriptionAdmin][crate::client::SubscriptionAdmin].

use crate::Result;
use crate::model::{Subscription, Topic};
use crate::names::{ResourceKind, validate};
use crate::stub;
use std::sync::Arc;

/// The request builder for [TopicAdmin::create_topic][crate::client::TopicAdmin::create_topic].
#[derive(Clone, Debug)]
pub struct CreateTopic {
    stub: Arc<dyn stub::TopicAdmin>,
    request: Topic,
}

impl CreateTopic {
    pub(crate) fn new(stub: Arc<dyn stub::TopicAdmin>) -> Self {
        Self {
            stub,
            request: Topic::new(),
        }
    }

    /// Sets the full name of the new topic.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.request.name = v.into();
        self
    }

    /// Sets the labels of the new topic.
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request = self.request.set_labels(v);
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Topic> {
        validate(&self.request.name, ResourceKind::Topic)?;
        self.stub.create_topic(self.request).await
    }
}

/// The request builder for [TopicAdmin::get_topic][crate::client::TopicAdmin::get_topic].
#[derive(Clone, Debug)]
pub struct GetTopic {
    stub: Arc<dyn stub::TopicAdmin>,
    topic: String,
}

impl GetTopic {
    pub(crate) fn new(stub: Arc<dyn stub::TopicAdmin>) -> Self {
        Self {
            stub,
            topic: String::new(),
        }
    }

    /// Sets the full name of the topic.
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Topic> {
        validate(&self.topic, ResourceKind::Topic)?;
        self.stub.get_topic(self.topic).await
    }
}

/// The request builder for [TopicAdmin::delete_topic][crate::client::TopicAdmin::delete_topic].
#[derive(Clone, Debug)]
pub struct DeleteTopic {
    stub: Arc<dyn stub::TopicAdmin>,
    topic: String,
}

impl DeleteTopic {
    pub(crate) fn new(stub: Arc<dyn stub::TopicAdmin>) -> Self {
        Self {
            stub,
            topic: String::new(),
        }
    }

    /// Sets the full name of the topic.
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        validate(&self.topic, ResourceKind::Topic)?;
        self.stub.delete_topic(self.topic).await
    }
}

/// The request builder for [SubscriptionAdmin::create_subscription][crate::client::SubscriptionAdmin::create_subscription].
#[derive(Clone, Debug)]
pub struct CreateSubscription {
    stub: Arc<dyn stub::SubscriptionAdmin>,
    request: Subscription,
}

impl CreateSubscription {
    pub(crate) fn new(stub: Arc<dyn stub::SubscriptionAdmin>) -> Self {
        Self {
            stub,
            request: Subscription::new(),
        }
    }

    /// Sets the full name of the new subscription.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.request.name = v.into();
        self
    }

    /// Sets the full name of the topic the subscription is bound to.
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.request.topic = v.into();
        self
    }

    /// Sets the ack deadline for the new subscription.
    pub fn set_ack_deadline_seconds<T: Into<i32>>(mut self, v: T) -> Self {
        self.request.ack_deadline_seconds = v.into();
        self
    }

    /// Sets the labels of the new subscription.
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request = self.request.set_labels(v);
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Subscription> {
        validate(&self.request.name, ResourceKind::Subscription)?;
        validate(&self.request.topic, ResourceKind::Topic)?;
        self.stub.create_subscription(self.request).await
    }
}

/// The request builder for [SubscriptionAdmin::get_subscription][crate::client::SubscriptionAdmin::get_subscription].
#[derive(Clone, Debug)]
pub struct GetSubscription {
    stub: Arc<dyn stub::SubscriptionAdmin>,
    subscription: String,
}

impl GetSubscription {
    pub(crate) fn new(stub: Arc<dyn stub::SubscriptionAdmin>) -> Self {
        Self {
            stub,
            subscription: String::new(),
        }
    }

    /// Sets the full name of the subscription.
    pub fn set_subscription<T: Into<String>>(mut self, v: T) -> Self {
        self.subscription = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Subscription> {
        validate(&self.subscription, ResourceKind::Subscription)?;
        self.stub.get_subscription(self.subscription).await
    }
}

/// The request builder for [SubscriptionAdmin::delete_subscription][crate::client::SubscriptionAdmin::delete_subscription].
#[derive(Clone, Debug)]
pub struct DeleteSubscription {
    stub: Arc<dyn stub::SubscriptionAdmin>,
    subscription: String,
}

impl DeleteSubscription {
    pub(crate) fn new(stub: Arc<dyn stub::SubscriptionAdmin>) -> Self {
        Self {
            stub,
            subscription: String::new(),
        }
    }

    /// Sets the full name of the subscription.
    pub fn set_subscription<T: Into<String>>(mut self, v: T) -> Self {
        self.subscription = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        validate(&self.subscription, ResourceKind::Subscription)?;
        self.stub.delete_subscription(self.subscription).await
    }
}
