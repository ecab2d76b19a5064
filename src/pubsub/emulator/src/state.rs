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

use super::Operation;
use quickstart_pubsub::model::{
    DEFAULT_ACK_DEADLINE_SECONDS, DELETED_TOPIC, Message, ReceivedMessage, Subscription, Topic,
};
use quickstart_pubsub::names::{ResourceKind, validate};
use quickstart_pubsub::{Error, Result};
use std::collections::{HashMap, VecDeque};
use std::time::Duration;
use tokio::time::Instant;

const MAX_ACK_DEADLINE_SECONDS: i32 = 600;

/// The state of the emulated service.
#[derive(Debug, Default)]
pub(crate) struct State {
    topics: HashMap<String, Topic>,
    subscriptions: HashMap<String, SubscriptionState>,
    faults: HashMap<Operation, VecDeque<Error>>,
    next_message_id: u64,
    next_ack_id: u64,
}

#[derive(Debug)]
struct SubscriptionState {
    config: Subscription,
    pending: VecDeque<Pending>,
    outstanding: HashMap<String, Outstanding>,
    acked: usize,
}

#[derive(Debug)]
struct Pending {
    message: Message,
    delivery_attempt: i32,
}

#[derive(Debug)]
struct Outstanding {
    pending: Pending,
    deadline: Instant,
    /// The delivery order, ack ids do not sort numerically.
    sequence: u64,
}

impl SubscriptionState {
    fn new(config: Subscription) -> Self {
        Self {
            config,
            pending: VecDeque::new(),
            outstanding: HashMap::new(),
            acked: 0,
        }
    }

    /// Returns expired deliveries to the front of the queue.
    fn expire(&mut self, now: Instant) {
        let mut expired = self
            .outstanding
            .iter()
            .filter(|(_, o)| o.deadline <= now)
            .map(|(id, o)| (o.sequence, id.clone()))
            .collect::<Vec<_>>();
        // Keep the redelivery order stable.
        expired.sort_unstable();
        for (_, id) in expired.into_iter().rev() {
            if let Some(o) = self.outstanding.remove(&id) {
                self.pending.push_front(o.pending);
            }
        }
    }
}

impl State {
    pub(crate) fn push_fault(&mut self, operation: Operation, error: Error) {
        self.faults.entry(operation).or_default().push_back(error);
    }

    pub(crate) fn take_fault(&mut self, operation: Operation) -> Result<()> {
        match self.faults.get_mut(&operation).and_then(VecDeque::pop_front) {
            None => Ok(()),
            Some(e) => {
                tracing::debug!("injecting fault for {operation:?}: {e}");
                Err(e)
            }
        }
    }

    pub(crate) fn create_topic(&mut self, req: Topic) -> Result<Topic> {
        validate(&req.name, ResourceKind::Topic)?;
        if self.topics.contains_key(&req.name) {
            return Err(Error::AlreadyExists(req.name));
        }
        self.topics.insert(req.name.clone(), req.clone());
        Ok(req)
    }

    pub(crate) fn get_topic(&self, name: &str) -> Result<Topic> {
        validate(name, ResourceKind::Topic)?;
        self.topics
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Deletes a topic, detaching any subscriptions bound to it.
    pub(crate) fn delete_topic(&mut self, name: &str) -> Result<()> {
        validate(name, ResourceKind::Topic)?;
        if self.topics.remove(name).is_none() {
            return Err(Error::NotFound(name.to_string()));
        }
        self.subscriptions
            .values_mut()
            .filter(|s| s.config.topic == name)
            .for_each(|s| s.config.topic = DELETED_TOPIC.to_string());
        Ok(())
    }

    pub(crate) fn create_subscription(&mut self, req: Subscription) -> Result<Subscription> {
        validate(&req.name, ResourceKind::Subscription)?;
        validate(&req.topic, ResourceKind::Topic)?;
        let req = match req.ack_deadline_seconds {
            0 => req.set_ack_deadline_seconds(DEFAULT_ACK_DEADLINE_SECONDS),
            DEFAULT_ACK_DEADLINE_SECONDS..=MAX_ACK_DEADLINE_SECONDS => req,
            d => {
                return Err(Error::InvalidArgument(format!(
                    "ack deadline must be between {DEFAULT_ACK_DEADLINE_SECONDS} and {MAX_ACK_DEADLINE_SECONDS} seconds, got {d}"
                )));
            }
        };
        if !self.topics.contains_key(&req.topic) {
            return Err(Error::NotFound(req.topic));
        }
        if self.subscriptions.contains_key(&req.name) {
            return Err(Error::AlreadyExists(req.name));
        }
        self.subscriptions
            .insert(req.name.clone(), SubscriptionState::new(req.clone()));
        Ok(req)
    }

    pub(crate) fn get_subscription(&self, name: &str) -> Result<Subscription> {
        validate(name, ResourceKind::Subscription)?;
        self.subscriptions
            .get(name)
            .map(|s| s.config.clone())
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub(crate) fn delete_subscription(&mut self, name: &str) -> Result<()> {
        validate(name, ResourceKind::Subscription)?;
        match self.subscriptions.remove(name) {
            Some(_) => Ok(()),
            None => Err(Error::NotFound(name.to_string())),
        }
    }

    /// Stores the messages in every subscription bound to `topic`.
    pub(crate) fn publish(&mut self, topic: &str, messages: Vec<Message>) -> Result<Vec<String>> {
        validate(topic, ResourceKind::Topic)?;
        if messages.is_empty() {
            return Err(Error::InvalidArgument(
                "a publish request must contain at least one message".into(),
            ));
        }
        if !self.topics.contains_key(topic) {
            return Err(Error::NotFound(topic.to_string()));
        }
        let mut ids = Vec::with_capacity(messages.len());
        for message in messages {
            self.next_message_id += 1;
            let id = self.next_message_id.to_string();
            let message = message.set_message_id(id.clone());
            self.subscriptions
                .values_mut()
                .filter(|s| s.config.topic == topic)
                .for_each(|s| {
                    s.pending.push_back(Pending {
                        message: message.clone(),
                        delivery_attempt: 0,
                    })
                });
            ids.push(id);
        }
        Ok(ids)
    }

    /// Delivers up to `max_messages`, possibly none.
    pub(crate) fn pull(
        &mut self,
        subscription: &str,
        max_messages: i32,
        now: Instant,
    ) -> Result<Vec<ReceivedMessage>> {
        validate(subscription, ResourceKind::Subscription)?;
        if max_messages <= 0 {
            return Err(Error::InvalidArgument(format!(
                "max_messages must be positive, got {max_messages}"
            )));
        }
        let state = self
            .subscriptions
            .get_mut(subscription)
            .ok_or_else(|| Error::NotFound(subscription.to_string()))?;
        state.expire(now);
        let deadline = now + Duration::from_secs(state.config.ack_deadline_seconds as u64);
        let count = state.pending.len().min(max_messages as usize);
        let mut batch = Vec::with_capacity(count);
        for mut pending in state.pending.drain(..count) {
            self.next_ack_id += 1;
            let ack_id = format!("ack-{:06}", self.next_ack_id);
            pending.delivery_attempt += 1;
            batch.push(
                ReceivedMessage::new()
                    .set_ack_id(ack_id.clone())
                    .set_message(pending.message.clone())
                    .set_delivery_attempt(pending.delivery_attempt),
            );
            state
                .outstanding
                .insert(
                    ack_id,
                    Outstanding {
                        pending,
                        deadline,
                        sequence: self.next_ack_id,
                    },
                );
        }
        Ok(batch)
    }

    /// Acknowledges deliveries. Unknown or expired ack ids are ignored.
    pub(crate) fn acknowledge(&mut self, subscription: &str, ack_ids: Vec<String>) -> Result<()> {
        let state = self.subscription_mut(subscription)?;
        for id in ack_ids {
            if state.outstanding.remove(&id).is_some() {
                state.acked += 1;
            }
        }
        Ok(())
    }

    pub(crate) fn modify_ack_deadline(
        &mut self,
        subscription: &str,
        ack_ids: Vec<String>,
        ack_deadline_seconds: i32,
        now: Instant,
    ) -> Result<()> {
        if !(0..=MAX_ACK_DEADLINE_SECONDS).contains(&ack_deadline_seconds) {
            return Err(Error::InvalidArgument(format!(
                "ack deadline must be between 0 and {MAX_ACK_DEADLINE_SECONDS} seconds, got {ack_deadline_seconds}"
            )));
        }
        let state = self.subscription_mut(subscription)?;
        let deadline = now + Duration::from_secs(ack_deadline_seconds as u64);
        for id in ack_ids {
            if let Some(o) = state.outstanding.get_mut(&id) {
                o.deadline = deadline;
            }
        }
        // A zero deadline makes the messages available right away.
        state.expire(now);
        Ok(())
    }

    pub(crate) fn has_topic(&self, name: &str) -> bool {
        self.topics.contains_key(name)
    }

    pub(crate) fn has_subscription(&self, name: &str) -> bool {
        self.subscriptions.contains_key(name)
    }

    pub(crate) fn pending_count(&self, subscription: &str) -> usize {
        self.subscriptions
            .get(subscription)
            .map_or(0, |s| s.pending.len())
    }

    pub(crate) fn outstanding_count(&self, subscription: &str) -> usize {
        self.subscriptions
            .get(subscription)
            .map_or(0, |s| s.outstanding.len())
    }

    pub(crate) fn acked_count(&self, subscription: &str) -> usize {
        self.subscriptions.get(subscription).map_or(0, |s| s.acked)
    }

    fn subscription_mut(&mut self, name: &str) -> Result<&mut SubscriptionState> {
        validate(name, ResourceKind::Subscription)?;
        self.subscriptions
            .get_mut(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }
}
