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

//! Pub/Sub clients for the quickstart samples.
//!
//! This crate contains the types and clients the quickstart samples use to
//! create topics and subscriptions, publish messages, and receive them through
//! a streaming pull session.
//!
//! Every client is a thin wrapper around a [stub] trait object. Applications
//! (and tests) provide the stub with `from_stub()`. The `pubsub-emulator`
//! crate implements all the stubs with an in-memory service, and
//! [mockall](https://docs.rs/mockall) mocks can implement them to inject
//! faults.

pub mod error;
pub mod model;
pub mod names;
pub mod stub;

pub(crate) mod admin;
pub(crate) mod publisher;
pub mod subscriber;

pub use error::Error;

/// The result type for all the clients in this crate.
pub type Result<T> = std::result::Result<T, Error>;

pub mod builder {
    pub mod topic_admin {
        pub use crate::admin::builder::{CreateTopic, DeleteTopic, GetTopic};
    }
    pub mod subscription_admin {
        pub use crate::admin::builder::{CreateSubscription, DeleteSubscription, GetSubscription};
    }
    pub mod subscriber {
        pub use crate::subscriber::builder::StreamingPull;
    }
}

pub mod client {
    pub use crate::admin::{SubscriptionAdmin, TopicAdmin};
    pub use crate::publisher::client::{Publisher, PublisherClient};
    pub use crate::subscriber::client::Subscriber;
}

pub mod model_ext {
    pub use crate::publisher::model_ext::PublishFuture;
}
