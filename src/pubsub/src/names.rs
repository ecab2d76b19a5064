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

//! Helpers to format and classify resource names.

use crate::{Error, Result};

/// Returns the full name of a topic.
///
/// # Example
/// ```
/// # use quickstart_pubsub::names::topic_path;
/// assert_eq!(topic_path("my-project", "my-topic"), "projects/my-project/topics/my-topic");
/// ```
pub fn topic_path(project: &str, topic: &str) -> String {
    format!("projects/{project}/topics/{topic}")
}

/// Returns the full name of a subscription.
///
/// # Example
/// ```
/// # use quickstart_pubsub::names::subscription_path;
/// assert_eq!(
///     subscription_path("my-project", "my-sub"),
///     "projects/my-project/subscriptions/my-sub"
/// );
/// ```
pub fn subscription_path(project: &str, subscription: &str) -> String {
    format!("projects/{project}/subscriptions/{subscription}")
}

/// The kind of resource identified by a full resource name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Topic,
    Subscription,
}

impl ResourceKind {
    /// Classifies a full resource name by its collection segment.
    ///
    /// Returns `None` for names that are neither a topic nor a subscription.
    ///
    /// # Example
    /// ```
    /// # use quickstart_pubsub::names::ResourceKind;
    /// assert_eq!(ResourceKind::of("projects/p/topics/t"), Some(ResourceKind::Topic));
    /// assert_eq!(ResourceKind::of("projects/p/subscriptions/s"), Some(ResourceKind::Subscription));
    /// assert_eq!(ResourceKind::of("projects/p/snapshots/s"), None);
    /// ```
    pub fn of(name: &str) -> Option<Self> {
        let mut segments = name.split('/');
        let parts = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        );
        match parts {
            (Some("projects"), Some(project), Some(collection), Some(id), None)
                if !project.is_empty() && !id.is_empty() =>
            {
                match collection {
                    "topics" => Some(Self::Topic),
                    "subscriptions" => Some(Self::Subscription),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// The collection name used in resource names of this kind.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Topic => "topics",
            Self::Subscription => "subscriptions",
        }
    }
}

/// Returns the last segment of a resource name, e.g. the topic id.
pub fn resource_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Returns an error unless `name` is a valid name for a resource of `kind`.
pub fn validate(name: &str, kind: ResourceKind) -> Result<()> {
    match ResourceKind::of(name) {
        Some(k) if k == kind => Ok(()),
        _ => Err(Error::InvalidArgument(format!(
            "{name:?} is not a valid name, expected projects/{{project}}/{}/{{id}}",
            kind.collection()
        ))),
    }
}
