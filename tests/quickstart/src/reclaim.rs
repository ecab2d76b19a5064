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

//! Deletes the quickstart resources, never failing the run.

use quickstart_pubsub::Error;
use quickstart_pubsub::client::{SubscriptionAdmin, TopicAdmin};
use quickstart_pubsub::names::ResourceKind;

/// What happened to each resource passed to [reclaim].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReclaimReport {
    /// Resources deleted successfully.
    pub deleted: Vec<String>,
    /// Resources that could not be deleted, with the error.
    pub failed: Vec<(String, Error)>,
    /// Names that are neither a topic nor a subscription.
    pub skipped: Vec<String>,
}

impl ReclaimReport {
    /// Returns true if every resource was deleted.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

/// Deletes each resource in `names`, in order.
///
/// Each name is dispatched on its collection segment (`topics` or
/// `subscriptions`), not on a substring match, so a subscription id that
/// contains "topics" is still deleted as a subscription. Failures are logged
/// and recorded in the report.
pub async fn reclaim<I, S>(
    topics: &TopicAdmin,
    subscriptions: &SubscriptionAdmin,
    names: I,
) -> ReclaimReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ReclaimReport::default();
    for name in names {
        let name = name.as_ref();
        let result = match ResourceKind::of(name) {
            Some(ResourceKind::Topic) => topics.delete_topic().set_topic(name).send().await,
            Some(ResourceKind::Subscription) => {
                subscriptions
                    .delete_subscription()
                    .set_subscription(name)
                    .send()
                    .await
            }
            None => {
                tracing::warn!("skipping {name}, it is not a topic or subscription name");
                report.skipped.push(name.to_string());
                continue;
            }
        };
        match result {
            Ok(()) => {
                tracing::info!("deleted {name}");
                report.deleted.push(name.to_string());
            }
            Err(e) => {
                tracing::warn!("cannot delete {name}: {e}");
                report.failed.push((name.to_string(), e));
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickstart_pubsub::stub::mocks::{MockSubscriptionAdmin, MockTopicAdmin};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn dispatch_by_kind() {
        let mut topics = MockTopicAdmin::new();
        topics
            .expect_delete_topic()
            .withf(|n| n == "projects/p/topics/subscriptions")
            .times(1)
            .returning(|_| Ok(()));
        let mut subscriptions = MockSubscriptionAdmin::new();
        subscriptions
            .expect_delete_subscription()
            .withf(|n| n == "projects/p/subscriptions/topics-mirror")
            .times(1)
            .returning(|_| Ok(()));

        let report = reclaim(
            &TopicAdmin::from_stub(topics),
            &SubscriptionAdmin::from_stub(subscriptions),
            [
                "projects/p/subscriptions/topics-mirror",
                "projects/p/topics/subscriptions",
            ],
        )
        .await;
        assert_eq!(
            report,
            ReclaimReport {
                deleted: vec![
                    "projects/p/subscriptions/topics-mirror".to_string(),
                    "projects/p/topics/subscriptions".to_string(),
                ],
                ..Default::default()
            }
        );
        assert!(report.is_clean(), "{report:?}");
    }

    #[tokio::test]
    async fn failures_are_recorded() {
        let mut topics = MockTopicAdmin::new();
        topics
            .expect_delete_topic()
            .times(1)
            .returning(|n| Err(Error::NotFound(n)));
        let mut subscriptions = MockSubscriptionAdmin::new();
        subscriptions
            .expect_delete_subscription()
            .times(1)
            .returning(|_| Err(Error::Unavailable("try again".into())));

        let report = reclaim(
            &TopicAdmin::from_stub(topics),
            &SubscriptionAdmin::from_stub(subscriptions),
            vec![
                "projects/p/subscriptions/s".to_string(),
                "projects/p/snapshots/s".to_string(),
                "projects/p/topics/t".to_string(),
            ],
        )
        .await;
        assert!(!report.is_clean(), "{report:?}");
        assert!(report.deleted.is_empty(), "{report:?}");
        assert_eq!(report.skipped, vec!["projects/p/snapshots/s".to_string()]);
        let failed = report
            .failed
            .iter()
            .map(|(n, _)| n.as_str())
            .collect::<Vec<_>>();
        assert_eq!(failed, vec!["projects/p/subscriptions/s", "projects/p/topics/t"]);
    }
}
