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

pub mod quickstart_publisher;
pub mod quickstart_subscriber;
pub mod subscriber_stream;
pub mod subscription;
pub mod topic;

use quickstart_pubsub::client::{SubscriptionAdmin, TopicAdmin};
use quickstart_pubsub::model::Topic;
use quickstart_pubsub::names::topic_path;
use quickstart_test_utils::resource_names::{random_subscription_id, random_topic_id};

pub async fn run_topic_samples(
    client: &TopicAdmin,
    project_id: &str,
    topic_names: &mut Vec<String>,
) -> anyhow::Result<()> {
    let topic_id = random_topic_id();
    topic_names.push(topic_path(project_id, &topic_id));

    tracing::info!("running create_topic sample");
    topic::create_topic::sample(client, project_id, &topic_id).await?;
    tracing::info!("running delete_topic sample");
    topic::delete_topic::sample(client, project_id, &topic_id).await?;
    topic_names.pop();

    Ok(())
}

pub async fn run_subscription_samples(
    client: &SubscriptionAdmin,
    project_id: &str,
    topic_id: &str,
    subscription_names: &mut Vec<String>,
) -> anyhow::Result<()> {
    let subscription_id = random_subscription_id();
    subscription_names.push(format!(
        "projects/{project_id}/subscriptions/{subscription_id}"
    ));

    tracing::info!("running create_pull_subscription sample");
    subscription::create_pull_subscription::sample(client, project_id, topic_id, &subscription_id)
        .await?;
    tracing::info!("running delete_subscription sample");
    subscription::delete_subscription::sample(client, project_id, &subscription_id).await?;
    subscription_names.pop();

    Ok(())
}

/// Creates a topic labeled as a test resource.
///
/// The `create-time` label lets a cleanup job find topics leaked by
/// interrupted test runs.
pub async fn create_test_topic(client: &TopicAdmin, project_id: &str) -> anyhow::Result<Topic> {
    let topic_name = topic_path(project_id, &random_topic_id());
    let now = chrono::Utc::now().timestamp().to_string();

    tracing::info!("testing create_topic()");
    let topic = client
        .create_topic()
        .set_name(topic_name)
        .set_labels([("integration-test", "true"), ("create-time", now.as_str())])
        .send()
        .await?;
    tracing::info!("success on create_topic: {topic:?}");

    Ok(topic)
}

pub async fn cleanup_test_topic(client: &TopicAdmin, topic_name: &str) -> anyhow::Result<()> {
    tracing::info!("testing delete_topic()");
    client.delete_topic().set_topic(topic_name).send().await?;
    tracing::info!("success on delete_topic");
    Ok(())
}

pub async fn cleanup_test_subscription(
    client: &SubscriptionAdmin,
    subscription_name: &str,
) -> anyhow::Result<()> {
    tracing::info!("testing delete_subscription()");
    client
        .delete_subscription()
        .set_subscription(subscription_name)
        .send()
        .await?;
    tracing::info!("success on delete_subscription");
    Ok(())
}
