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

use crate::{HarnessError, Result};
use bytes::Bytes;
use quickstart_pubsub::client::Publisher;
use quickstart_pubsub::model::Message;

/// Publishes `payload` and waits until the service confirms it.
///
/// Returns the message id assigned by the service.
pub async fn publish(publisher: &Publisher, payload: Bytes) -> Result<String> {
    let pending = publisher.publish(Message::new().set_data(payload));
    let message_id = pending.await.map_err(|source| HarnessError::Publish {
        topic: publisher.topic().to_string(),
        source,
    })?;
    tracing::info!("published message {message_id} to {}", publisher.topic());
    Ok(message_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickstart_pubsub::stub::mocks::MockPublisher;
    use quickstart_pubsub::Error;
    use quickstart_pubsub::client::PublisherClient;

    const TOPIC: &str = "projects/p/topics/t";

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockPublisher::new();
        mock.expect_publish()
            .withf(|t, m| t == TOPIC && m.len() == 1 && m[0].data.as_ref() == b"Hello World!")
            .return_once(|_, _| Ok(vec!["42".to_string()]));

        let publisher = PublisherClient::from_stub(mock).publisher(TOPIC);
        let id = publish(&publisher, Bytes::from_static(b"Hello World!")).await?;
        assert_eq!(id, "42");
        Ok(())
    }

    #[tokio::test]
    async fn failure() {
        let mut mock = MockPublisher::new();
        mock.expect_publish()
            .return_once(|t, _| Err(Error::NotFound(t)));

        let publisher = PublisherClient::from_stub(mock).publisher(TOPIC);
        let got = publish(&publisher, Bytes::from_static(b"Hello World!")).await;
        assert!(
            matches!(got, Err(HarnessError::Publish { ref topic, source: Error::NotFound(_) }) if topic == TOPIC),
            "{got:?}"
        );
    }
}
