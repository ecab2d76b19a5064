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

// [START pubsub_quickstart_subscriber]
use quickstart_pubsub::client::Subscriber;
use std::io::Write;
use tokio_util::sync::CancellationToken;

pub async fn sample<W>(
    client: &Subscriber,
    project_id: &str,
    subscription_id: &str,
    mut out: W,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    W: Write + Send,
{
    let subscription_name = format!("projects/{project_id}/subscriptions/{subscription_id}");
    let mut session = client.streaming_pull(subscription_name).start();

    writeln!(out, "Listening for messages on {subscription_id}...")?;

    // Applications typically process messages indefinitely in a long-running
    // loop. This example stops when `cancel` is triggered.
    loop {
        let item = tokio::select! {
            _ = cancel.cancelled() => break,
            item = session.next() => item,
        };
        let Some(item) = item else {
            break;
        };
        let (message, handler) = match item {
            Ok(item) => item,
            // The session stays open after transient errors.
            Err(e) if e.is_transient() => {
                tracing::warn!("error receiving messages, retrying: {e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        writeln!(
            out,
            "Received message: {} {}",
            message.message_id,
            String::from_utf8_lossy(&message.data)
        )?;
        handler.ack();
        writeln!(out, "Acknowledged message: {}", message.message_id)?;
    }

    session.close().await;
    writeln!(out, "Done listening for messages")?;
    Ok(())
}
// [END pubsub_quickstart_subscriber]
