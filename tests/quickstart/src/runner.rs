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

//! Runs the subscriber under test for a bounded amount of time.

use crate::config::{DEFAULT_GRACE_PERIOD, DEFAULT_TIMEOUT};
use crate::output::CapturedOutput;
use crate::{HarnessError, Result};
use std::future::Future;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// How the subscriber stopped.
#[derive(Clone, Debug, PartialEq)]
pub enum Termination {
    /// The subscriber returned successfully before the timeout.
    Completed,
    /// The subscriber returned an error before it was cancelled.
    Failed(String),
    /// The subscriber exited after it was cancelled.
    Cancelled,
    /// The subscriber ignored the cancellation and was aborted.
    Aborted,
    /// The subscriber panicked.
    Panicked(String),
    /// The subscriber process exited on its own, with this exit code.
    Exited(Option<i32>),
    /// The subscriber process outlived the timeout and was killed.
    Killed,
}

impl Termination {
    /// Returns true if the harness had to stop the subscriber.
    ///
    /// This is the normal outcome for subscribers that listen until stopped.
    pub fn is_forced(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Aborted | Self::Killed)
    }
}

/// The result of a subscriber run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Everything the subscriber wrote.
    pub output: CapturedOutput,
    pub termination: Termination,
    /// How long the subscriber ran, including any grace period.
    pub elapsed: Duration,
}

/// Runs a subscriber in isolation, bounded by a timeout.
///
/// # Example
/// ```
/// # use quickstart_harness::{SubscriberRunner, Termination};
/// # use std::io::Write;
/// # use std::time::Duration;
/// # async fn sample() -> anyhow::Result<()> {
/// let runner = SubscriberRunner::new(Duration::from_secs(10));
/// let report = runner
///     .run_bounded(|mut out, cancel| async move {
///         writeln!(out, "Received message: 1 Hello World!")?;
///         cancel.cancelled().await;
///         Ok(())
///     })
///     .await;
/// assert_eq!(report.termination, Termination::Cancelled);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct SubscriberRunner {
    timeout: Duration,
    grace_period: Duration,
}

impl Default for SubscriberRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl SubscriberRunner {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            grace_period: DEFAULT_GRACE_PERIOD,
        }
    }

    /// How long a cancelled subscriber has to exit before it is aborted.
    pub fn with_grace_period(mut self, v: Duration) -> Self {
        self.grace_period = v;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs `entrypoint` on its own task.
    ///
    /// The entrypoint receives the writer for its console output and a
    /// cancellation token. If it returns before the timeout the run ends
    /// early. Otherwise the token is cancelled, and the task is aborted if it
    /// does not exit within the grace period. The token is always cancelled
    /// when this function returns.
    pub async fn run_bounded<F, Fut>(&self, entrypoint: F) -> RunReport
    where
        F: FnOnce(CapturedOutput, CancellationToken) -> Fut,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let output = CapturedOutput::new();
        let cancel = CancellationToken::new();
        let start = Instant::now();
        let mut task = tokio::spawn(entrypoint(output.clone(), cancel.clone()));

        let termination = match tokio::time::timeout(self.timeout, &mut task).await {
            Ok(joined) => termination(joined, Termination::Completed),
            Err(_) => {
                tracing::info!("subscriber still running after {:?}, cancelling it", self.timeout);
                cancel.cancel();
                self.stop(task).await
            }
        };
        cancel.cancel();
        let elapsed = start.elapsed();
        tracing::info!("subscriber stopped after {elapsed:?}: {termination:?}");
        RunReport {
            output,
            termination,
            elapsed,
        }
    }

    /// Runs `command` as a child process.
    ///
    /// The child's stdout and stderr are both captured. A child still running
    /// after the timeout is killed. Failing to start the child is the only
    /// error.
    pub async fn run_process(&self, mut command: Command) -> Result<RunReport> {
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        let start = Instant::now();
        let mut child = command.spawn().map_err(HarnessError::Runner)?;
        let output = CapturedOutput::new();
        let mut pumps = Vec::new();
        if let Some(stdout) = child.stdout.take() {
            pumps.push(tokio::spawn(pump(stdout, output.clone())));
        }
        if let Some(stderr) = child.stderr.take() {
            pumps.push(tokio::spawn(pump(stderr, output.clone())));
        }

        let termination = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(Ok(status)) => Termination::Exited(status.code()),
            Ok(Err(e)) => Termination::Failed(format!("cannot wait for the subscriber: {e}")),
            Err(_) => {
                tracing::info!("subscriber process still running after {:?}, killing it", self.timeout);
                if let Err(e) = child.kill().await {
                    tracing::warn!("cannot kill the subscriber process: {e}");
                }
                Termination::Killed
            }
        };
        // The pipes close when the child exits, unless it left descendants
        // holding them open.
        for mut pump in pumps {
            match tokio::time::timeout(self.grace_period, &mut pump).await {
                Ok(Ok(Ok(()))) => {}
                Ok(Ok(Err(e))) => tracing::warn!("error reading the subscriber output: {e}"),
                Ok(Err(e)) => tracing::warn!("the output reader did not complete: {e}"),
                Err(_) => {
                    tracing::warn!("the subscriber output is still open, giving up on it");
                    pump.abort();
                }
            }
        }
        let elapsed = start.elapsed();
        tracing::info!("subscriber process stopped after {elapsed:?}: {termination:?}");
        Ok(RunReport {
            output,
            termination,
            elapsed,
        })
    }

    async fn stop(&self, mut task: JoinHandle<anyhow::Result<()>>) -> Termination {
        match tokio::time::timeout(self.grace_period, &mut task).await {
            Ok(joined) => termination(joined, Termination::Cancelled),
            Err(_) => {
                tracing::warn!(
                    "subscriber ignored the cancellation for {:?}, aborting it",
                    self.grace_period
                );
                task.abort();
                match task.await {
                    Err(e) if e.is_panic() => Termination::Panicked(panic_message(e)),
                    _ => Termination::Aborted,
                }
            }
        }
    }
}

fn termination(
    joined: std::result::Result<anyhow::Result<()>, JoinError>,
    success: Termination,
) -> Termination {
    match joined {
        Ok(Ok(())) => success,
        Ok(Err(e)) => Termination::Failed(format!("{e:#}")),
        Err(e) if e.is_panic() => Termination::Panicked(panic_message(e)),
        Err(_) => Termination::Aborted,
    }
}

fn panic_message(e: JoinError) -> String {
    let payload = e.into_panic();
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "<non-string panic payload>".to_string())
}

async fn pump<R>(mut reader: R, output: CapturedOutput) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = [0_u8; 4096];
    loop {
        let n = reader.read(&mut buffer).await?;
        if n == 0 {
            return Ok(());
        }
        output.append(&buffer[..n]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const TIMEOUT: Duration = Duration::from_secs(10);

    #[tokio::test(start_paused = true)]
    async fn early_completion() {
        let runner = SubscriberRunner::new(TIMEOUT);
        let report = runner
            .run_bounded(|mut out, _cancel| async move {
                writeln!(out, "Received message: 1 Hello World!")?;
                Ok(())
            })
            .await;
        assert_eq!(report.termination, Termination::Completed);
        assert!(!report.termination.is_forced());
        assert!(report.elapsed < TIMEOUT, "{report:?}");
        assert_eq!(report.output.contents(), "Received message: 1 Hello World!\n");
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_at_timeout() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let runner = SubscriberRunner::new(TIMEOUT);
        let report = runner
            .run_bounded(|mut out, cancel| async move {
                writeln!(out, "listening")?;
                cancel.cancelled().await;
                writeln!(out, "stopping")?;
                let _ = tx.send(cancel);
                Ok(())
            })
            .await;
        assert_eq!(report.termination, Termination::Cancelled);
        assert!(report.termination.is_forced());
        assert!(report.elapsed >= TIMEOUT, "{report:?}");
        assert_eq!(report.output.contents(), "listening\nstopping\n");
        let cancel = rx.await.expect("entrypoint sends its token");
        assert!(cancel.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn aborted_when_cancel_ignored() {
        let grace = Duration::from_millis(100);
        let runner = SubscriberRunner::new(TIMEOUT).with_grace_period(grace);
        let report = runner
            .run_bounded(|mut out, _cancel| async move {
                writeln!(out, "Received message: 1 Hello World!")?;
                loop {
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
            })
            .await;
        assert_eq!(report.termination, Termination::Aborted);
        assert!(report.elapsed >= TIMEOUT + grace, "{report:?}");
        assert!(report.output.contents().contains("Received message"));
    }

    #[tokio::test(start_paused = true)]
    async fn entrypoint_error() {
        let runner = SubscriberRunner::new(TIMEOUT);
        let report = runner
            .run_bounded(|_out, _cancel| async move { anyhow::bail!("subscription not found") })
            .await;
        assert!(
            matches!(report.termination, Termination::Failed(ref m) if m.contains("subscription not found")),
            "{report:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn entrypoint_panic() {
        let runner = SubscriberRunner::new(TIMEOUT);
        let report = runner
            .run_bounded(|mut out, _cancel| async move {
                writeln!(out, "before the panic")?;
                panic!("subscriber exploded");
            })
            .await;
        assert_eq!(
            report.termination,
            Termination::Panicked("subscriber exploded".to_string())
        );
        assert_eq!(report.output.contents(), "before the panic\n");
    }

    #[test]
    fn defaults() {
        let runner = SubscriberRunner::default();
        assert_eq!(runner.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(runner.grace_period, DEFAULT_GRACE_PERIOD);
    }
}
