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

//! Run subscribers as child processes.

#[cfg(unix)]
mod process {
    use pubsub_emulator::Emulator;
    use quickstart_harness::verify::{ACKNOWLEDGED, verify};
    use quickstart_harness::*;
    use std::time::Duration;
    use tokio::process::Command;

    fn sh(script: &str) -> Command {
        let mut command = Command::new("sh");
        command.arg("-c").arg(script);
        command
    }

    #[tokio::test]
    async fn captures_stdout_and_stderr() -> anyhow::Result<()> {
        let runner = SubscriberRunner::new(Duration::from_secs(10));
        let report = runner
            .run_process(sh(
                "echo 'Received message: 1 Hello World!'; echo 'Acknowledged message: 1' >&2",
            ))
            .await?;
        assert_eq!(report.termination, Termination::Exited(Some(0)));
        verify(&report.output.contents())?;
        assert!(report.elapsed < Duration::from_secs(10), "{report:?}");
        Ok(())
    }

    #[tokio::test]
    async fn exit_code() -> anyhow::Result<()> {
        let runner = SubscriberRunner::new(Duration::from_secs(10));
        let report = runner.run_process(sh("echo oops; exit 3")).await?;
        assert_eq!(report.termination, Termination::Exited(Some(3)));
        assert_eq!(report.output.contents(), "oops\n");
        Ok(())
    }

    #[tokio::test]
    async fn long_running_process_is_killed() -> anyhow::Result<()> {
        let runner = SubscriberRunner::new(Duration::from_millis(500))
            .with_grace_period(Duration::from_millis(500));
        let report = runner
            .run_process(sh("echo 'Received message: 1 Hello World!'; exec sleep 30"))
            .await?;
        assert_eq!(report.termination, Termination::Killed);
        assert!(report.termination.is_forced());
        assert!(report.elapsed < Duration::from_secs(10), "{report:?}");
        let got = verify(&report.output.contents());
        assert!(
            matches!(got, Err(VerificationError::Missing { ref phrases, .. }) if phrases == &vec![ACKNOWLEDGED]),
            "{got:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_binary() {
        let runner = SubscriberRunner::new(Duration::from_secs(1));
        let got = runner
            .run_process(Command::new("/nonexistent/quickstart-subscriber"))
            .await;
        assert!(matches!(got, Err(HarnessError::Runner(_))), "{got:?}");
    }

    #[tokio::test]
    async fn quickstart_with_child_process() -> anyhow::Result<()> {
        let emulator = Emulator::new();
        let config = HarnessConfig::new("test-project").with_timeout(Duration::from_secs(10));
        let quickstart = Quickstart::new(config, Clients::from_stub(emulator.clone()));

        let mut command = sh(r#"echo "Received message: from $SUBSCRIPTION"; echo "Acknowledged message""#);
        command.env("SUBSCRIPTION", quickstart.config().subscription_path());
        let outcome = quickstart.run_process(command).await?;
        outcome.assert_verified();
        assert_eq!(outcome.run.termination, Termination::Exited(Some(0)));
        assert!(
            outcome
                .run
                .output
                .contents()
                .contains("projects/test-project/subscriptions/quickstart-sub-test-topic-sub"),
            "{outcome:?}"
        );
        assert!(outcome.reclaim.is_clean(), "{outcome:?}");
        assert!(!emulator.topic_exists(&quickstart.config().topic_path()));
        Ok(())
    }

    #[tokio::test]
    async fn spawn_failure_reclaims_resources() {
        let emulator = Emulator::new();
        let quickstart = Quickstart::new(
            HarnessConfig::new("test-project"),
            Clients::from_stub(emulator.clone()),
        );
        let got = quickstart
            .run_process(Command::new("/nonexistent/quickstart-subscriber"))
            .await;
        assert!(matches!(got, Err(HarnessError::Runner(_))), "{got:?}");
        assert!(!emulator.topic_exists(&quickstart.config().topic_path()));
        assert!(!emulator.subscription_exists(&quickstart.config().subscription_path()));
    }
}
