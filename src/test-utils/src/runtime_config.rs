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

use anyhow::{Result, bail};
use std::time::Duration;

const PROJECT_VAR: &str = "GOOGLE_CLOUD_PROJECT";
const FALLBACK_PROJECT_VAR: &str = "GCLOUD_PROJECT";
const SUBSCRIBER_TIMEOUT_VAR: &str = "QUICKSTART_SUBSCRIBER_TIMEOUT";

/// Returns the project id used for the quickstart tests.
///
/// Reads `GOOGLE_CLOUD_PROJECT`, falling back to `GCLOUD_PROJECT`. Empty
/// values are treated as unset.
pub fn project_id() -> Result<String> {
    [PROJECT_VAR, FALLBACK_PROJECT_VAR]
        .into_iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
        .ok_or_else(|| {
            anyhow::anyhow!("neither {PROJECT_VAR} nor {FALLBACK_PROJECT_VAR} is set")
        })
}

/// Returns the subscriber timeout override, if any.
///
/// The value is a whole number of seconds, greater than zero.
pub fn subscriber_timeout() -> Result<Option<Duration>> {
    let Ok(value) = std::env::var(SUBSCRIBER_TIMEOUT_VAR) else {
        return Ok(None);
    };
    let seconds = value.trim().parse::<u64>().map_err(|e| {
        anyhow::anyhow!("{SUBSCRIBER_TIMEOUT_VAR}={value:?} is not a number of seconds: {e}")
    })?;
    if seconds == 0 {
        bail!("{SUBSCRIBER_TIMEOUT_VAR} must be greater than zero");
    }
    Ok(Some(Duration::from_secs(seconds)))
}
