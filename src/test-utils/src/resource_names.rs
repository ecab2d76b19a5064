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

//! Helper functions and types to generate random resource names.

use rand::{Rng, distr::Distribution};

/// A common prefix for resource ids.
///
/// Where possible, we use this prefix for randomly generated resource ids.
pub const PREFIX: &str = "quickstart-testing-";

/// The maximum length used for random topic ids.
///
/// The service accepts up to 255 characters, shorter names are easier to read
/// in the logs.
const TOPIC_ID_LENGTH: usize = 64;

const SUBSCRIPTION_ID_LENGTH: usize = 64;

/// Generate a random topic id.
///
/// Topic ids must start with a letter, the prefix guarantees that.
pub fn random_topic_id() -> String {
    let id = LowercaseAlphanumeric.random_string(TOPIC_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

/// Generate a random subscription id.
pub fn random_subscription_id() -> String {
    let id = LowercaseAlphanumeric.random_string(SUBSCRIPTION_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Sample a `u8`, uniformly distributed over ASCII lowercase letters and numbers: a-z and 0-9.
///
/// # Example
/// ```
/// use quickstart_test_utils::resource_names::LowercaseAlphanumeric;
/// let got: String = LowercaseAlphanumeric.random_string(32);
/// assert_eq!(got.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        LOWERCASE_ALPHANUMERIC_CHARSET[rng.random_range(0..LOWERCASE_ALPHANUMERIC_CHARSET.len())]
    }
}
