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

//! The error type returned by the Pub/Sub clients.

/// The error returned by all the clients in this crate.
///
/// Most applications just return the error or log it. Some need to interrogate
/// it, for example, to treat an "already exists" condition as success when
/// creating a resource. Use the predicates, such as
/// [is_already_exists()][Error::is_already_exists], for that purpose.
///
/// # Example
/// ```
/// use quickstart_pubsub::Error;
/// let error = Error::AlreadyExists("projects/p/topics/t".into());
/// assert!(error.is_already_exists());
/// assert!(!error.is_transient());
/// ```
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The resource already exists.
    #[error("the resource already exists: {0}")]
    AlreadyExists(String),

    /// The resource, or a resource it refers to, does not exist.
    #[error("the resource was not found: {0}")]
    NotFound(String),

    /// The request is malformed, for example, the resource name is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The caller lacks the permissions required for the operation.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The service (or the client background task) is not available.
    #[error("the service is unavailable: {0}")]
    Unavailable(String),

    /// The service returned a response the client cannot use.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// The resource already exists.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }

    /// The resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The request was rejected as malformed.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
