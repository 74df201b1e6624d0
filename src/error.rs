// Copyright 2025 Google LLC
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

pub(crate) type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Failures produced while building or mapping instance resources.
///
/// This crate performs no I/O. Every error is a deterministic function of its
/// input: either a required field was missing when an instance was finalized,
/// or a wire payload field did not conform to the expected format. Nothing
/// here is retryable.
///
/// # Examples
/// ```
/// # use google_cloud_compute_model::InstanceId;
/// let err = InstanceId::from_url("https://example.com/no/projects-here").unwrap_err();
/// assert!(err.is_malformed_wire_data());
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A required field was missing when `build()` was called.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Describes the missing or invalid field.
        message: String,
    },

    /// A wire payload field did not conform to the expected format.
    ///
    /// Mapping a payload is all-or-nothing: the first malformed field aborts
    /// the conversion and no partial resource is produced.
    #[error("malformed wire data: {message}")]
    MalformedWireData {
        /// Describes the offending field and value.
        message: String,
        /// The underlying parser error, if any.
        #[source]
        source: Option<BoxedError>,
    },
}

impl Error {
    pub(crate) fn invalid_argument<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn malformed<T: Into<String>>(message: T) -> Self {
        Self::MalformedWireData {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn malformed_with_source<T, E>(message: T, source: E) -> Self
    where
        T: Into<String>,
        E: Into<BoxedError>,
    {
        Self::MalformedWireData {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns true if a required field was missing at build time.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns true if a wire payload field failed to parse.
    pub fn is_malformed_wire_data(&self) -> bool {
        matches!(self, Self::MalformedWireData { .. })
    }
}
