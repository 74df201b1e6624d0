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

use crate::error::Error;
use crate::wire::ServiceAccountPayload;

/// A service account bound to an instance, with the authorization scopes
/// granted to it. Software running on the instance obtains access tokens for
/// this account through the metadata server.
///
/// # Examples
/// ```
/// # use google_cloud_compute_model::ServiceAccount;
/// let account = ServiceAccount::of(
///     "default",
///     ["https://www.googleapis.com/auth/devstorage.read_only"],
/// );
/// assert_eq!(account.email(), "default");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceAccount {
    email: String,
    scopes: Vec<String>,
}

impl ServiceAccount {
    /// Creates a service account entry from an email and its scopes.
    pub fn of<E, I, S>(email: E, scopes: I) -> Self
    where
        E: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            email: email.into(),
            scopes: scopes.into_iter().map(Into::into).collect(),
        }
    }

    /// The service account email, or `default` for the project default.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The authorization scopes granted to the account.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Converts a wire payload into a service account entry.
    pub fn from_wire(payload: &ServiceAccountPayload) -> Result<Self, Error> {
        let email = payload
            .email
            .clone()
            .ok_or_else(|| Error::malformed("service account payload missing email"))?;
        Ok(Self {
            email,
            scopes: payload.scopes.clone().unwrap_or_default(),
        })
    }

    /// Projects the service account entry to its wire form.
    pub fn to_wire(&self) -> ServiceAccountPayload {
        ServiceAccountPayload {
            email: Some(self.email.clone()),
            scopes: Some(self.scopes.clone()),
        }
    }
}
