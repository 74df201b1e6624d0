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

use crate::wire::TagsPayload;

/// Network tags of an instance. Tags identify valid sources or targets for
/// network firewall rules.
///
/// The fingerprint is a server-assigned hash of the tag contents; the service
/// requires the current fingerprint on tag updates to detect concurrent
/// modification. Callers never set it themselves.
///
/// # Examples
/// ```
/// # use google_cloud_compute_model::Tags;
/// let tags = Tags::new(["http-server", "https-server"]);
/// assert_eq!(tags.values(), ["http-server", "https-server"]);
/// assert!(tags.fingerprint().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tags {
    values: Option<Vec<String>>,
    fingerprint: Option<String>,
}

impl Tags {
    /// Creates a tag collection from the given values.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: Some(values.into_iter().map(Into::into).collect()),
            fingerprint: None,
        }
    }

    /// The tag values, in insertion order.
    pub fn values(&self) -> &[String] {
        self.values.as_deref().unwrap_or_default()
    }

    /// The server-assigned fingerprint of the tag contents.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Converts a wire payload into a tag collection.
    pub fn from_wire(payload: &TagsPayload) -> Self {
        Self {
            values: payload.items.clone(),
            fingerprint: payload.fingerprint.clone(),
        }
    }

    /// Projects the tag collection to its wire form.
    pub fn to_wire(&self) -> TagsPayload {
        TagsPayload {
            items: self.values.clone(),
            fingerprint: self.fingerprint.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roundtrip() {
        let payload = serde_json::from_value::<TagsPayload>(json!({
            "items": ["http-server"],
            "fingerprint": "42WmSpB8rSM="
        }))
        .unwrap();
        let tags = Tags::from_wire(&payload);
        assert_eq!(tags.values(), ["http-server"]);
        assert_eq!(tags.fingerprint(), Some("42WmSpB8rSM="));
        assert_eq!(tags.to_wire(), payload);
    }

    #[test]
    fn absent_items_round_trip_absent() {
        let tags = Tags::from_wire(&TagsPayload::default());
        assert!(tags.values().is_empty());
        assert!(tags.fingerprint().is_none());
        // An absent items key stays absent; only an explicit empty list
        // renders as `[]`.
        assert_eq!(tags.to_wire().items, None);
        assert_eq!(Tags::new(Vec::<String>::new()).to_wire().items, Some(Vec::new()));
    }
}
