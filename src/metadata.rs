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

use crate::wire::{MetadataItemPayload, MetadataPayload};

/// Key/value configuration attached to an instance, readable from inside the
/// guest through the metadata server.
///
/// Entries preserve insertion order. The fingerprint is a server-assigned
/// hash used for optimistic locking on metadata updates; callers never set it
/// themselves.
///
/// # Examples
/// ```
/// # use google_cloud_compute_model::Metadata;
/// let metadata = Metadata::new().add("startup-script-url", "gs://bucket/startup.sh");
/// assert_eq!(metadata.items().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    fingerprint: Option<String>,
    items: Option<Vec<(String, String)>>,
}

impl Metadata {
    /// Creates an empty metadata collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry.
    pub fn add<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.items
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Replaces all entries. The input is copied; later changes to the
    /// caller's collection do not affect this value.
    pub fn set_items<I: Into<Vec<(String, String)>>>(mut self, items: I) -> Self {
        self.items = Some(items.into());
        self
    }

    /// The entries, in insertion order.
    pub fn items(&self) -> &[(String, String)] {
        self.items.as_deref().unwrap_or_default()
    }

    /// The server-assigned fingerprint of the metadata contents.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Converts a wire payload into a metadata collection.
    pub fn from_wire(payload: &MetadataPayload) -> Self {
        let items = payload.items.as_deref().map(|items| {
            items
                .iter()
                .map(|item| {
                    (
                        item.key.clone().unwrap_or_default(),
                        item.value.clone().unwrap_or_default(),
                    )
                })
                .collect()
        });
        Self {
            fingerprint: payload.fingerprint.clone(),
            items,
        }
    }

    /// Projects the metadata collection to its wire form.
    pub fn to_wire(&self) -> MetadataPayload {
        MetadataPayload {
            fingerprint: self.fingerprint.clone(),
            items: self.items.as_ref().map(|items| {
                items
                    .iter()
                    .map(|(key, value)| MetadataItemPayload {
                        key: Some(key.clone()),
                        value: Some(value.clone()),
                    })
                    .collect()
            }),
        }
    }
}
