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

//! The wire schema exchanged with the Compute Engine REST API.
//!
//! These structs mirror the service's JSON resource payloads: flat, loosely
//! typed, with every field optional. Fields that are unset serialize to
//! nothing at all, never to an explicit `null`, as the service's partial
//! update protocol requires. The strongly typed counterparts live in the rest
//! of the crate and convert through `from_wire`/`to_wire`.

use serde::{Deserialize, Serialize};

/// A virtual machine instance resource payload.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstancePayload {
    /// Server-assigned numeric identifier, in decimal string form.
    pub id: Option<String>,
    /// The instance name. Redundant with `self_link` on the read path.
    pub name: Option<String>,
    /// The canonical URL of the instance.
    pub self_link: Option<String>,
    /// The URL of the zone hosting the instance.
    pub zone: Option<String>,
    /// Creation time in RFC 3339 format.
    pub creation_timestamp: Option<String>,
    /// User-supplied description.
    pub description: Option<String>,
    /// The status name, e.g. `RUNNING`.
    pub status: Option<String>,
    /// Human-readable explanation of the status.
    pub status_message: Option<String>,
    /// Network tags.
    pub tags: Option<TagsPayload>,
    /// The URL of the machine type.
    pub machine_type: Option<String>,
    /// Whether IP forwarding is enabled.
    pub can_ip_forward: Option<bool>,
    /// Network interfaces attached to the instance.
    pub network_interfaces: Option<Vec<NetworkInterfacePayload>>,
    /// Disks attached to the instance.
    pub disks: Option<Vec<AttachedDiskPayload>>,
    /// Key/value metadata.
    pub metadata: Option<MetadataPayload>,
    /// Service accounts authorized for the instance.
    pub service_accounts: Option<Vec<ServiceAccountPayload>>,
    /// Scheduling policy.
    pub scheduling: Option<SchedulingPayload>,
    /// CPU platform reported by the service.
    pub cpu_platform: Option<String>,
}

/// Network tags attached to an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct TagsPayload {
    pub items: Option<Vec<String>>,
    /// Server-assigned hash of the tag contents, used for optimistic locking.
    pub fingerprint: Option<String>,
}

/// A disk attached to an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachedDiskPayload {
    pub device_name: Option<String>,
    /// The URL of the source persistent disk.
    pub source: Option<String>,
    pub boot: Option<bool>,
    pub auto_delete: Option<bool>,
    /// Disk interface, `SCSI` or `NVME`.
    pub interface: Option<String>,
    /// Attach mode, `READ_WRITE` or `READ_ONLY`.
    pub mode: Option<String>,
}

/// A network interface of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkInterfacePayload {
    pub name: Option<String>,
    /// The URL of the network.
    pub network: Option<String>,
    /// The URL of the subnetwork.
    pub subnetwork: Option<String>,
    #[serde(rename = "networkIP")]
    pub network_ip: Option<String>,
    pub access_configs: Option<Vec<AccessConfigPayload>>,
}

/// An access configuration granting an interface external connectivity.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AccessConfigPayload {
    pub name: Option<String>,
    #[serde(rename = "natIP")]
    pub nat_ip: Option<String>,
    /// The only supported value is `ONE_TO_ONE_NAT`.
    pub r#type: Option<String>,
}

/// Key/value metadata attached to an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetadataPayload {
    /// Server-assigned hash of the metadata contents.
    pub fingerprint: Option<String>,
    pub items: Option<Vec<MetadataItemPayload>>,
}

/// One metadata entry.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetadataItemPayload {
    pub key: Option<String>,
    pub value: Option<String>,
}

/// A service account with its authorized scopes.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceAccountPayload {
    pub email: Option<String>,
    pub scopes: Option<Vec<String>>,
}

/// The scheduling policy of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SchedulingPayload {
    pub preemptible: Option<bool>,
    pub automatic_restart: Option<bool>,
    /// Maintenance behavior, `MIGRATE` or `TERMINATE`.
    pub on_host_maintenance: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_fields_are_omitted() {
        let payload = InstancePayload::default();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn renamed_ip_fields() {
        let value = json!({
            "networkIP": "10.0.0.2",
            "accessConfigs": [{"natIP": "203.0.113.1", "type": "ONE_TO_ONE_NAT"}]
        });
        let payload = serde_json::from_value::<NetworkInterfacePayload>(value.clone()).unwrap();
        assert_eq!(payload.network_ip.as_deref(), Some("10.0.0.2"));
        let configs = payload.access_configs.as_ref().unwrap();
        assert_eq!(configs[0].nat_ip.as_deref(), Some("203.0.113.1"));
        assert_eq!(configs[0].r#type.as_deref(), Some("ONE_TO_ONE_NAT"));
        assert_eq!(serde_json::to_value(&payload).unwrap(), value);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let value = json!({"kind": "compute#instance", "selfLink": "https://example/projects/p/zones/z/instances/i"});
        let payload = serde_json::from_value::<InstancePayload>(value).unwrap();
        assert!(payload.self_link.is_some());
    }
}
