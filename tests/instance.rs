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

//! Mapping laws for the instance resource: round trips, key omission,
//! required-field enforcement, and project rebinding.

use google_cloud_compute_model::*;
use serde_json::json;
use test_case::test_case;

type Result = anyhow::Result<()>;

fn full_payload() -> serde_json::Value {
    json!({
        "id": "1234567890123456789",
        "name": "i1",
        "selfLink": "https://www.googleapis.com/compute/v1/projects/p1/zones/z1/instances/i1",
        "zone": "https://www.googleapis.com/compute/v1/projects/p1/zones/z1",
        "creationTimestamp": "2016-03-01T10:19:32.063Z",
        "description": "a test instance",
        "status": "RUNNING",
        "statusMessage": "all good",
        "tags": {"items": ["http-server"], "fingerprint": "42WmSpB8rSM="},
        "machineType": "https://www.googleapis.com/compute/v1/projects/p1/zones/z1/machineTypes/n1-standard-1",
        "canIpForward": false,
        "networkInterfaces": [{
            "name": "nic0",
            "network": "https://www.googleapis.com/compute/v1/projects/p1/global/networks/default",
            "subnetwork": "https://www.googleapis.com/compute/v1/projects/p1/regions/r1/subnetworks/s1",
            "networkIP": "10.240.0.2",
            "accessConfigs": [{"name": "External NAT", "natIP": "203.0.113.1", "type": "ONE_TO_ONE_NAT"}]
        }],
        "disks": [{
            "deviceName": "persistent-disk-0",
            "source": "https://www.googleapis.com/compute/v1/projects/p1/zones/z1/disks/d1",
            "boot": true,
            "autoDelete": true,
            "interface": "SCSI",
            "mode": "READ_WRITE"
        }],
        "metadata": {"fingerprint": "lLm8kCwC7hU=", "items": [{"key": "k", "value": "v"}]},
        "serviceAccounts": [{"email": "default", "scopes": ["https://www.googleapis.com/auth/cloud-platform"]}],
        "scheduling": {"preemptible": false, "automaticRestart": true, "onHostMaintenance": "MIGRATE"},
        "cpuPlatform": "Intel Skylake"
    })
}

fn minimal_instance() -> Instance {
    Instance::of(
        InstanceId::of("z1", "i1").with_project("p1"),
        MachineTypeId::of("z1", "n1-standard-1").with_project("p1"),
        AttachedDisk::of(DiskId::of("z1", "d1").with_project("p1")).set_boot(true),
        NetworkInterface::of(NetworkId::of("default").with_project("p1")),
    )
}

#[test]
fn full_roundtrip() -> Result {
    let payload = serde_json::from_value::<wire::InstancePayload>(full_payload())?;
    let instance = Instance::from_wire(&payload)?;

    assert_eq!(instance.id(), Some("1234567890123456789"));
    assert_eq!(
        instance.instance_id(),
        &InstanceId::of("z1", "i1").with_project("p1")
    );
    assert_eq!(instance.creation_timestamp(), Some(1456827572063));
    assert_eq!(instance.status(), Some(Status::Running));
    assert_eq!(
        instance.machine_type().unwrap().machine_type(),
        "n1-standard-1"
    );
    assert_eq!(instance.cpu_platform(), Some("Intel Skylake"));
    let accounts = instance.service_accounts().unwrap();
    assert_eq!(accounts[0].email(), "default");

    let roundtrip = Instance::from_wire(&instance.to_wire())?;
    assert_eq!(roundtrip, instance);
    Ok(())
}

#[test]
fn wire_projection_shape() -> Result {
    // A payload produced by the service maps to a domain object whose own
    // projection reproduces every field the domain retains. The read path
    // drops nothing except the untrusted redundant addressing, which is
    // re-derived from the identity.
    let payload = serde_json::from_value::<wire::InstancePayload>(full_payload())?;
    let projected = serde_json::to_value(Instance::from_wire(&payload)?.to_wire())?;
    assert_eq!(projected, full_payload());
    Ok(())
}

#[test]
fn partial_roundtrip_omits_unset_keys() -> Result {
    let instance = minimal_instance();
    let value = serde_json::to_value(instance.to_wire())?;
    let object = value.as_object().unwrap();
    for absent in [
        "id",
        "creationTimestamp",
        "description",
        "status",
        "statusMessage",
        "tags",
        "canIpForward",
        "metadata",
        "serviceAccounts",
        "scheduling",
        "cpuPlatform",
    ] {
        assert!(!object.contains_key(absent), "unexpected key {absent}: {value}");
    }
    // Identity, the machine type, and the explicitly supplied collections
    // are present here because this instance carries all of them.
    for present in ["name", "selfLink", "zone", "machineType", "networkInterfaces", "disks"] {
        assert!(object.contains_key(present), "missing key {present}: {value}");
    }

    let back = Instance::from_wire(&serde_json::from_value(value)?)?;
    assert!(back.description().is_none());
    assert!(back.status().is_none());
    assert!(back.tags().is_none());
    assert!(back.metadata().is_none());
    assert!(back.service_accounts().is_none());
    assert_eq!(back, instance);
    Ok(())
}

#[test]
fn empty_and_absent_service_accounts_are_distinct() -> Result {
    let unset = minimal_instance();
    assert!(unset.service_accounts().is_none());

    let empty = unset
        .to_builder()
        .set_service_accounts(Vec::new())
        .build()?;
    let value = serde_json::to_value(empty.to_wire())?;
    assert_eq!(value["serviceAccounts"], json!([]));

    let back = Instance::from_wire(&serde_json::from_value(value)?)?;
    assert!(back.service_accounts().is_some_and(|s| s.is_empty()));
    assert_ne!(back, unset);
    Ok(())
}

#[test]
fn building_without_disks_or_interfaces_fails() {
    let builder = Instance::builder(
        InstanceId::of("z1", "i1").with_project("p1"),
        MachineTypeId::of("z1", "n1-standard-1").with_project("p1"),
    );

    let err = builder
        .clone()
        .set_network_interfaces(Vec::<NetworkInterface>::new())
        .build()
        .unwrap_err();
    assert!(err.is_invalid_argument(), "{err}");

    let err = builder
        .set_attached_disks(Vec::<AttachedDisk>::new())
        .build()
        .unwrap_err();
    assert!(err.is_invalid_argument(), "{err}");
}

#[test]
fn collection_setters_copy_their_input() -> Result {
    let mut interfaces = vec![NetworkInterface::of(
        NetworkId::of("default").with_project("p1"),
    )];
    let builder = Instance::builder(
        InstanceId::of("z1", "i1").with_project("p1"),
        MachineTypeId::of("z1", "n1-standard-1").with_project("p1"),
    )
    .set_attached_disks([AttachedDisk::of(DiskId::of("z1", "d1").with_project("p1"))])
    .set_network_interfaces(&interfaces[..]);

    // Mutating the caller's collection after staging it must not change the
    // built instance.
    interfaces.clear();
    let instance = builder.build()?;
    assert_eq!(instance.network_interfaces().len(), 1);
    Ok(())
}

#[test]
fn identity_comes_from_self_link_only() -> Result {
    let payload = serde_json::from_value::<wire::InstancePayload>(json!({
        "name": "a-name-the-mapper-must-ignore",
        "selfLink": "https://www.googleapis.com/compute/v1/projects/p1/zones/z1/instances/i1",
        "machineType": "https://www.googleapis.com/compute/v1/projects/p1/zones/z1/machineTypes/n1-standard-1",
        "networkInterfaces": [],
        "disks": []
    }))?;
    let instance = Instance::from_wire(&payload)?;
    assert_eq!(instance.instance_id().instance(), "i1");
    assert_eq!(instance.to_wire().name.as_deref(), Some("i1"));
    Ok(())
}

#[test_case(json!({"selfLink": "https://www.googleapis.com/compute/v1/projects/p1/instances/i1"}); "self link missing zone segment")]
#[test_case(json!({"status": "UNKNOWN_FOO"}); "unknown status")]
#[test_case(json!({"creationTimestamp": "yesterday"}); "bad timestamp")]
#[test_case(json!({"id": "not-a-number"}); "non decimal id")]
#[test_case(json!({"machineType": "https://www.googleapis.com/compute/v1/projects/p1/zones/z1/instances/i1"}); "machine type with wrong collection")]
#[test_case(json!({}); "missing self link")]
fn malformed_payloads(overrides: serde_json::Value) {
    let mut payload = json!({
        "selfLink": "https://www.googleapis.com/compute/v1/projects/p1/zones/z1/instances/i1",
        "machineType": "https://www.googleapis.com/compute/v1/projects/p1/zones/z1/machineTypes/n1-standard-1",
        "networkInterfaces": [],
        "disks": []
    });
    let object = payload.as_object_mut().unwrap();
    for (key, value) in overrides.as_object().unwrap() {
        object.insert(key.clone(), value.clone());
    }
    if overrides.as_object().unwrap().is_empty() {
        object.remove("selfLink");
    }
    let payload = serde_json::from_value::<wire::InstancePayload>(payload).unwrap();
    let err = Instance::from_wire(&payload).unwrap_err();
    assert!(err.is_malformed_wire_data(), "{err}");
}

#[test]
fn payload_without_disks_fails_as_unset() {
    // The mapper leaves absent collections unset, so finalizing trips the
    // same check as a caller who never set them.
    let payload = serde_json::from_value::<wire::InstancePayload>(json!({
        "selfLink": "https://www.googleapis.com/compute/v1/projects/p1/zones/z1/instances/i1",
        "machineType": "https://www.googleapis.com/compute/v1/projects/p1/zones/z1/machineTypes/n1-standard-1"
    }))
    .unwrap();
    let err = Instance::from_wire(&payload).unwrap_err();
    assert!(err.is_invalid_argument(), "{err}");
}

#[test]
fn payload_without_machine_type_leaves_it_unset() -> Result {
    // The public builder requires a machine type, but a service payload may
    // omit the field; the mapper tolerates that and the projection omits the
    // key in turn.
    let payload = serde_json::from_value::<wire::InstancePayload>(json!({
        "selfLink": "https://www.googleapis.com/compute/v1/projects/p1/zones/z1/instances/i1",
        "networkInterfaces": [],
        "disks": []
    }))?;
    let instance = Instance::from_wire(&payload)?;
    assert!(instance.machine_type().is_none());

    let value = serde_json::to_value(instance.to_wire())?;
    assert!(
        !value.as_object().unwrap().contains_key("machineType"),
        "{value}"
    );
    let back = Instance::from_wire(&serde_json::from_value(value)?)?;
    assert_eq!(back, instance);
    Ok(())
}

#[test]
fn rebinding_rewrites_every_nested_identity() -> Result {
    let payload = serde_json::from_value::<wire::InstancePayload>(full_payload())?;
    let instance = Instance::from_wire(&payload)?;
    let rebound = instance.with_project("p2");

    assert_eq!(rebound.instance_id().project(), Some("p2"));
    assert_eq!(rebound.machine_type().unwrap().project(), Some("p2"));
    assert_eq!(
        rebound.network_interfaces()[0].network().project(),
        Some("p2")
    );
    assert_eq!(
        rebound.network_interfaces()[0]
            .subnetwork()
            .unwrap()
            .project(),
        Some("p2")
    );
    assert_eq!(
        rebound.attached_disks()[0].source().unwrap().project(),
        Some("p2")
    );

    // No reference to the old project survives anywhere in the projection.
    let rendered = serde_json::to_string(&rebound.to_wire())?;
    assert!(!rendered.contains("/p1/"), "{rendered}");
    Ok(())
}

#[test]
fn equality_tracks_wire_projection() -> Result {
    let a = minimal_instance();
    let b = Instance::from_wire(&a.to_wire())?;
    assert_eq!(a, b);

    let c = a.to_builder().set_description("changed").build()?;
    assert_ne!(a, c);
    Ok(())
}
