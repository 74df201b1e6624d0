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

//! Structured identities for Compute Engine resources.
//!
//! Every resource in the service is addressed by a canonical URL such as
//! `https://www.googleapis.com/compute/v1/projects/{project}/zones/{zone}/instances/{instance}`.
//! The types in this module hold the addressing tuple in structured form and
//! convert it to and from that URL. An identity may exist before the owning
//! project is known (for example when assembled from a project-agnostic
//! context); [with_project][InstanceId::with_project] completes or rebinds it.
//!
//! `self_link` requires the project to be bound: an unbound identity renders
//! a URL with an empty project segment, which `from_url` rejects. Bind the
//! project before projecting to the wire.

use crate::error::Error;

const BASE_URL: &str = "https://www.googleapis.com/compute/v1";

/// Returns the path segments following the `projects` segment of a resource
/// URL. Any scheme/host/version prefix is accepted; the segment shape after
/// `projects` is what each identity validates.
fn resource_segments(url: &str) -> Result<Vec<&str>, Error> {
    let (_, tail) = url
        .split_once("/projects/")
        .ok_or_else(|| Error::malformed(format!("no /projects/ segment in resource url: {url}")))?;
    let segments: Vec<&str> = tail.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(Error::malformed(format!(
            "empty segment in resource url: {url}"
        )));
    }
    Ok(segments)
}

fn link(project: Option<&str>, suffix: std::fmt::Arguments<'_>) -> String {
    format!("{BASE_URL}/projects/{}/{}", project.unwrap_or_default(), suffix)
}

/// The identity of a Compute Engine zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneId {
    project: Option<String>,
    zone: String,
}

impl ZoneId {
    /// Creates a zone identity with no project.
    pub fn of<Z: Into<String>>(zone: Z) -> Self {
        Self {
            project: None,
            zone: zone.into(),
        }
    }

    /// Returns a copy of this identity bound to `project`.
    pub fn with_project<P: Into<String>>(&self, project: P) -> Self {
        Self {
            project: Some(project.into()),
            zone: self.zone.clone(),
        }
    }

    /// Parses a zone identity from its resource URL.
    pub fn from_url(url: &str) -> Result<Self, Error> {
        match resource_segments(url)?.as_slice() {
            [project, "zones", zone] => Ok(Self {
                project: Some(project.to_string()),
                zone: zone.to_string(),
            }),
            _ => Err(Error::malformed(format!("not a zone resource url: {url}"))),
        }
    }

    /// The project owning the zone, if bound.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// The zone name, e.g. `us-central1-a`.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// The canonical URL of the zone.
    pub fn self_link(&self) -> String {
        link(self.project(), format_args!("zones/{}", self.zone))
    }
}

/// The identity of a virtual machine instance: project, zone, and name.
///
/// # Examples
/// ```
/// # use google_cloud_compute_model::InstanceId;
/// let id = InstanceId::of("us-central1-a", "vm-1").with_project("my-project");
/// assert_eq!(
///     id.self_link(),
///     "https://www.googleapis.com/compute/v1/projects/my-project/zones/us-central1-a/instances/vm-1"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceId {
    project: Option<String>,
    zone: String,
    instance: String,
}

impl InstanceId {
    /// Creates an instance identity with no project.
    pub fn of<Z, N>(zone: Z, instance: N) -> Self
    where
        Z: Into<String>,
        N: Into<String>,
    {
        Self {
            project: None,
            zone: zone.into(),
            instance: instance.into(),
        }
    }

    /// Returns a copy of this identity bound to `project`.
    pub fn with_project<P: Into<String>>(&self, project: P) -> Self {
        Self {
            project: Some(project.into()),
            zone: self.zone.clone(),
            instance: self.instance.clone(),
        }
    }

    /// Parses an instance identity from its resource URL.
    ///
    /// The URL is the only trusted source of identity on the read path; the
    /// payload's separate `name` field is ignored.
    pub fn from_url(url: &str) -> Result<Self, Error> {
        match resource_segments(url)?.as_slice() {
            [project, "zones", zone, "instances", instance] => Ok(Self {
                project: Some(project.to_string()),
                zone: zone.to_string(),
                instance: instance.to_string(),
            }),
            _ => Err(Error::malformed(format!(
                "not an instance resource url: {url}"
            ))),
        }
    }

    /// The project owning the instance, if bound.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// The zone hosting the instance.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// The instance name.
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// The identity of the zone hosting the instance.
    pub fn zone_id(&self) -> ZoneId {
        ZoneId {
            project: self.project.clone(),
            zone: self.zone.clone(),
        }
    }

    /// The canonical URL of the instance.
    pub fn self_link(&self) -> String {
        link(
            self.project(),
            format_args!("zones/{}/instances/{}", self.zone, self.instance),
        )
    }
}

/// The identity of a machine type, the shape (vCPUs, memory) of an instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineTypeId {
    project: Option<String>,
    zone: String,
    machine_type: String,
}

impl MachineTypeId {
    /// Creates a machine type identity with no project.
    pub fn of<Z, N>(zone: Z, machine_type: N) -> Self
    where
        Z: Into<String>,
        N: Into<String>,
    {
        Self {
            project: None,
            zone: zone.into(),
            machine_type: machine_type.into(),
        }
    }

    /// Returns a copy of this identity bound to `project`.
    pub fn with_project<P: Into<String>>(&self, project: P) -> Self {
        Self {
            project: Some(project.into()),
            zone: self.zone.clone(),
            machine_type: self.machine_type.clone(),
        }
    }

    /// Parses a machine type identity from its resource URL.
    pub fn from_url(url: &str) -> Result<Self, Error> {
        match resource_segments(url)?.as_slice() {
            [project, "zones", zone, "machineTypes", machine_type] => Ok(Self {
                project: Some(project.to_string()),
                zone: zone.to_string(),
                machine_type: machine_type.to_string(),
            }),
            _ => Err(Error::malformed(format!(
                "not a machine type resource url: {url}"
            ))),
        }
    }

    /// The project owning the machine type, if bound.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// The zone of the machine type.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// The machine type name, e.g. `n1-standard-1`.
    pub fn machine_type(&self) -> &str {
        &self.machine_type
    }

    /// The canonical URL of the machine type.
    pub fn self_link(&self) -> String {
        link(
            self.project(),
            format_args!("zones/{}/machineTypes/{}", self.zone, self.machine_type),
        )
    }
}

/// The identity of a persistent disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiskId {
    project: Option<String>,
    zone: String,
    disk: String,
}

impl DiskId {
    /// Creates a disk identity with no project.
    pub fn of<Z, N>(zone: Z, disk: N) -> Self
    where
        Z: Into<String>,
        N: Into<String>,
    {
        Self {
            project: None,
            zone: zone.into(),
            disk: disk.into(),
        }
    }

    /// Returns a copy of this identity bound to `project`.
    pub fn with_project<P: Into<String>>(&self, project: P) -> Self {
        Self {
            project: Some(project.into()),
            zone: self.zone.clone(),
            disk: self.disk.clone(),
        }
    }

    /// Parses a disk identity from its resource URL.
    pub fn from_url(url: &str) -> Result<Self, Error> {
        match resource_segments(url)?.as_slice() {
            [project, "zones", zone, "disks", disk] => Ok(Self {
                project: Some(project.to_string()),
                zone: zone.to_string(),
                disk: disk.to_string(),
            }),
            _ => Err(Error::malformed(format!("not a disk resource url: {url}"))),
        }
    }

    /// The project owning the disk, if bound.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// The zone hosting the disk.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// The disk name.
    pub fn disk(&self) -> &str {
        &self.disk
    }

    /// The canonical URL of the disk.
    pub fn self_link(&self) -> String {
        link(
            self.project(),
            format_args!("zones/{}/disks/{}", self.zone, self.disk),
        )
    }
}

/// The identity of a network. Networks are global resources, scoped to a
/// project but not to a zone or region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkId {
    project: Option<String>,
    network: String,
}

impl NetworkId {
    /// Creates a network identity with no project.
    pub fn of<N: Into<String>>(network: N) -> Self {
        Self {
            project: None,
            network: network.into(),
        }
    }

    /// Returns a copy of this identity bound to `project`.
    pub fn with_project<P: Into<String>>(&self, project: P) -> Self {
        Self {
            project: Some(project.into()),
            network: self.network.clone(),
        }
    }

    /// Parses a network identity from its resource URL.
    pub fn from_url(url: &str) -> Result<Self, Error> {
        match resource_segments(url)?.as_slice() {
            [project, "global", "networks", network] => Ok(Self {
                project: Some(project.to_string()),
                network: network.to_string(),
            }),
            _ => Err(Error::malformed(format!(
                "not a network resource url: {url}"
            ))),
        }
    }

    /// The project owning the network, if bound.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// The network name.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// The canonical URL of the network.
    pub fn self_link(&self) -> String {
        link(
            self.project(),
            format_args!("global/networks/{}", self.network),
        )
    }
}

/// The identity of a subnetwork. Subnetworks are regional resources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubnetworkId {
    project: Option<String>,
    region: String,
    subnetwork: String,
}

impl SubnetworkId {
    /// Creates a subnetwork identity with no project.
    pub fn of<R, N>(region: R, subnetwork: N) -> Self
    where
        R: Into<String>,
        N: Into<String>,
    {
        Self {
            project: None,
            region: region.into(),
            subnetwork: subnetwork.into(),
        }
    }

    /// Returns a copy of this identity bound to `project`.
    pub fn with_project<P: Into<String>>(&self, project: P) -> Self {
        Self {
            project: Some(project.into()),
            region: self.region.clone(),
            subnetwork: self.subnetwork.clone(),
        }
    }

    /// Parses a subnetwork identity from its resource URL.
    pub fn from_url(url: &str) -> Result<Self, Error> {
        match resource_segments(url)?.as_slice() {
            [project, "regions", region, "subnetworks", subnetwork] => Ok(Self {
                project: Some(project.to_string()),
                region: region.to_string(),
                subnetwork: subnetwork.to_string(),
            }),
            _ => Err(Error::malformed(format!(
                "not a subnetwork resource url: {url}"
            ))),
        }
    }

    /// The project owning the subnetwork, if bound.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// The region of the subnetwork.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The subnetwork name.
    pub fn subnetwork(&self) -> &str {
        &self.subnetwork
    }

    /// The canonical URL of the subnetwork.
    pub fn self_link(&self) -> String {
        link(
            self.project(),
            format_args!("regions/{}/subnetworks/{}", self.region, self.subnetwork),
        )
    }
}
