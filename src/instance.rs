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

use crate::attached_disk::AttachedDisk;
use crate::error::Error;
use crate::identity::{InstanceId, MachineTypeId};
use crate::metadata::Metadata;
use crate::network_interface::NetworkInterface;
use crate::scheduling::SchedulingOptions;
use crate::service_account::ServiceAccount;
use crate::tags::Tags;
use crate::timestamp;
use crate::wire::InstancePayload;

/// The status of an instance, as reported by the service.
///
/// The service is the only source of this value: the model never computes or
/// transitions it, it only validates the reported name on the read path.
/// Statuses progress `PROVISIONING → STAGING → RUNNING → STOPPING →
/// TERMINATED`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Status {
    /// Resources are being reserved for the instance. The instance is not
    /// running yet.
    Provisioning,
    /// Resources have been acquired and the instance is being prepared for
    /// launch.
    Staging,
    /// The instance is booting up or running. Interactive access may succeed
    /// soon, though not immediately, after it enters this state.
    Running,
    /// The instance is being stopped, either due to a failure or a deliberate
    /// shutdown. This is temporary; the instance will move to `TERMINATED`.
    Stopping,
    /// The instance was shut down or encountered a failure. It can be
    /// restarted or deleted.
    Terminated,
}

impl Status {
    /// The wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provisioning => "PROVISIONING",
            Self::Staging => "STAGING",
            Self::Running => "RUNNING",
            Self::Stopping => "STOPPING",
            Self::Terminated => "TERMINATED",
        }
    }

    pub(crate) fn from_wire(value: &str) -> Result<Self, Error> {
        match value {
            "PROVISIONING" => Ok(Self::Provisioning),
            "STAGING" => Ok(Self::Staging),
            "RUNNING" => Ok(Self::Running),
            "STOPPING" => Ok(Self::Stopping),
            "TERMINATED" => Ok(Self::Terminated),
            _ => Err(Error::malformed(format!(
                "unrecognized instance status: {value}"
            ))),
        }
    }
}

/// A Google Compute Engine virtual machine instance.
///
/// An instance is a VM hosted on Google's infrastructure, with a machine type
/// that determines its shape, one or more attached disks (exactly one of
/// which must be the boot disk), and the network interfaces that connect it
/// to the world.
///
/// The value is immutable once built. To change it, rebuild through
/// [to_builder][Instance::to_builder]; unchanged sub-resources are shared by
/// cloning, never mutated in place. Equality compares wire projections, so
/// derived fields such as URL rendering participate.
///
/// Fields assigned by the service (`id`, `creation_timestamp`, `status`,
/// `status_message`, `cpu_platform`) can only be populated by the wire
/// mapper; the public builder has no setters for them.
///
/// # Examples
/// ```
/// # use google_cloud_compute_model::*;
/// let instance = Instance::builder(
///     InstanceId::of("us-central1-a", "vm-1").with_project("my-project"),
///     MachineTypeId::of("us-central1-a", "n1-standard-1").with_project("my-project"),
/// )
/// .set_attached_disks([
///     AttachedDisk::of(DiskId::of("us-central1-a", "boot").with_project("my-project"))
///         .set_boot(true),
/// ])
/// .set_network_interfaces([NetworkInterface::of(
///     NetworkId::of("default").with_project("my-project"),
/// )])
/// .build()?;
/// assert!(instance.status().is_none());
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Instance {
    id: Option<String>,
    instance_id: InstanceId,
    creation_timestamp: Option<i64>,
    description: Option<String>,
    status: Option<Status>,
    status_message: Option<String>,
    tags: Option<Tags>,
    machine_type: Option<MachineTypeId>,
    can_ip_forward: Option<bool>,
    network_interfaces: Vec<NetworkInterface>,
    attached_disks: Vec<AttachedDisk>,
    metadata: Option<Metadata>,
    service_accounts: Option<Vec<ServiceAccount>>,
    scheduling_options: Option<SchedulingOptions>,
    cpu_platform: Option<String>,
}

impl Instance {
    /// Returns a builder for an instance with the given identity and machine
    /// type. Both are required; the remaining fields are staged through the
    /// builder's setters.
    pub fn builder(instance_id: InstanceId, machine_type: MachineTypeId) -> InstanceBuilder {
        InstanceBuilder::with_identity(instance_id).set_machine_type(machine_type)
    }

    /// Creates an instance from its identity, machine type, one disk, and one
    /// network interface. `disk` must be a boot disk.
    pub fn of(
        instance_id: InstanceId,
        machine_type: MachineTypeId,
        disk: AttachedDisk,
        network_interface: NetworkInterface,
    ) -> Self {
        Self {
            id: None,
            instance_id,
            creation_timestamp: None,
            description: None,
            status: None,
            status_message: None,
            tags: None,
            machine_type: Some(machine_type),
            can_ip_forward: None,
            network_interfaces: vec![network_interface],
            attached_disks: vec![disk],
            metadata: None,
            service_accounts: None,
            scheduling_options: None,
            cpu_platform: None,
        }
    }

    /// The unique numeric identifier assigned by the service, in decimal
    /// string form. Unset until the instance has been created remotely.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The identity of the instance.
    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }

    /// The creation time in milliseconds since the Unix epoch, once known.
    pub fn creation_timestamp(&self) -> Option<i64> {
        self.creation_timestamp
    }

    /// The user-supplied description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The status reported by the service, once known.
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// A human-readable explanation of the status, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// The network tags, if any.
    pub fn tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }

    /// The identity of the machine type. Always set on instances built
    /// through the public builder; unset only when mapped from a payload
    /// that omitted the field.
    pub fn machine_type(&self) -> Option<&MachineTypeId> {
        self.machine_type.as_ref()
    }

    /// Whether the instance may send and receive packets with non-matching
    /// destination or source IPs, as required for route forwarding.
    pub fn can_ip_forward(&self) -> Option<bool> {
        self.can_ip_forward
    }

    /// The network interfaces, in order.
    pub fn network_interfaces(&self) -> &[NetworkInterface] {
        &self.network_interfaces
    }

    /// The attached disks, in order.
    pub fn attached_disks(&self) -> &[AttachedDisk] {
        &self.attached_disks
    }

    /// The instance metadata, if any.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// The service accounts authorized for the instance, if set.
    pub fn service_accounts(&self) -> Option<&[ServiceAccount]> {
        self.service_accounts.as_deref()
    }

    /// The scheduling policy, if any.
    pub fn scheduling_options(&self) -> Option<&SchedulingOptions> {
        self.scheduling_options.as_ref()
    }

    /// The CPU platform reported by the service once running.
    pub fn cpu_platform(&self) -> Option<&str> {
        self.cpu_platform.as_deref()
    }

    /// Returns a builder initialized with this instance's fields, including
    /// the service-assigned ones.
    pub fn to_builder(&self) -> InstanceBuilder {
        InstanceBuilder {
            id: self.id.clone(),
            instance_id: self.instance_id.clone(),
            creation_timestamp: self.creation_timestamp,
            description: self.description.clone(),
            status: self.status,
            status_message: self.status_message.clone(),
            tags: self.tags.clone(),
            machine_type: self.machine_type.clone(),
            can_ip_forward: self.can_ip_forward,
            network_interfaces: Some(self.network_interfaces.clone()),
            attached_disks: Some(self.attached_disks.clone()),
            metadata: self.metadata.clone(),
            service_accounts: self.service_accounts.clone(),
            scheduling_options: self.scheduling_options.clone(),
            cpu_platform: self.cpu_platform.clone(),
        }
    }

    /// Rebinds every project-qualified identity in the object graph to
    /// `project`: the instance identity, the machine type, each network
    /// interface's network and subnetwork, and each disk's source.
    ///
    /// Used by the service client to complete identities that were built
    /// without a known project before issuing a remote call.
    #[doc(hidden)]
    pub fn with_project(&self, project: &str) -> Self {
        Self {
            instance_id: self.instance_id.with_project(project),
            machine_type: self.machine_type.as_ref().map(|m| m.with_project(project)),
            network_interfaces: self
                .network_interfaces
                .iter()
                .map(|n| n.with_project(project))
                .collect(),
            attached_disks: self
                .attached_disks
                .iter()
                .map(|d| d.with_project(project))
                .collect(),
            ..self.clone()
        }
    }

    /// Converts a wire payload into an instance.
    ///
    /// The payload's `selfLink` is the only trusted source of identity; its
    /// `name` and `zone` fields are ignored. Mapping is all-or-nothing: the
    /// first malformed field aborts the conversion.
    pub fn from_wire(payload: &InstancePayload) -> Result<Self, Error> {
        let self_link = payload
            .self_link
            .as_deref()
            .ok_or_else(|| Error::malformed("instance payload missing selfLink"))?;
        let mut builder = InstanceBuilder::with_identity(InstanceId::from_url(self_link)?);
        if let Some(machine_type) = payload.machine_type.as_deref() {
            builder = builder.set_machine_type(MachineTypeId::from_url(machine_type)?);
        }
        if let Some(id) = payload.id.as_deref() {
            if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::malformed(format!(
                    "instance id is not a decimal string: {id}"
                )));
            }
            builder = builder.set_id(id);
        }
        if let Some(ts) = payload.creation_timestamp.as_deref() {
            builder = builder.set_creation_timestamp(timestamp::parse_millis(ts)?);
        }
        if let Some(description) = payload.description.clone() {
            builder = builder.set_description(description);
        }
        if let Some(status) = payload.status.as_deref() {
            builder = builder.set_status(Status::from_wire(status)?);
        }
        if let Some(message) = payload.status_message.clone() {
            builder = builder.set_status_message(message);
        }
        if let Some(tags) = payload.tags.as_ref() {
            builder = builder.set_tags(Tags::from_wire(tags));
        }
        if let Some(can_ip_forward) = payload.can_ip_forward {
            builder = builder.set_can_ip_forward(can_ip_forward);
        }
        if let Some(interfaces) = payload.network_interfaces.as_deref() {
            let interfaces = interfaces
                .iter()
                .map(NetworkInterface::from_wire)
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.set_network_interfaces(interfaces);
        }
        if let Some(disks) = payload.disks.as_deref() {
            let disks = disks
                .iter()
                .map(AttachedDisk::from_wire)
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.set_attached_disks(disks);
        }
        if let Some(metadata) = payload.metadata.as_ref() {
            builder = builder.set_metadata(Metadata::from_wire(metadata));
        }
        if let Some(accounts) = payload.service_accounts.as_deref() {
            let accounts = accounts
                .iter()
                .map(ServiceAccount::from_wire)
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.set_service_accounts(accounts);
        }
        if let Some(scheduling) = payload.scheduling.as_ref() {
            builder = builder.set_scheduling_options(SchedulingOptions::from_wire(scheduling)?);
        }
        if let Some(cpu_platform) = payload.cpu_platform.clone() {
            builder = builder.set_cpu_platform(cpu_platform);
        }
        builder.build()
    }

    /// Projects the instance to its wire form.
    ///
    /// Unset fields are omitted from the payload entirely, as the service's
    /// partial update protocol requires. The identity renders the redundant
    /// `name`, `selfLink`, and `zone` fields the wire schema expects.
    ///
    /// Every identity in the object graph must have its project bound (see
    /// [Instance::with_project]); an unbound identity renders a self link
    /// with an empty project segment, which the read path rejects.
    pub fn to_wire(&self) -> InstancePayload {
        InstancePayload {
            id: self.id.clone(),
            name: Some(self.instance_id.instance().to_string()),
            self_link: Some(self.instance_id.self_link()),
            zone: Some(self.instance_id.zone_id().self_link()),
            creation_timestamp: self.creation_timestamp.map(timestamp::format_millis),
            description: self.description.clone(),
            status: self.status.map(|s| s.as_str().to_string()),
            status_message: self.status_message.clone(),
            tags: self.tags.as_ref().map(Tags::to_wire),
            machine_type: self.machine_type.as_ref().map(MachineTypeId::self_link),
            can_ip_forward: self.can_ip_forward,
            network_interfaces: Some(
                self.network_interfaces
                    .iter()
                    .map(NetworkInterface::to_wire)
                    .collect(),
            ),
            disks: Some(self.attached_disks.iter().map(AttachedDisk::to_wire).collect()),
            metadata: self.metadata.as_ref().map(Metadata::to_wire),
            service_accounts: self
                .service_accounts
                .as_deref()
                .map(|accounts| accounts.iter().map(ServiceAccount::to_wire).collect()),
            scheduling: self.scheduling_options.as_ref().map(SchedulingOptions::to_wire),
            cpu_platform: self.cpu_platform.clone(),
        }
    }
}

/// Two instances are equal when their wire projections are equal, so derived
/// and normalized fields (such as URL rendering) participate in equality.
impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.to_wire() == other.to_wire()
    }
}

/// A builder for [Instance] values.
///
/// Obtained from [Instance::builder] (fresh, identity and machine type
/// required) or [Instance::to_builder] (copy of an existing instance).
/// Setters are chainable. Collection setters copy their input, so later
/// changes to the caller's collection cannot affect the built instance. The
/// builder is a single-writer staging object and is not meant to be shared.
#[derive(Clone, Debug)]
pub struct InstanceBuilder {
    id: Option<String>,
    instance_id: InstanceId,
    creation_timestamp: Option<i64>,
    description: Option<String>,
    status: Option<Status>,
    status_message: Option<String>,
    tags: Option<Tags>,
    machine_type: Option<MachineTypeId>,
    can_ip_forward: Option<bool>,
    network_interfaces: Option<Vec<NetworkInterface>>,
    attached_disks: Option<Vec<AttachedDisk>>,
    metadata: Option<Metadata>,
    service_accounts: Option<Vec<ServiceAccount>>,
    scheduling_options: Option<SchedulingOptions>,
    cpu_platform: Option<String>,
}

impl InstanceBuilder {
    // The wire mapper starts from the identity alone; every other field,
    // machine type included, is populated only when the payload carries it.
    pub(crate) fn with_identity(instance_id: InstanceId) -> Self {
        Self {
            id: None,
            instance_id,
            creation_timestamp: None,
            description: None,
            status: None,
            status_message: None,
            tags: None,
            machine_type: None,
            can_ip_forward: None,
            network_interfaces: None,
            attached_disks: None,
            metadata: None,
            service_accounts: None,
            scheduling_options: None,
            cpu_platform: None,
        }
    }

    /// Sets the identity of the instance.
    pub fn set_instance_id(mut self, instance_id: InstanceId) -> Self {
        self.instance_id = instance_id;
        self
    }

    /// Sets the machine type identity.
    pub fn set_machine_type(mut self, machine_type: MachineTypeId) -> Self {
        self.machine_type = Some(machine_type);
        self
    }

    /// Sets the description of the instance.
    pub fn set_description<T: Into<String>>(mut self, description: T) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the network tags.
    pub fn set_tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Sets whether the instance may send and receive packets with
    /// non-matching destination or source IPs.
    pub fn set_can_ip_forward(mut self, can_ip_forward: bool) -> Self {
        self.can_ip_forward = Some(can_ip_forward);
        self
    }

    /// Sets the network interfaces. The input is copied; later changes to the
    /// caller's collection do not affect the built instance.
    pub fn set_network_interfaces<I: Into<Vec<NetworkInterface>>>(
        mut self,
        network_interfaces: I,
    ) -> Self {
        self.network_interfaces = Some(network_interfaces.into());
        self
    }

    /// Sets the attached disks. Exactly one must be a boot disk. The input is
    /// copied; later changes to the caller's collection do not affect the
    /// built instance.
    pub fn set_attached_disks<I: Into<Vec<AttachedDisk>>>(mut self, attached_disks: I) -> Self {
        self.attached_disks = Some(attached_disks.into());
        self
    }

    /// Sets the instance metadata.
    pub fn set_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Sets the service accounts authorized for the instance.
    pub fn set_service_accounts<I: Into<Vec<ServiceAccount>>>(
        mut self,
        service_accounts: I,
    ) -> Self {
        self.service_accounts = Some(service_accounts.into());
        self
    }

    /// Sets the scheduling policy.
    pub fn set_scheduling_options(mut self, scheduling_options: SchedulingOptions) -> Self {
        self.scheduling_options = Some(scheduling_options);
        self
    }

    // Service-assigned fields are only reachable from the wire mapper; the
    // public surface cannot fabricate service state.

    pub(crate) fn set_id<T: Into<String>>(mut self, id: T) -> Self {
        self.id = Some(id.into());
        self
    }

    pub(crate) fn set_creation_timestamp(mut self, millis: i64) -> Self {
        self.creation_timestamp = Some(millis);
        self
    }

    pub(crate) fn set_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub(crate) fn set_status_message<T: Into<String>>(mut self, status_message: T) -> Self {
        self.status_message = Some(status_message.into());
        self
    }

    pub(crate) fn set_cpu_platform<T: Into<String>>(mut self, cpu_platform: T) -> Self {
        self.cpu_platform = Some(cpu_platform.into());
        self
    }

    /// Finalizes the instance.
    ///
    /// Fails with [Error::InvalidArgument] if `attached_disks` or
    /// `network_interfaces` was never set. Both may be set to empty
    /// sequences, but the choice must be explicit.
    pub fn build(self) -> Result<Instance, Error> {
        let attached_disks = self
            .attached_disks
            .ok_or_else(|| Error::invalid_argument("attached_disks must be set before build()"))?;
        let network_interfaces = self.network_interfaces.ok_or_else(|| {
            Error::invalid_argument("network_interfaces must be set before build()")
        })?;
        Ok(Instance {
            id: self.id,
            instance_id: self.instance_id,
            creation_timestamp: self.creation_timestamp,
            description: self.description,
            status: self.status,
            status_message: self.status_message,
            tags: self.tags,
            machine_type: self.machine_type,
            can_ip_forward: self.can_ip_forward,
            network_interfaces,
            attached_disks,
            metadata: self.metadata,
            service_accounts: self.service_accounts,
            scheduling_options: self.scheduling_options,
            cpu_platform: self.cpu_platform,
        })
    }
}
