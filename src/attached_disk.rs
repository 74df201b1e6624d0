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
use crate::identity::DiskId;
use crate::wire::AttachedDiskPayload;

/// The mode in which a disk is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiskMode {
    /// Read-write attachment; only one instance at a time may attach a disk
    /// in this mode.
    ReadWrite,
    /// Read-only attachment; any number of instances may share the disk.
    ReadOnly,
}

impl DiskMode {
    /// The wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadWrite => "READ_WRITE",
            Self::ReadOnly => "READ_ONLY",
        }
    }

    pub(crate) fn from_wire(value: &str) -> Result<Self, Error> {
        match value {
            "READ_WRITE" => Ok(Self::ReadWrite),
            "READ_ONLY" => Ok(Self::ReadOnly),
            _ => Err(Error::malformed(format!("unrecognized disk mode: {value}"))),
        }
    }
}

/// The interface through which a disk is exposed to the guest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiskInterface {
    Scsi,
    Nvme,
}

impl DiskInterface {
    /// The wire name of the interface.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scsi => "SCSI",
            Self::Nvme => "NVME",
        }
    }

    pub(crate) fn from_wire(value: &str) -> Result<Self, Error> {
        match value {
            "SCSI" => Ok(Self::Scsi),
            "NVME" => Ok(Self::Nvme),
            _ => Err(Error::malformed(format!(
                "unrecognized disk interface: {value}"
            ))),
        }
    }
}

/// A disk attached to a virtual machine instance.
///
/// Exactly one of an instance's attached disks must be the boot disk, the
/// disk holding the bootable operating system image. The builder does not
/// enforce this; callers are responsible for supplying a valid combination.
///
/// # Examples
/// ```
/// # use google_cloud_compute_model::{AttachedDisk, DiskId};
/// let disk = AttachedDisk::of(DiskId::of("us-central1-a", "boot"))
///     .set_boot(true)
///     .set_auto_delete(true);
/// assert_eq!(disk.boot(), Some(true));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachedDisk {
    device_name: Option<String>,
    source: Option<DiskId>,
    boot: Option<bool>,
    auto_delete: Option<bool>,
    interface: Option<DiskInterface>,
    mode: Option<DiskMode>,
}

impl AttachedDisk {
    /// Creates an attached disk backed by the given persistent disk.
    pub fn of(source: DiskId) -> Self {
        Self {
            device_name: None,
            source: Some(source),
            boot: None,
            auto_delete: None,
            interface: None,
            mode: None,
        }
    }

    /// Sets the device name visible to the guest operating system.
    pub fn set_device_name<T: Into<String>>(mut self, device_name: T) -> Self {
        self.device_name = Some(device_name.into());
        self
    }

    /// Marks or unmarks this disk as the boot disk.
    pub fn set_boot(mut self, boot: bool) -> Self {
        self.boot = Some(boot);
        self
    }

    /// Sets whether the disk is deleted together with the instance.
    pub fn set_auto_delete(mut self, auto_delete: bool) -> Self {
        self.auto_delete = Some(auto_delete);
        self
    }

    /// Sets the disk interface.
    pub fn set_interface(mut self, interface: DiskInterface) -> Self {
        self.interface = Some(interface);
        self
    }

    /// Sets the attach mode.
    pub fn set_mode(mut self, mode: DiskMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// The device name visible to the guest, if set.
    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    /// The identity of the source persistent disk, if set.
    pub fn source(&self) -> Option<&DiskId> {
        self.source.as_ref()
    }

    /// Whether this is the boot disk, if the flag has been set.
    pub fn boot(&self) -> Option<bool> {
        self.boot
    }

    /// Whether the disk is deleted together with the instance.
    pub fn auto_delete(&self) -> Option<bool> {
        self.auto_delete
    }

    /// The disk interface, if set.
    pub fn interface(&self) -> Option<DiskInterface> {
        self.interface
    }

    /// The attach mode, if set.
    pub fn mode(&self) -> Option<DiskMode> {
        self.mode
    }

    pub(crate) fn with_project(&self, project: &str) -> Self {
        Self {
            source: self.source.as_ref().map(|s| s.with_project(project)),
            ..self.clone()
        }
    }

    /// Converts a wire payload into an attached disk.
    pub fn from_wire(payload: &AttachedDiskPayload) -> Result<Self, Error> {
        Ok(Self {
            device_name: payload.device_name.clone(),
            source: payload
                .source
                .as_deref()
                .map(DiskId::from_url)
                .transpose()?,
            boot: payload.boot,
            auto_delete: payload.auto_delete,
            interface: payload
                .interface
                .as_deref()
                .map(DiskInterface::from_wire)
                .transpose()?,
            mode: payload.mode.as_deref().map(DiskMode::from_wire).transpose()?,
        })
    }

    /// Projects the attached disk to its wire form.
    pub fn to_wire(&self) -> AttachedDiskPayload {
        AttachedDiskPayload {
            device_name: self.device_name.clone(),
            source: self.source.as_ref().map(DiskId::self_link),
            boot: self.boot,
            auto_delete: self.auto_delete,
            interface: self.interface.map(|i| i.as_str().to_string()),
            mode: self.mode.map(|m| m.as_str().to_string()),
        }
    }
}
