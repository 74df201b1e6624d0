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
use crate::identity::{NetworkId, SubnetworkId};
use crate::wire::{AccessConfigPayload, NetworkInterfacePayload};

const ONE_TO_ONE_NAT: &str = "ONE_TO_ONE_NAT";

/// An access configuration granting a network interface external
/// connectivity through one-to-one NAT.
///
/// Omitting the NAT IP asks the service to assign an ephemeral external
/// address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessConfig {
    name: Option<String>,
    nat_ip: Option<String>,
}

impl AccessConfig {
    /// Creates an access configuration with an ephemeral external address.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name of the access configuration.
    pub fn set_name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a reserved external address to map to the interface.
    pub fn set_nat_ip<T: Into<String>>(mut self, nat_ip: T) -> Self {
        self.nat_ip = Some(nat_ip.into());
        self
    }

    /// The display name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The external address mapped to the interface, if set.
    pub fn nat_ip(&self) -> Option<&str> {
        self.nat_ip.as_deref()
    }

    /// Converts a wire payload into an access configuration.
    pub fn from_wire(payload: &AccessConfigPayload) -> Result<Self, Error> {
        if let Some(t) = payload.r#type.as_deref() {
            if t != ONE_TO_ONE_NAT {
                return Err(Error::malformed(format!(
                    "unrecognized access config type: {t}"
                )));
            }
        }
        Ok(Self {
            name: payload.name.clone(),
            nat_ip: payload.nat_ip.clone(),
        })
    }

    /// Projects the access configuration to its wire form.
    pub fn to_wire(&self) -> AccessConfigPayload {
        AccessConfigPayload {
            name: self.name.clone(),
            nat_ip: self.nat_ip.clone(),
            r#type: Some(ONE_TO_ONE_NAT.to_string()),
        }
    }
}

/// A network interface of a virtual machine instance.
///
/// The interface always references a network; a subnetwork reference is
/// required only for networks in custom-subnet mode. The interface name and
/// internal address are assigned by the service.
///
/// # Examples
/// ```
/// # use google_cloud_compute_model::{AccessConfig, NetworkId, NetworkInterface};
/// let nic = NetworkInterface::of(NetworkId::of("default"))
///     .set_access_configs([AccessConfig::new()]);
/// assert_eq!(nic.network().network(), "default");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkInterface {
    name: Option<String>,
    network: NetworkId,
    subnetwork: Option<SubnetworkId>,
    network_ip: Option<String>,
    access_configs: Option<Vec<AccessConfig>>,
}

impl NetworkInterface {
    /// Creates an interface attached to the given network.
    pub fn of(network: NetworkId) -> Self {
        Self {
            name: None,
            network,
            subnetwork: None,
            network_ip: None,
            access_configs: None,
        }
    }

    /// Sets the subnetwork the interface belongs to.
    pub fn set_subnetwork(mut self, subnetwork: SubnetworkId) -> Self {
        self.subnetwork = Some(subnetwork);
        self
    }

    /// Sets the access configurations of the interface. The input is copied;
    /// later changes to the caller's collection do not affect this value.
    pub fn set_access_configs<I: Into<Vec<AccessConfig>>>(mut self, access_configs: I) -> Self {
        self.access_configs = Some(access_configs.into());
        self
    }

    pub(crate) fn set_name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn set_network_ip<T: Into<String>>(mut self, network_ip: T) -> Self {
        self.network_ip = Some(network_ip.into());
        self
    }

    /// The interface name assigned by the service, e.g. `nic0`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The identity of the network.
    pub fn network(&self) -> &NetworkId {
        &self.network
    }

    /// The identity of the subnetwork, if set.
    pub fn subnetwork(&self) -> Option<&SubnetworkId> {
        self.subnetwork.as_ref()
    }

    /// The internal address assigned by the service, if known.
    pub fn network_ip(&self) -> Option<&str> {
        self.network_ip.as_deref()
    }

    /// The access configurations of the interface.
    pub fn access_configs(&self) -> &[AccessConfig] {
        self.access_configs.as_deref().unwrap_or_default()
    }

    pub(crate) fn with_project(&self, project: &str) -> Self {
        Self {
            network: self.network.with_project(project),
            subnetwork: self.subnetwork.as_ref().map(|s| s.with_project(project)),
            ..self.clone()
        }
    }

    /// Converts a wire payload into a network interface.
    pub fn from_wire(payload: &NetworkInterfacePayload) -> Result<Self, Error> {
        let network = payload
            .network
            .as_deref()
            .ok_or_else(|| Error::malformed("network interface payload missing network"))?;
        let access_configs = payload
            .access_configs
            .as_deref()
            .map(|configs| {
                configs
                    .iter()
                    .map(AccessConfig::from_wire)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        Ok(Self {
            name: payload.name.clone(),
            network: NetworkId::from_url(network)?,
            subnetwork: payload
                .subnetwork
                .as_deref()
                .map(SubnetworkId::from_url)
                .transpose()?,
            network_ip: payload.network_ip.clone(),
            access_configs,
        })
    }

    /// Projects the network interface to its wire form.
    pub fn to_wire(&self) -> NetworkInterfacePayload {
        NetworkInterfacePayload {
            name: self.name.clone(),
            network: Some(self.network.self_link()),
            subnetwork: self.subnetwork.as_ref().map(SubnetworkId::self_link),
            network_ip: self.network_ip.clone(),
            access_configs: self
                .access_configs
                .as_ref()
                .map(|configs| configs.iter().map(AccessConfig::to_wire).collect()),
        }
    }
}
