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
use crate::wire::SchedulingPayload;

/// How the service handles an instance during a host maintenance event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Maintenance {
    /// Live-migrate the instance to another host.
    Migrate,
    /// Terminate the instance; it restarts later if automatic restart is
    /// enabled.
    Terminate,
}

impl Maintenance {
    /// The wire name of the behavior.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Migrate => "MIGRATE",
            Self::Terminate => "TERMINATE",
        }
    }

    pub(crate) fn from_wire(value: &str) -> Result<Self, Error> {
        match value {
            "MIGRATE" => Ok(Self::Migrate),
            "TERMINATE" => Ok(Self::Terminate),
            _ => Err(Error::malformed(format!(
                "unrecognized maintenance behavior: {value}"
            ))),
        }
    }
}

/// The scheduling policy of an instance: preemptibility, automatic restart,
/// and host-maintenance behavior.
///
/// Preemptible instances can be reclaimed by the service at any time. They
/// cannot restart automatically and always terminate on host maintenance;
/// [SchedulingOptions::preemptible] encodes that combination. Standard
/// instances choose both behaviors through [SchedulingOptions::standard].
///
/// # Examples
/// ```
/// # use google_cloud_compute_model::{Maintenance, SchedulingOptions};
/// let standard = SchedulingOptions::standard(true, Maintenance::Migrate);
/// assert!(!standard.preemptible());
/// assert_eq!(standard.automatic_restart(), Some(true));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulingOptions {
    preemptible: bool,
    automatic_restart: Option<bool>,
    on_host_maintenance: Option<Maintenance>,
}

impl SchedulingOptions {
    /// The policy of a preemptible instance.
    pub fn preemptible_instance() -> Self {
        Self {
            preemptible: true,
            automatic_restart: Some(false),
            on_host_maintenance: Some(Maintenance::Terminate),
        }
    }

    /// The policy of a standard instance with the given restart and
    /// maintenance behaviors.
    pub fn standard(automatic_restart: bool, on_host_maintenance: Maintenance) -> Self {
        Self {
            preemptible: false,
            automatic_restart: Some(automatic_restart),
            on_host_maintenance: Some(on_host_maintenance),
        }
    }

    /// Whether the instance is preemptible.
    pub fn preemptible(&self) -> bool {
        self.preemptible
    }

    /// Whether the instance restarts automatically after a crash or
    /// maintenance termination.
    pub fn automatic_restart(&self) -> Option<bool> {
        self.automatic_restart
    }

    /// The host-maintenance behavior, if set.
    pub fn on_host_maintenance(&self) -> Option<Maintenance> {
        self.on_host_maintenance
    }

    /// Converts a wire payload into a scheduling policy.
    pub fn from_wire(payload: &SchedulingPayload) -> Result<Self, Error> {
        Ok(Self {
            preemptible: payload.preemptible.unwrap_or(false),
            automatic_restart: payload.automatic_restart,
            on_host_maintenance: payload
                .on_host_maintenance
                .as_deref()
                .map(Maintenance::from_wire)
                .transpose()?,
        })
    }

    /// Projects the scheduling policy to its wire form.
    pub fn to_wire(&self) -> SchedulingPayload {
        SchedulingPayload {
            preemptible: Some(self.preemptible),
            automatic_restart: self.automatic_restart,
            on_host_maintenance: self.on_host_maintenance.map(|m| m.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preemptible_factory() {
        let options = SchedulingOptions::preemptible_instance();
        assert!(options.preemptible());
        assert_eq!(options.automatic_restart(), Some(false));
        assert_eq!(options.on_host_maintenance(), Some(Maintenance::Terminate));
    }

    #[test]
    fn roundtrip() {
        let options = SchedulingOptions::standard(true, Maintenance::Migrate);
        let payload = options.to_wire();
        assert_eq!(SchedulingOptions::from_wire(&payload).unwrap(), options);
    }

    #[test]
    fn from_wire_rejects_unknown_maintenance() {
        let payload = serde_json::from_value::<SchedulingPayload>(
            json!({"onHostMaintenance": "RELOCATE"}),
        )
        .unwrap();
        let err = SchedulingOptions::from_wire(&payload).unwrap_err();
        assert!(err.is_malformed_wire_data(), "{err}");
    }
}
