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

//! Resource model for Compute Engine virtual machine instances.
//!
//! This crate holds the immutable, strongly typed representation of an
//! instance resource and its bidirectional mapping to the service's REST/JSON
//! wire schema: structured identities parsed from and rendered to canonical
//! resource URLs, sub-resource value objects (tags, disks, network
//! interfaces, metadata, service accounts, scheduling policy), a validating
//! builder, and the [wire] payload types exchanged with the transport.
//!
//! The crate performs no I/O and holds no mutable state. Values are freely
//! shareable across threads once built; all failures are deterministic
//! functions of the input. The HTTP transport, authentication, and request
//! scheduling live in the client layer, not here.

mod attached_disk;
pub use crate::attached_disk::*;
mod error;
pub use crate::error::Error;
mod identity;
pub use crate::identity::*;
mod instance;
pub use crate::instance::*;
mod metadata;
pub use crate::metadata::*;
mod network_interface;
pub use crate::network_interface::*;
mod scheduling;
pub use crate::scheduling::*;
mod service_account;
pub use crate::service_account::*;
mod tags;
pub use crate::tags::*;
mod timestamp;
pub mod wire;
