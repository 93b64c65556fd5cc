// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! [`DeviceState`] holds the decoded attributes of one device,
//! [`DeviceFacets`] caches the boolean flags derived from them, and
//! [`StateChange`] describes the local effect of an accepted command.
//!
//! # Examples
//!
//! ```
//! use winix_lib::state::{DeviceState, StateChange};
//! use winix_lib::types::Switch;
//!
//! let mut state = DeviceState::new();
//!
//! // Apply returns true if state actually changed
//! assert!(state.apply(&StateChange::Plasma(Switch::On)));
//! assert!(!state.apply(&StateChange::Plasma(Switch::On)));
//! ```

mod device_state;
mod facets;
mod state_change;

pub use device_state::{AttributeValue, DeviceState, TOTAL_FILTER_LIFE_HOURS};
pub use facets::{DeviceFacets, Features};
pub use state_change::StateChange;
