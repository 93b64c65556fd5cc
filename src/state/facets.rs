// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boolean facets derived from the device state.

use crate::types::{Airflow, Category, Mode, Switch};

use super::DeviceState;

/// Cached flags describing what the device is doing.
///
/// `is_auto` and `is_manual` are mutually exclusive. `is_sleep` and
/// `is_plasma_on` are independent of the mode.
///
/// # Examples
///
/// ```
/// use winix_lib::state::{DeviceFacets, DeviceState, StateChange};
/// use winix_lib::types::{Mode, Switch};
///
/// let mut state = DeviceState::new();
/// state.apply(&StateChange::Power(Switch::On));
/// state.apply(&StateChange::Mode(Mode::Auto));
///
/// let facets = DeviceFacets::derive(&state);
/// assert!(facets.is_on);
/// assert!(facets.is_auto);
/// assert!(!facets.is_manual);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DeviceFacets {
    /// Power is on.
    pub is_on: bool,
    /// Mode is auto.
    pub is_auto: bool,
    /// Mode is manual.
    pub is_manual: bool,
    /// Airflow is the sleep preset.
    pub is_sleep: bool,
    /// Plasma is on.
    pub is_plasma_on: bool,
}

impl DeviceFacets {
    /// Derives all facets from scratch.
    #[must_use]
    pub fn derive(state: &DeviceState) -> Self {
        let mut facets = Self {
            is_on: state.power() == Some(Switch::On),
            is_plasma_on: state.plasma() == Some(Switch::On),
            is_sleep: state.airflow() == Some(Airflow::Sleep),
            ..Self::default()
        };

        match state.mode() {
            Some(Mode::Auto) => facets.is_auto = true,
            Some(Mode::Manual) => facets.is_manual = true,
            None => {}
        }

        facets
    }
}

/// Optional hardware features, detected from the attributes a device reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    /// The display brightness can be changed.
    pub supports_brightness_level: bool,
    /// The device has a child lock.
    pub supports_child_lock: bool,
}

impl Features {
    /// Detects features from a decoded state.
    #[must_use]
    pub fn detect(state: &DeviceState) -> Self {
        Self {
            supports_brightness_level: state.contains(Category::BrightnessLevel),
            supports_child_lock: state.contains(Category::ChildLock),
        }
    }
}
