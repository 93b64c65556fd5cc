// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named preset modes.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A user-facing preset, combining mode, airflow and plasma.
///
/// Presets parse from their display name or from their 1-based position in
/// [`PresetMode::ALL`]. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use winix_lib::device::PresetMode;
///
/// assert_eq!(" Sleep ".parse::<PresetMode>().unwrap(), PresetMode::Sleep);
/// assert_eq!("2".parse::<PresetMode>().unwrap(), PresetMode::AutoPlasmaOff);
/// assert_eq!(PresetMode::ManualPlasmaOff.to_string(), "Manual (PlasmaWave off)");
/// assert!("sleep".parse::<PresetMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetMode {
    /// Auto mode with plasma on.
    Auto,
    /// Auto mode with plasma off.
    AutoPlasmaOff,
    /// Manual mode with plasma on.
    Manual,
    /// Manual mode with plasma off.
    ManualPlasmaOff,
    /// Sleep airflow, plasma untouched.
    Sleep,
}

/// One step of a preset plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetStep {
    /// Switch to auto mode.
    Auto,
    /// Switch to manual mode.
    Manual,
    /// Switch to the sleep airflow.
    Sleep,
    /// Turn plasma on.
    PlasmaOn {
        /// Send even if plasma is believed to be on.
        force: bool,
    },
    /// Turn plasma off.
    PlasmaOff {
        /// Send even if plasma is believed to be off.
        force: bool,
    },
}

impl PresetMode {
    /// All presets in their numeric alias order.
    pub const ALL: [Self; 5] = [
        Self::Auto,
        Self::AutoPlasmaOff,
        Self::Manual,
        Self::ManualPlasmaOff,
        Self::Sleep,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::AutoPlasmaOff => "Auto (PlasmaWave off)",
            Self::Manual => "Manual",
            Self::ManualPlasmaOff => "Manual (PlasmaWave off)",
            Self::Sleep => "Sleep",
        }
    }

    /// Returns the steps that put the device into this preset, in order.
    ///
    /// The device is expected to be powered on before the first step.
    #[must_use]
    pub const fn steps(&self) -> &'static [PresetStep] {
        match self {
            Self::Auto => &[PresetStep::Auto, PresetStep::PlasmaOn { force: false }],
            Self::AutoPlasmaOff => &[PresetStep::Auto, PresetStep::PlasmaOff { force: true }],
            Self::Manual => &[PresetStep::Manual, PresetStep::PlasmaOn { force: false }],
            Self::ManualPlasmaOff => &[PresetStep::Manual, PresetStep::PlasmaOff { force: true }],
            Self::Sleep => &[PresetStep::Sleep],
        }
    }
}

impl fmt::Display for PresetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        if let Some(preset) = Self::ALL.into_iter().find(|preset| preset.as_str() == name) {
            return Ok(preset);
        }

        name.parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| ValueError::InvalidPresetMode(name.to_string()))
    }
}
