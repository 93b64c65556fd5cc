// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode and air quality values.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::types::Category;

/// Operating mode of a purifier.
///
/// In [`Mode::Auto`] the device picks its own airflow from the air quality
/// sensor. Airflow commands are only honoured in [`Mode::Manual`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Sensor driven airflow.
    Auto,
    /// User selected airflow.
    Manual,
}

impl Mode {
    /// Returns the semantic label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }

    /// Returns the wire value code.
    #[must_use]
    pub const fn wire_value(&self) -> &'static str {
        match self {
            Self::Auto => "01",
            Self::Manual => "02",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "manual" => Ok(Self::Manual),
            _ => Err(ValueError::InvalidLabel {
                category: Category::Mode,
                label: s.to_string(),
            }),
        }
    }
}

/// Air quality reported by the device sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirQuality {
    /// Good.
    Good,
    /// Fair.
    Fair,
    /// Poor.
    Poor,
}

impl AirQuality {
    /// Returns the semantic label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    /// Returns the wire value code.
    #[must_use]
    pub const fn wire_value(&self) -> &'static str {
        match self {
            Self::Good => "01",
            Self::Fair => "02",
            Self::Poor => "03",
        }
    }
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AirQuality {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            "poor" => Ok(Self::Poor),
            _ => Err(ValueError::InvalidLabel {
                category: Category::AirQuality,
                label: s.to_string(),
            }),
        }
    }
}
