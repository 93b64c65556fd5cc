// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display brightness levels.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Brightness of the purifier's display.
///
/// Only four discrete levels are accepted by the device. The wire value is
/// the level in percent.
///
/// # Examples
///
/// ```
/// use winix_lib::types::BrightnessLevel;
///
/// let level = BrightnessLevel::try_from(70).unwrap();
/// assert_eq!(level, BrightnessLevel::Medium);
/// assert_eq!(level.to_string(), "70 %");
/// assert!(BrightnessLevel::try_from(50).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BrightnessLevel {
    /// Display off.
    Off,
    /// 30 %.
    Low,
    /// 70 %.
    Medium,
    /// 100 %.
    High,
}

impl BrightnessLevel {
    /// All levels from dimmest to brightest.
    pub const ALL: [Self; 4] = [Self::Off, Self::Low, Self::Medium, Self::High];

    /// Returns the level in percent.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Low => 30,
            Self::Medium => 70,
            Self::High => 100,
        }
    }
}

impl fmt::Display for BrightnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} %", self.value())
    }
}

impl TryFrom<i64> for BrightnessLevel {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|level| i64::from(level.value()) == value)
            .ok_or(ValueError::InvalidBrightness(value))
    }
}

impl FromStr for BrightnessLevel {
    type Err = ValueError;

    /// Parses `"70"`, `"70%"` or `"70 %"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches('%').trim_end();
        let value: i64 = digits.parse().map_err(|_| ValueError::InvalidBrightness(-1))?;
        Self::try_from(value)
    }
}
