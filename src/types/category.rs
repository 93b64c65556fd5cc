// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute categories reported and accepted by Winix purifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::codec::table;
use crate::error::ValueError;

/// Local semantic name of a device attribute.
///
/// Each category maps to exactly one wire code in the vendor protocol (for
/// example [`Category::Power`] is `A02`).
///
/// # Examples
///
/// ```
/// use winix_lib::types::Category;
///
/// assert_eq!(Category::Power.as_str(), "power");
/// assert_eq!(Category::Power.wire_code(), "A02");
/// assert_eq!("air_qvalue".parse::<Category>().unwrap(), Category::AirQValue);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Power state (`off`/`on`).
    Power,
    /// Operating mode (`auto`/`manual`).
    Mode,
    /// Fan airflow (`low`, `medium`, `high`, `turbo`, `sleep`).
    Airflow,
    /// Air quality index as reported by the device.
    Aqi,
    /// `PlasmaWave` ionizer (`off`/`on`).
    Plasma,
    /// Display brightness in percent (0, 30, 70 or 100).
    BrightnessLevel,
    /// Child lock (`off`/`on`).
    ChildLock,
    /// Hours of filter usage.
    FilterHour,
    /// Air quality (`good`, `fair`, `poor`).
    AirQuality,
    /// Air quality value in "qv" units.
    AirQValue,
    /// Ambient light sensor reading.
    AmbientLight,
}

impl Category {
    /// All categories, in code table order.
    pub const ALL: [Self; 11] = [
        Self::Power,
        Self::Mode,
        Self::Airflow,
        Self::Aqi,
        Self::Plasma,
        Self::BrightnessLevel,
        Self::ChildLock,
        Self::FilterHour,
        Self::AirQuality,
        Self::AirQValue,
        Self::AmbientLight,
    ];

    /// Returns the category name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Mode => "mode",
            Self::Airflow => "airflow",
            Self::Aqi => "aqi",
            Self::Plasma => "plasma",
            Self::BrightnessLevel => "brightness_level",
            Self::ChildLock => "child_lock",
            Self::FilterHour => "filter_hour",
            Self::AirQuality => "air_quality",
            Self::AirQValue => "air_qvalue",
            Self::AmbientLight => "ambient_light",
        }
    }

    /// Returns the wire code used for this category.
    #[must_use]
    pub fn wire_code(&self) -> &'static str {
        table::wire_code(*self)
    }

    /// Returns `true` if values of this category are plain integers rather
    /// than entries of a value table.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        table::value_codes(*self).is_none()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ValueError::UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            "humidity".parse::<Category>(),
            Err(ValueError::UnknownCategory("humidity".to_string()))
        );
    }

    #[test]
    fn names_are_exact() {
        assert!("Power".parse::<Category>().is_err());
        assert!("pow".parse::<Category>().is_err());
    }

    #[test]
    fn numeric_categories() {
        assert!(Category::Aqi.is_numeric());
        assert!(Category::FilterHour.is_numeric());
        assert!(Category::AirQValue.is_numeric());
        assert!(Category::AmbientLight.is_numeric());
        assert!(Category::BrightnessLevel.is_numeric());
        assert!(!Category::Power.is_numeric());
        assert!(!Category::AirQuality.is_numeric());
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&Category::AirQValue).unwrap();
        assert_eq!(json, "\"air_qvalue\"");
    }
}
