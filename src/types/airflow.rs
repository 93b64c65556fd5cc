// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Airflow values and the user selectable fan speeds.
//!
//! The device reports five airflow values. Four of them are ordinary fan
//! speeds; [`Airflow::Sleep`] is a quiet preset that is surfaced as its own
//! mode instead of a speed.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::types::Category;

/// Airflow as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Airflow {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
    /// Turbo.
    Turbo,
    /// Sleep preset.
    Sleep,
}

impl Airflow {
    /// Returns the semantic label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Turbo => "turbo",
            Self::Sleep => "sleep",
        }
    }

    /// Returns the wire value code.
    ///
    /// There is no `04`.
    #[must_use]
    pub const fn wire_value(&self) -> &'static str {
        match self {
            Self::Low => "01",
            Self::Medium => "02",
            Self::High => "03",
            Self::Turbo => "05",
            Self::Sleep => "06",
        }
    }
}

impl fmt::Display for Airflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Airflow {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "turbo" => Ok(Self::Turbo),
            "sleep" => Ok(Self::Sleep),
            _ => Err(ValueError::InvalidLabel {
                category: Category::Airflow,
                label: s.to_string(),
            }),
        }
    }
}

/// A fan speed that can be selected in manual mode.
///
/// Speeds are ordered; percentages map onto them in equal steps of 25.
///
/// # Examples
///
/// ```
/// use winix_lib::types::FanSpeed;
///
/// assert_eq!(FanSpeed::High.percentage(), 75);
/// assert_eq!(FanSpeed::from_percentage(60).unwrap(), Some(FanSpeed::High));
/// assert_eq!(FanSpeed::from_percentage(0).unwrap(), None);
/// assert!("sleep".parse::<FanSpeed>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FanSpeed {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
    /// Turbo.
    Turbo,
}

impl FanSpeed {
    /// All speeds from slowest to fastest.
    pub const ORDERED: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Turbo];

    /// Returns the semantic label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.airflow().as_str()
    }

    /// Returns the matching airflow value.
    #[must_use]
    pub const fn airflow(&self) -> Airflow {
        match self {
            Self::Low => Airflow::Low,
            Self::Medium => Airflow::Medium,
            Self::High => Airflow::High,
            Self::Turbo => Airflow::Turbo,
        }
    }

    /// Returns the speed as a percentage of the fastest speed.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        let position = Self::ORDERED
            .iter()
            .position(|speed| speed == self)
            .unwrap_or_default();
        // Safe: position < 4, so the result is at most 100
        #[allow(clippy::cast_possible_truncation)]
        let percentage = ((position + 1) * 100 / Self::ORDERED.len()) as u8;
        percentage
    }

    /// Maps a percentage onto the ordered speed list.
    ///
    /// Returns `Ok(None)` for 0, which means the fan should be off.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidPercentage` if `percentage` is above 100.
    pub fn from_percentage(percentage: u8) -> Result<Option<Self>, ValueError> {
        if percentage > 100 {
            return Err(ValueError::InvalidPercentage(percentage));
        }
        if percentage == 0 {
            return Ok(None);
        }
        let len = Self::ORDERED.len();
        let position = (usize::from(percentage) * len).div_ceil(100) - 1;
        Ok(Some(Self::ORDERED[position]))
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanSpeed {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDERED
            .into_iter()
            .find(|speed| speed.as_str() == s)
            .ok_or_else(|| ValueError::InvalidSpeed(s.to_string()))
    }
}

impl From<FanSpeed> for Airflow {
    fn from(speed: FanSpeed) -> Self {
        speed.airflow()
    }
}

impl TryFrom<Airflow> for FanSpeed {
    type Error = ValueError;

    fn try_from(airflow: Airflow) -> Result<Self, Self::Error> {
        match airflow {
            Airflow::Low => Ok(Self::Low),
            Airflow::Medium => Ok(Self::Medium),
            Airflow::High => Ok(Self::High),
            Airflow::Turbo => Ok(Self::Turbo),
            Airflow::Sleep => Err(ValueError::InvalidSpeed(airflow.as_str().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airflow_codes() {
        assert_eq!(Airflow::Low.wire_value(), "01");
        assert_eq!(Airflow::Turbo.wire_value(), "05");
        assert_eq!(Airflow::Sleep.wire_value(), "06");
        assert_eq!("turbo".parse::<Airflow>().unwrap(), Airflow::Turbo);
        assert!("max".parse::<Airflow>().is_err());
    }

    #[test]
    fn speed_percentages() {
        assert_eq!(FanSpeed::Low.percentage(), 25);
        assert_eq!(FanSpeed::Medium.percentage(), 50);
        assert_eq!(FanSpeed::High.percentage(), 75);
        assert_eq!(FanSpeed::Turbo.percentage(), 100);
    }

    #[test]
    fn percentage_to_speed() {
        assert_eq!(FanSpeed::from_percentage(1).unwrap(), Some(FanSpeed::Low));
        assert_eq!(FanSpeed::from_percentage(25).unwrap(), Some(FanSpeed::Low));
        assert_eq!(FanSpeed::from_percentage(26).unwrap(), Some(FanSpeed::Medium));
        assert_eq!(FanSpeed::from_percentage(50).unwrap(), Some(FanSpeed::Medium));
        assert_eq!(FanSpeed::from_percentage(75).unwrap(), Some(FanSpeed::High));
        assert_eq!(FanSpeed::from_percentage(76).unwrap(), Some(FanSpeed::Turbo));
        assert_eq!(FanSpeed::from_percentage(100).unwrap(), Some(FanSpeed::Turbo));
    }

    #[test]
    fn percentage_out_of_range() {
        assert_eq!(
            FanSpeed::from_percentage(101),
            Err(ValueError::InvalidPercentage(101))
        );
    }

    #[test]
    fn speed_percentage_round_trip() {
        for speed in FanSpeed::ORDERED {
            assert_eq!(
                FanSpeed::from_percentage(speed.percentage()).unwrap(),
                Some(speed)
            );
        }
    }

    #[test]
    fn sleep_is_not_a_speed() {
        assert!(FanSpeed::try_from(Airflow::Sleep).is_err());
        assert_eq!(FanSpeed::try_from(Airflow::High).unwrap(), FanSpeed::High);
        assert_eq!(
            "sleep".parse::<FanSpeed>(),
            Err(ValueError::InvalidSpeed("sleep".to_string()))
        );
    }
}
