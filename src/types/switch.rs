// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Two-state values shared by power, plasma and child lock.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::types::Category;

/// An off/on value.
///
/// Used for the [`Power`](Category::Power), [`Plasma`](Category::Plasma) and
/// [`ChildLock`](Category::ChildLock) categories, which all encode off as `0`
/// and on as `1`.
///
/// # Examples
///
/// ```
/// use winix_lib::types::Switch;
///
/// assert_eq!(Switch::On.as_str(), "on");
/// assert_eq!(Switch::On.wire_value(), "1");
/// assert_eq!(Switch::from(false), Switch::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Switch {
    /// Off.
    Off,
    /// On.
    On,
}

impl Switch {
    /// Returns the semantic label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns the wire value code.
    #[must_use]
    pub const fn wire_value(&self) -> &'static str {
        match self {
            Self::Off => "0",
            Self::On => "1",
        }
    }

    /// Returns `true` for [`Switch::On`].
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Switch {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            _ => Err(ValueError::InvalidLabel {
                category: Category::Power,
                label: s.to_string(),
            }),
        }
    }
}

impl From<bool> for Switch {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}
