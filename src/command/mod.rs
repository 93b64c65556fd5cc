// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control commands.
//!
//! The Winix cloud accepts exactly one attribute write per request, addressed
//! as `{wire code}:{wire value}` in the control URL. A [`ControlCommand`] is
//! such a pair, and can only be built from entries of the code table or from
//! a validated number.
//!
//! # Examples
//!
//! ```
//! use winix_lib::command::ControlCommand;
//! use winix_lib::types::{Airflow, Category, Switch};
//!
//! let cmd = ControlCommand::power(Switch::On);
//! assert_eq!(cmd.wire_code(), "A02");
//! assert_eq!(cmd.wire_value(), "1");
//! assert_eq!(cmd.to_path(), "A02:1");
//!
//! // String form, validated against the table
//! let cmd = ControlCommand::encode(Category::Airflow, "turbo").unwrap();
//! assert_eq!(cmd, ControlCommand::airflow(Airflow::Turbo));
//! assert!(ControlCommand::encode(Category::Airflow, "warp").is_err());
//!
//! // Numeric form, validated against the category's domain
//! let cmd = ControlCommand::encode_number(Category::BrightnessLevel, 30).unwrap();
//! assert_eq!(cmd.to_path(), "A16:30");
//! assert!(ControlCommand::encode_number(Category::BrightnessLevel, 50).is_err());
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::codec::table;
use crate::error::ValueError;
use crate::types::{Airflow, BrightnessLevel, Category, FanSpeed, Mode, Switch};

/// A single validated attribute write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlCommand {
    category: Category,
    value: Cow<'static, str>,
}

impl ControlCommand {
    const fn from_table(category: Category, wire_value: &'static str) -> Self {
        Self {
            category,
            value: Cow::Borrowed(wire_value),
        }
    }

    /// Switches the device on or off.
    #[must_use]
    pub const fn power(state: Switch) -> Self {
        Self::from_table(Category::Power, state.wire_value())
    }

    /// Sets the operating mode.
    #[must_use]
    pub const fn mode(mode: Mode) -> Self {
        Self::from_table(Category::Mode, mode.wire_value())
    }

    /// Sets the airflow.
    #[must_use]
    pub const fn airflow(airflow: Airflow) -> Self {
        Self::from_table(Category::Airflow, airflow.wire_value())
    }

    /// Sets a fan speed.
    #[must_use]
    pub const fn speed(speed: FanSpeed) -> Self {
        Self::airflow(speed.airflow())
    }

    /// Switches plasma on or off.
    #[must_use]
    pub const fn plasma(state: Switch) -> Self {
        Self::from_table(Category::Plasma, state.wire_value())
    }

    /// Switches the child lock on or off.
    #[must_use]
    pub const fn child_lock(state: Switch) -> Self {
        Self::from_table(Category::ChildLock, state.wire_value())
    }

    /// Sets the display brightness.
    #[must_use]
    pub fn brightness_level(level: BrightnessLevel) -> Self {
        Self {
            category: Category::BrightnessLevel,
            value: Cow::Owned(level.value().to_string()),
        }
    }

    /// Encodes a semantic label of an enumerated category.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotEnumerated` for numeric categories and
    /// `ValueError::InvalidLabel` if the label is not in the category's table.
    pub fn encode(category: Category, label: &str) -> Result<Self, ValueError> {
        if table::value_codes(category).is_none() {
            return Err(ValueError::NotEnumerated(category));
        }
        let (_, wire_value) =
            table::value_for_label(category, label).ok_or_else(|| ValueError::InvalidLabel {
                category,
                label: label.to_string(),
            })?;
        Ok(Self::from_table(category, wire_value))
    }

    /// Encodes an integer for a numeric category.
    ///
    /// Brightness is restricted to the levels in [`BrightnessLevel`]. The
    /// value is written in plain decimal, so a decoded value that arrived
    /// zero-padded (`"01"`) is sent back as `"1"`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotNumeric` for enumerated categories and
    /// `ValueError::InvalidBrightness` for an unsupported brightness level.
    pub fn encode_number(category: Category, value: i64) -> Result<Self, ValueError> {
        if table::value_codes(category).is_some() {
            return Err(ValueError::NotNumeric(category));
        }
        if category == Category::BrightnessLevel {
            return BrightnessLevel::try_from(value).map(Self::brightness_level);
        }
        Ok(Self {
            category,
            value: Cow::Owned(value.to_string()),
        })
    }

    /// Returns the category being written.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the wire code.
    #[must_use]
    pub fn wire_code(&self) -> &'static str {
        self.category.wire_code()
    }

    /// Returns the wire value.
    #[must_use]
    pub fn wire_value(&self) -> &str {
        &self.value
    }

    /// Returns the `{code}:{value}` segment used in the control URL.
    #[must_use]
    pub fn to_path(&self) -> String {
        format!("{}:{}", self.wire_code(), self.value)
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label =
            table::label_for_value(self.category, &self.value).unwrap_or(self.value.as_ref());
        write!(f, "{}={}", self.category, label)
    }
}
