// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The attribute code table.
//!
//! Two levels: every [`Category`] has one wire code, and enumerated
//! categories additionally have a table of `(label, wire value)` rows.
//! Categories without a value table are numeric: their wire value is a
//! decimal integer.
//!
//! Value rows are built from the typed enums in [`crate::types`], so a typed
//! value always has a table entry. All lookups are exact string matches.

use crate::types::{AirQuality, Airflow, Category, Mode, Switch};

/// Rows of `(label, wire value)` for one enumerated category.
pub type ValueCodes = &'static [(&'static str, &'static str)];

const SWITCH_CODES: ValueCodes = &[
    (Switch::Off.as_str(), Switch::Off.wire_value()),
    (Switch::On.as_str(), Switch::On.wire_value()),
];

const MODE_CODES: ValueCodes = &[
    (Mode::Auto.as_str(), Mode::Auto.wire_value()),
    (Mode::Manual.as_str(), Mode::Manual.wire_value()),
];

const AIRFLOW_CODES: ValueCodes = &[
    (Airflow::Low.as_str(), Airflow::Low.wire_value()),
    (Airflow::Medium.as_str(), Airflow::Medium.wire_value()),
    (Airflow::High.as_str(), Airflow::High.wire_value()),
    (Airflow::Turbo.as_str(), Airflow::Turbo.wire_value()),
    (Airflow::Sleep.as_str(), Airflow::Sleep.wire_value()),
];

const AIR_QUALITY_CODES: ValueCodes = &[
    (AirQuality::Good.as_str(), AirQuality::Good.wire_value()),
    (AirQuality::Fair.as_str(), AirQuality::Fair.wire_value()),
    (AirQuality::Poor.as_str(), AirQuality::Poor.wire_value()),
];

/// Returns the wire code of a category.
#[must_use]
pub const fn wire_code(category: Category) -> &'static str {
    match category {
        Category::Power => "A02",
        Category::Mode => "A03",
        Category::Airflow => "A04",
        Category::Aqi => "A05",
        Category::Plasma => "A07",
        Category::ChildLock => "A08",
        Category::BrightnessLevel => "A16",
        Category::FilterHour => "A21",
        Category::AirQuality => "S07",
        Category::AirQValue => "S08",
        Category::AmbientLight => "S14",
    }
}

/// Returns the value table of an enumerated category, or `None` for numeric
/// categories.
#[must_use]
pub const fn value_codes(category: Category) -> Option<ValueCodes> {
    match category {
        Category::Power | Category::Plasma | Category::ChildLock => Some(SWITCH_CODES),
        Category::Mode => Some(MODE_CODES),
        Category::Airflow => Some(AIRFLOW_CODES),
        Category::AirQuality => Some(AIR_QUALITY_CODES),
        Category::Aqi
        | Category::BrightnessLevel
        | Category::FilterHour
        | Category::AirQValue
        | Category::AmbientLight => None,
    }
}

/// Finds the category whose wire code is exactly `code`.
#[must_use]
pub fn category_for_code(code: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|category| wire_code(*category) == code)
}

/// Finds the label whose wire value is exactly `wire_value`.
#[must_use]
pub fn label_for_value(category: Category, wire_value: &str) -> Option<&'static str> {
    value_codes(category)?
        .iter()
        .find(|(_, value)| *value == wire_value)
        .map(|(label, _)| *label)
}

/// Finds the wire value of `label`, together with the label's static form.
#[must_use]
pub fn value_for_label(category: Category, label: &str) -> Option<(&'static str, &'static str)> {
    value_codes(category)?
        .iter()
        .find(|(known, _)| *known == label)
        .copied()
}
