// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structured device state.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::types::{AirQuality, Airflow, BrightnessLevel, Category, Mode, Switch};

use super::StateChange;

/// Total filter life in hours (12 months).
pub const TOTAL_FILTER_LIFE_HOURS: i64 = 8760;

/// A decoded attribute value.
///
/// Enumerated categories hold a label from the code table, numeric
/// categories hold the integer the device reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A label such as `"on"` or `"auto"`.
    Label(&'static str),
    /// A plain integer reading.
    Number(i64),
}

impl AttributeValue {
    /// Returns the label, if this is a label.
    #[must_use]
    pub const fn as_label(&self) -> Option<&'static str> {
        match self {
            Self::Label(label) => Some(*label),
            Self::Number(_) => None,
        }
    }

    /// Returns the number, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Label(_) => None,
            Self::Number(value) => Some(*value),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => f.write_str(label),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Last known state of a Winix device.
///
/// A mapping from [`Category`] to [`AttributeValue`]. Categories the device
/// did not report are simply absent, so every accessor returns an `Option`.
///
/// # Examples
///
/// ```
/// use winix_lib::state::{DeviceState, StateChange};
/// use winix_lib::types::{Airflow, Switch};
///
/// let mut state = DeviceState::new();
/// assert!(state.is_empty());
///
/// state.apply(&StateChange::Power(Switch::On));
/// state.apply(&StateChange::Airflow(Airflow::High));
///
/// assert_eq!(state.power(), Some(Switch::On));
/// assert_eq!(state.airflow(), Some(Airflow::High));
/// assert_eq!(state.mode(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeviceState {
    values: BTreeMap<Category, AttributeValue>,
}

impl DeviceState {
    /// Creates a new empty device state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no category is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of known categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the category is known.
    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.values.contains_key(&category)
    }

    /// Gets the raw value of a category.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<AttributeValue> {
        self.values.get(&category).copied()
    }

    /// Gets the label of an enumerated category.
    #[must_use]
    pub fn label(&self, category: Category) -> Option<&'static str> {
        self.get(category)?.as_label()
    }

    /// Gets the value of a numeric category.
    #[must_use]
    pub fn number(&self, category: Category) -> Option<i64> {
        self.get(category)?.as_number()
    }

    /// Iterates over known categories in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, AttributeValue)> + '_ {
        self.values.iter().map(|(category, value)| (*category, *value))
    }

    pub(crate) fn set_label(&mut self, category: Category, label: &'static str) {
        self.values.insert(category, AttributeValue::Label(label));
    }

    pub(crate) fn set_number(&mut self, category: Category, value: i64) {
        self.values.insert(category, AttributeValue::Number(value));
    }

    /// Removes a category.
    pub fn remove(&mut self, category: Category) -> Option<AttributeValue> {
        self.values.remove(&category)
    }

    // ========== Typed accessors ==========

    /// Gets the power state.
    #[must_use]
    pub fn power(&self) -> Option<Switch> {
        self.label(Category::Power)?.parse().ok()
    }

    /// Gets the operating mode.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        self.label(Category::Mode)?.parse().ok()
    }

    /// Gets the airflow.
    #[must_use]
    pub fn airflow(&self) -> Option<Airflow> {
        self.label(Category::Airflow)?.parse().ok()
    }

    /// Gets the plasma state.
    #[must_use]
    pub fn plasma(&self) -> Option<Switch> {
        self.label(Category::Plasma)?.parse().ok()
    }

    /// Gets the child lock state.
    #[must_use]
    pub fn child_lock(&self) -> Option<Switch> {
        self.label(Category::ChildLock)?.parse().ok()
    }

    /// Gets the air quality.
    #[must_use]
    pub fn air_quality(&self) -> Option<AirQuality> {
        self.label(Category::AirQuality)?.parse().ok()
    }

    /// Gets the display brightness.
    ///
    /// Returns `None` if unknown or if the device reported a level outside
    /// the supported set.
    #[must_use]
    pub fn brightness_level(&self) -> Option<BrightnessLevel> {
        BrightnessLevel::try_from(self.number(Category::BrightnessLevel)?).ok()
    }

    /// Gets the air quality index.
    #[must_use]
    pub fn aqi(&self) -> Option<i64> {
        self.number(Category::Aqi)
    }

    /// Gets the air quality value in "qv" units.
    #[must_use]
    pub fn air_qvalue(&self) -> Option<i64> {
        self.number(Category::AirQValue)
    }

    /// Gets the ambient light reading.
    #[must_use]
    pub fn ambient_light(&self) -> Option<i64> {
        self.number(Category::AmbientLight)
    }

    /// Gets the hours of filter usage.
    #[must_use]
    pub fn filter_hours(&self) -> Option<i64> {
        self.number(Category::FilterHour)
    }

    /// Gets the remaining filter life in percent.
    ///
    /// Returns `None` if the usage is unknown or exceeds
    /// [`TOTAL_FILTER_LIFE_HOURS`].
    #[must_use]
    pub fn filter_life_percent(&self) -> Option<u8> {
        let hours = self.filter_hours()?;
        if !(0..=TOTAL_FILTER_LIFE_HOURS).contains(&hours) {
            tracing::warn!(
                hours,
                max = TOTAL_FILTER_LIFE_HOURS,
                "Reported filter usage is outside the filter life"
            );
            return None;
        }
        // Safe: the result is within 0..=100
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent =
            ((TOTAL_FILTER_LIFE_HOURS - hours) * 100 / TOTAL_FILTER_LIFE_HOURS) as u8;
        Some(percent)
    }

    // ========== Applying changes ==========

    /// Applies a state change.
    ///
    /// Returns `true` if the state actually changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Power(value) => self.replace(Category::Power, value.as_str()),
            StateChange::Mode(value) => self.replace(Category::Mode, value.as_str()),
            StateChange::Airflow(value) => self.replace(Category::Airflow, value.as_str()),
            StateChange::Plasma(value) => self.replace(Category::Plasma, value.as_str()),
            StateChange::ChildLock(value) => self.replace(Category::ChildLock, value.as_str()),
            StateChange::BrightnessLevel(level) => {
                let value = AttributeValue::Number(i64::from(level.value()));
                self.values.insert(Category::BrightnessLevel, value) != Some(value)
            }
            StateChange::Batch(changes) => changes
                .iter()
                .fold(false, |changed, change| self.apply(change) || changed),
        }
    }

    fn replace(&mut self, category: Category, label: &'static str) -> bool {
        let value = AttributeValue::Label(label);
        self.values.insert(category, value) != Some(value)
    }

    /// Clears all known values.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = DeviceState::new();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
        assert!(state.power().is_none());
        assert!(state.airflow().is_none());
        assert!(state.filter_hours().is_none());
    }

    #[test]
    fn typed_accessors() {
        let mut state = DeviceState::new();
        state.set_label(Category::Power, "on");
        state.set_label(Category::Mode, "manual");
        state.set_label(Category::Airflow, "sleep");
        state.set_label(Category::AirQuality, "fair");
        state.set_number(Category::AirQValue, 79);
        state.set_number(Category::BrightnessLevel, 70);

        assert_eq!(state.power(), Some(Switch::On));
        assert_eq!(state.mode(), Some(Mode::Manual));
        assert_eq!(state.airflow(), Some(Airflow::Sleep));
        assert_eq!(state.air_quality(), Some(AirQuality::Fair));
        assert_eq!(state.air_qvalue(), Some(79));
        assert_eq!(state.brightness_level(), Some(BrightnessLevel::Medium));
        assert_eq!(state.plasma(), None);
    }

    #[test]
    fn unsupported_brightness_reading() {
        let mut state = DeviceState::new();
        state.set_number(Category::BrightnessLevel, 50);
        assert_eq!(state.number(Category::BrightnessLevel), Some(50));
        assert_eq!(state.brightness_level(), None);
    }

    #[test]
    fn label_and_number_do_not_mix() {
        let mut state = DeviceState::new();
        state.set_number(Category::Power, 1);
        assert_eq!(state.label(Category::Power), None);
        assert_eq!(state.power(), None);
    }

    #[test]
    fn filter_life() {
        let mut state = DeviceState::new();
        state.set_number(Category::FilterHour, 0);
        assert_eq!(state.filter_life_percent(), Some(100));

        state.set_number(Category::FilterHour, 1257);
        assert_eq!(state.filter_life_percent(), Some(85));

        state.set_number(Category::FilterHour, TOTAL_FILTER_LIFE_HOURS);
        assert_eq!(state.filter_life_percent(), Some(0));

        state.set_number(Category::FilterHour, TOTAL_FILTER_LIFE_HOURS + 1);
        assert_eq!(state.filter_life_percent(), None);
    }

    #[test]
    fn apply_reports_changes() {
        let mut state = DeviceState::new();
        assert!(state.apply(&StateChange::Power(Switch::On)));
        assert!(!state.apply(&StateChange::Power(Switch::On)));
        assert!(state.apply(&StateChange::Power(Switch::Off)));
        assert_eq!(state.power(), Some(Switch::Off));
    }

    #[test]
    fn apply_batch() {
        let mut state = DeviceState::new();
        let batch = StateChange::Batch(vec![
            StateChange::Mode(Mode::Manual),
            StateChange::Airflow(Airflow::Sleep),
        ]);
        assert!(state.apply(&batch));
        assert_eq!(state.mode(), Some(Mode::Manual));
        assert_eq!(state.airflow(), Some(Airflow::Sleep));
        assert!(!state.apply(&batch));
    }

    #[test]
    fn apply_brightness() {
        let mut state = DeviceState::new();
        assert!(state.apply(&StateChange::BrightnessLevel(BrightnessLevel::Low)));
        assert_eq!(state.number(Category::BrightnessLevel), Some(30));
        assert!(!state.apply(&StateChange::BrightnessLevel(BrightnessLevel::Low)));
    }

    #[test]
    fn clear_resets_state() {
        let mut state = DeviceState::new();
        state.apply(&StateChange::Plasma(Switch::On));
        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn serializes_as_flat_map() {
        let mut state = DeviceState::new();
        state.set_label(Category::Power, "on");
        state.set_number(Category::AirQValue, 74);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "power": "on", "air_qvalue": 74 })
        );
    }
}
