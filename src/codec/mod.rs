// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translation between wire attributes and [`DeviceState`].
//!
//! The Winix cloud reports device state as a flat map of wire codes to wire
//! values, for example `{"A02": "1", "A04": "03", "S08": "74"}`. [`decode`]
//! turns such a map into a [`DeviceState`] using the static code [`table`].
//! The opposite direction lives in [`crate::command::ControlCommand`].
//!
//! # Examples
//!
//! ```
//! use winix_lib::codec::decode;
//! use winix_lib::types::{Airflow, Switch};
//!
//! let state = decode([("A02", "1"), ("A04", "03"), ("S08", "74"), ("Z99", "?")]);
//! assert_eq!(state.power(), Some(Switch::On));
//! assert_eq!(state.airflow(), Some(Airflow::High));
//! assert_eq!(state.air_qvalue(), Some(74));
//! assert_eq!(state.len(), 3);
//! ```

pub mod table;

use crate::state::DeviceState;

/// Decodes wire attributes into a structured state.
///
/// Unknown wire codes are skipped. A known enumerated category whose wire
/// value has no table entry is omitted, as is a numeric category whose
/// value is not an integer. Decoding never fails.
///
/// Numeric values are kept as integers, so re-encoding one yields its plain
/// decimal form: `("A05", "01")` decodes to 1 and encodes back as `A05:1`.
/// Enumerated values and canonical decimal numbers round-trip exactly.
pub fn decode<'a, I>(attributes: I) -> DeviceState
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut state = DeviceState::new();

    for (code, value) in attributes {
        let Some(category) = table::category_for_code(code) else {
            tracing::trace!(code, value, "Skipping unknown attribute");
            continue;
        };

        if table::value_codes(category).is_some() {
            match table::label_for_value(category, value) {
                Some(label) => state.set_label(category, label),
                None => tracing::debug!(%category, value, "Unknown value code"),
            }
        } else {
            match value.trim().parse::<i64>() {
                Ok(number) => state.set_number(category, number),
                Err(_) => tracing::debug!(%category, value, "Non-numeric value"),
            }
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AttributeValue;
    use crate::types::{AirQuality, Airflow, Category, Mode, Switch};

    #[test]
    fn decode_power() {
        assert_eq!(decode([("A02", "0")]).power(), Some(Switch::Off));
        assert_eq!(decode([("A02", "1")]).power(), Some(Switch::On));
    }

    #[test]
    fn decode_numeric_passthrough() {
        let state = decode([("S08", "79")]);
        assert_eq!(state.get(Category::AirQValue), Some(AttributeValue::Number(79)));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn decode_full_payload() {
        let state = decode([
            ("A02", "0"),
            ("A03", "01"),
            ("A04", "01"),
            ("A05", "01"),
            ("A07", "0"),
            ("A21", "1257"),
            ("S07", "01"),
            ("S08", "74"),
            ("S14", "121"),
        ]);

        assert_eq!(state.power(), Some(Switch::Off));
        assert_eq!(state.mode(), Some(Mode::Auto));
        assert_eq!(state.airflow(), Some(Airflow::Low));
        assert_eq!(state.aqi(), Some(1));
        assert_eq!(state.plasma(), Some(Switch::Off));
        assert_eq!(state.filter_hours(), Some(1257));
        assert_eq!(state.air_quality(), Some(AirQuality::Good));
        assert_eq!(state.air_qvalue(), Some(74));
        assert_eq!(state.ambient_light(), Some(121));
        assert_eq!(state.len(), 9);
    }

    #[test]
    fn unknown_codes_are_skipped() {
        let state = decode([("A99", "1"), ("rssi", "-55"), ("A02", "1")]);
        assert_eq!(state.len(), 1);
        assert_eq!(state.power(), Some(Switch::On));
    }

    #[test]
    fn unknown_value_is_omitted() {
        let state = decode([("A04", "04"), ("A03", "1"), ("A02", "on")]);
        assert!(state.is_empty());
    }

    #[test]
    fn non_numeric_value_is_omitted() {
        let state = decode([("S08", "n/a"), ("A21", "12")]);
        assert_eq!(state.air_qvalue(), None);
        assert_eq!(state.filter_hours(), Some(12));
    }

    #[test]
    fn brightness_and_child_lock() {
        let state = decode([("A16", "70"), ("A08", "1")]);
        assert_eq!(state.number(Category::BrightnessLevel), Some(70));
        assert_eq!(state.child_lock(), Some(Switch::On));
    }

    #[test]
    fn empty_input() {
        assert!(decode(std::iter::empty::<(&str, &str)>()).is_empty());
    }
}
