// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State and parameter response parsing.

use crate::codec;
use crate::error::ParseError;
use crate::state::DeviceState;

use super::EventEnvelope;

/// Attribute code carrying the filter life in the parameter response.
pub const FILTER_LIFE_CODE: &str = "P01";

/// Parses a state response body into a decoded [`DeviceState`].
///
/// # Errors
///
/// Returns `ParseError::NoData` when the server signals it has no data,
/// `ParseError::Json` for a body that is not an envelope and
/// `ParseError::MissingField` when the envelope carries no event.
///
/// # Examples
///
/// ```
/// use winix_lib::response::parse_state;
/// use winix_lib::types::Switch;
///
/// let body = r#"{"headers": {"resultMessage": ""},
///     "body": {"data": [{"attributes": {"A02": "1", "A07": "0"}}]}}"#;
/// let state = parse_state(body).unwrap();
/// assert_eq!(state.power(), Some(Switch::On));
/// assert_eq!(state.plasma(), Some(Switch::Off));
/// ```
pub fn parse_state(body: &str) -> Result<DeviceState, ParseError> {
    let envelope = EventEnvelope::parse(body)?;
    let pairs = envelope.attribute_pairs()?;
    Ok(codec::decode(
        pairs.iter().map(|(code, value)| (*code, value.as_ref())),
    ))
}

/// Parses the filter life, in hours, from a parameter response body.
///
/// # Errors
///
/// Returns `ParseError::NoData` on the no-data signal,
/// `ParseError::MissingField` if `P01` is absent and
/// `ParseError::InvalidValue` if it is not an integer.
pub fn parse_filter_life(body: &str) -> Result<i64, ParseError> {
    let envelope = EventEnvelope::parse(body)?;
    let pairs = envelope.attribute_pairs()?;
    let (_, value) = pairs
        .iter()
        .find(|(code, _)| *code == FILTER_LIFE_CODE)
        .ok_or_else(|| ParseError::MissingField(FILTER_LIFE_CODE.to_string()))?;

    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ParseError::InvalidValue {
            field: FILTER_LIFE_CODE.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AirQuality, Airflow, Mode, Switch};

    const STATE_BODY: &str = r#"{
        "statusCode": 200,
        "headers": {"resultCode": "S100", "resultMessage": ""},
        "body": {
            "deviceId": "847207352CE0_364yr8i989", "totalCnt": 1,
            "data": [{
                "apiNo": "A210", "apiGroup": "001", "deviceGroup": "Air01", "modelId": "C545",
                "attributes": {"A02": "0", "A03": "01", "A04": "01", "A05": "01", "A07": "0",
                               "A21": "1257", "S07": "01", "S08": "74", "S14": "121"},
                "rssi": "-55", "creationTime": 1673449200634, "utcDatetime": "2023-01-11 15:00:00"
            }]
        }
    }"#;

    #[test]
    fn parse_full_state() {
        let state = parse_state(STATE_BODY).unwrap();
        assert_eq!(state.power(), Some(Switch::Off));
        assert_eq!(state.mode(), Some(Mode::Auto));
        assert_eq!(state.airflow(), Some(Airflow::Low));
        assert_eq!(state.air_quality(), Some(AirQuality::Good));
        assert_eq!(state.air_qvalue(), Some(74));
        assert_eq!(state.filter_hours(), Some(1257));
        assert_eq!(state.len(), 9);
    }

    #[test]
    fn no_data_signal() {
        let body = r#"{"statusCode": 200, "headers": {"resultCode": "S100", "resultMessage": "no data"}, "body": {}}"#;
        assert!(matches!(parse_state(body), Err(ParseError::NoData)));
    }

    #[test]
    fn malformed_body() {
        assert!(matches!(parse_state("{\"body\": 3}"), Err(ParseError::Json(_))));
        assert!(matches!(
            parse_state("{\"body\": {}}"),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn filter_life() {
        let body = r#"{
            "statusCode": 200, "headers": {"resultCode": "S100", "resultMessage": ""},
            "body": {"deviceId": "x", "totalCnt": 1,
                     "data": [{"apiNo": "A240", "apiGroup": "004", "modelId": "C545", "attributes": {"P01": "6480"}}]}
        }"#;
        assert_eq!(parse_filter_life(body).unwrap(), 6480);
    }

    #[test]
    fn filter_life_errors() {
        let missing = r#"{"body": {"data": [{"attributes": {}}]}}"#;
        assert!(matches!(
            parse_filter_life(missing),
            Err(ParseError::MissingField(_))
        ));

        let invalid = r#"{"body": {"data": [{"attributes": {"P01": "soon"}}]}}"#;
        assert!(matches!(
            parse_filter_life(invalid),
            Err(ParseError::InvalidValue { .. })
        ));

        let no_data = r#"{"headers": {"resultMessage": "no data"}, "body": {}}"#;
        assert!(matches!(parse_filter_life(no_data), Err(ParseError::NoData)));
    }
}
