// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event envelope shared by the state and parameter endpoints.

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ParseError;

/// Result message the server uses when it has nothing to report.
pub const NO_DATA_MESSAGE: &str = "no data";

/// Envelope returned by the `common/event/*` endpoints.
///
/// # Examples
///
/// ```
/// use winix_lib::response::EventEnvelope;
///
/// let json = r#"{
///     "statusCode": 200,
///     "headers": {"resultCode": "S100", "resultMessage": ""},
///     "body": {
///         "deviceId": "847207352CE0_364yr8i989",
///         "totalCnt": 1,
///         "data": [{"apiNo": "A210", "modelId": "C545", "attributes": {"A02": "1"}}]
///     }
/// }"#;
/// let envelope: EventEnvelope = serde_json::from_str(json).unwrap();
/// assert!(!envelope.is_no_data());
/// assert_eq!(envelope.attribute_pairs().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    /// Status code echoed in the body.
    #[serde(default)]
    pub status_code: Option<u16>,

    /// Result headers.
    #[serde(default)]
    pub headers: ResultHeaders,

    /// Payload, empty when the server has no data.
    #[serde(default)]
    pub body: EventBody,
}

/// The `headers` object of an envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultHeaders {
    /// Vendor result code, `S100` on success.
    #[serde(default)]
    pub result_code: Option<String>,

    /// Vendor result message.
    #[serde(default)]
    pub result_message: Option<String>,
}

/// The `body` object of an envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    /// Device the events belong to.
    #[serde(default)]
    pub device_id: Option<String>,

    /// Number of entries in `data`.
    #[serde(default)]
    pub total_cnt: Option<u32>,

    /// Event entries, newest first.
    #[serde(default)]
    pub data: Vec<EventData>,
}

/// One event entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    /// API number, e.g. `A210` for state.
    #[serde(default)]
    pub api_no: Option<String>,

    /// Model identifier.
    #[serde(default)]
    pub model_id: Option<String>,

    /// Signal strength as reported.
    #[serde(default)]
    pub rssi: Option<String>,

    /// Raw attributes keyed by wire code.
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl EventEnvelope {
    /// Parses an envelope from a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not a valid envelope.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        serde_json::from_str(body).map_err(Into::into)
    }

    /// Returns `true` if the server signalled that it has no data.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        self.headers.result_message.as_deref() == Some(NO_DATA_MESSAGE)
    }

    /// Returns the attributes of the first event.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::NoData` on the no-data signal and
    /// `ParseError::MissingField` if there is no event entry.
    pub fn first_attributes(&self) -> Result<&Map<String, Value>, ParseError> {
        if self.is_no_data() {
            return Err(ParseError::NoData);
        }
        self.body
            .data
            .first()
            .map(|data| &data.attributes)
            .ok_or_else(|| ParseError::MissingField("body.data[0].attributes".to_string()))
    }

    /// Returns the first event's attributes as wire code/value pairs.
    ///
    /// Values may arrive as JSON strings or numbers. Anything else is dropped.
    ///
    /// # Errors
    ///
    /// Same as [`first_attributes`](Self::first_attributes).
    pub fn attribute_pairs(&self) -> Result<Vec<(&str, Cow<'_, str>)>, ParseError> {
        Ok(self
            .first_attributes()?
            .iter()
            .filter_map(|(code, value)| wire_text(value).map(|text| (code.as_str(), text)))
            .collect())
    }
}

fn wire_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) => Some(Cow::Borrowed(text)),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_data() {
        let json = r#"{"statusCode": 200, "headers": {"resultCode": "S100", "resultMessage": "no data"}, "body": {}}"#;
        let envelope = EventEnvelope::parse(json).unwrap();
        assert!(envelope.is_no_data());
        assert!(matches!(envelope.first_attributes(), Err(ParseError::NoData)));
    }

    #[test]
    fn missing_data_is_an_error() {
        let envelope = EventEnvelope::parse(r#"{"headers": {}, "body": {"data": []}}"#).unwrap();
        assert!(matches!(
            envelope.first_attributes(),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn numeric_and_string_values() {
        let json = r#"{"body": {"data": [{"attributes": {"A02": "1", "S08": 74, "X": null}}]}}"#;
        let envelope = EventEnvelope::parse(json).unwrap();
        let mut pairs = envelope.attribute_pairs().unwrap();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![("A02", Cow::Borrowed("1")), ("S08", Cow::Borrowed("74"))]
        );
    }

    #[test]
    fn not_json() {
        assert!(matches!(
            EventEnvelope::parse("<html>"),
            Err(ParseError::Json(_))
        ));
    }
}
