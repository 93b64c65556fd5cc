// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Winix library.
//!
//! Failures are split by where they happen: local validation of a command
//! argument, the HTTP exchange with the Winix cloud, decoding of a response
//! body, and rejections reported by the account service.

use thiserror::Error;

use crate::types::Category;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The account service rejected the request.
    #[error("account request failed (code {result_code}): {result_message}")]
    Api {
        /// Result code reported by the service.
        result_code: String,
        /// Human readable message reported by the service.
        result_message: String,
    },

    /// Device was not found in the manager.
    #[error("device not found: {0}")]
    DeviceNotFound(String),
}

/// Errors related to value validation and constraints.
///
/// These are raised before anything is sent over the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The label is not part of the category's value table.
    #[error("invalid value '{label}' for {category}")]
    InvalidLabel {
        /// The category the label was meant for.
        category: Category,
        /// The rejected label.
        label: String,
    },

    /// A numeric value was given for an enumerated category.
    #[error("{0} does not accept numeric values")]
    NotNumeric(Category),

    /// A label was given for a numeric category.
    #[error("{0} only accepts numeric values")]
    NotEnumerated(Category),

    /// A brightness level outside the supported set was provided.
    #[error("invalid brightness level {0}, expected one of 0, 30, 70, 100")]
    InvalidBrightness(i64),

    /// An unknown preset mode name was provided.
    #[error("invalid preset mode: {0}")]
    InvalidPresetMode(String),

    /// An unknown fan speed was provided.
    #[error("invalid fan speed: {0}")]
    InvalidSpeed(String),

    /// A speed percentage above 100 was provided.
    #[error("percentage {0} is out of range [0, 100]")]
    InvalidPercentage(u8),

    /// An unknown category name was provided.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Errors related to the HTTP exchange with the Winix cloud.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, kept for diagnostics.
        body: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing Winix responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// The server reported that it has no data for the device.
    #[error("no data available")]
    NoData,

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
