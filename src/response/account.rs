// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Account service response parsing.

use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

/// Result fields present on every account service response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult {
    /// Vendor result code, `"200"` on success.
    #[serde(default, deserialize_with = "lenient_string")]
    pub result_code: Option<String>,

    /// Vendor result message.
    #[serde(default)]
    pub result_message: Option<String>,
}

/// Response of `getDeviceInfoList`.
///
/// # Examples
///
/// ```
/// use winix_lib::response::DeviceInfoListResponse;
///
/// let json = r#"{
///     "resultCode": "200", "resultMessage": "SUCCESS",
///     "deviceInfoList": [{
///         "deviceId": "847207352CE0_364yr8i989", "mac": "847207352CE0",
///         "deviceAlias": "Bedroom", "deviceLocCode": "A01",
///         "filterReplaceDate": "2023-01-11 15:00:00",
///         "modelName": "C545", "mcuVer": "0.0.11"
///     }]
/// }"#;
/// let response: DeviceInfoListResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.device_info_list[0].device_alias.as_deref(), Some("Bedroom"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfoListResponse {
    /// Result fields.
    #[serde(flatten)]
    pub result: ApiResult,

    /// Devices registered to the account.
    #[serde(default)]
    pub device_info_list: Vec<DeviceInfo>,
}

/// One entry of the device list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Device id used in every control and state URL.
    #[serde(default)]
    pub device_id: String,

    /// MAC address.
    #[serde(default)]
    pub mac: Option<String>,

    /// Name given by the user.
    #[serde(default)]
    pub device_alias: Option<String>,

    /// Location code.
    #[serde(default)]
    pub device_loc_code: Option<String>,

    /// Date of the last filter replacement.
    #[serde(default)]
    pub filter_replace_date: Option<String>,

    /// Model name.
    #[serde(default)]
    pub model_name: Option<String>,

    /// MCU firmware version.
    #[serde(default)]
    pub mcu_ver: Option<String>,
}

/// Response of `getFilterAlarmInfo`.
///
/// `filter_usage_alarm` is in months, `0` when the reminder is disabled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterAlarmResponse {
    /// Result fields.
    #[serde(flatten)]
    pub result: ApiResult,

    /// Reminder period in months.
    #[serde(deserialize_with = "lenient_int")]
    pub filter_usage_alarm: i64,
}

fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| de::Error::custom(format!("{number} is not an integer"))),
        Value::String(text) => text.trim().parse().map_err(de::Error::custom),
        other => Err(de::Error::custom(format!("expected an integer, got {other}"))),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}
