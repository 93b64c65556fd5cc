// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Account service client.
//!
//! The mobile API lists the purifiers registered to an account and exposes
//! account-level settings such as the filter replacement reminder. Requests
//! are authenticated with an access token and the client UUID obtained at
//! login; obtaining them is left to the caller.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use uuid::Uuid;
//! use winix_lib::account::AccountClient;
//! use winix_lib::protocol::{Endpoints, HttpClient};
//!
//! # async fn example(access_token: &str, uuid: Uuid) -> winix_lib::Result<()> {
//! let account = AccountClient::new(Arc::new(HttpClient::new()?), Endpoints::default());
//!
//! for stub in account.device_stubs(access_token, &uuid).await? {
//!     let hours = account.filter_alarm_duration(access_token, &uuid, stub.id()).await?;
//!     println!("{}: replace filter every {hours} h", stub.alias());
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use uuid::Uuid;

use crate::device::DeviceStub;
use crate::error::{Error, ParseError, ProtocolError};
use crate::protocol::{Endpoints, Transport};
use crate::response::{ApiResult, DeviceInfoListResponse, FilterAlarmResponse};

/// Reminder period used when the reminder is disabled in the app.
pub const DEFAULT_FILTER_ALARM_MONTHS: i64 = 9;

/// Client for the account endpoints.
#[derive(Debug)]
pub struct AccountClient<T> {
    transport: Arc<T>,
    endpoints: Endpoints,
}

impl<T> Clone for AccountClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoints: self.endpoints.clone(),
        }
    }
}

impl<T: Transport> AccountClient<T> {
    /// Creates an account client.
    pub fn new(transport: Arc<T>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// Lists the devices registered to the account.
    ///
    /// # Errors
    ///
    /// Returns `Error::Api` if the service rejects the request,
    /// `Error::Protocol` if it cannot be reached and `Error::Parse` if the
    /// answer is not a device list.
    pub async fn device_stubs(&self, access_token: &str, uuid: &Uuid) -> Result<Vec<DeviceStub>, Error> {
        let body = serde_json::json!({
            "accessToken": access_token,
            "uuid": uuid,
        });

        let response = self
            .transport
            .post_json(&self.endpoints.device_list(), &body)
            .await
            .map_err(api_error)?;

        let list: DeviceInfoListResponse =
            serde_json::from_str(&response).map_err(ParseError::from)?;

        let stubs: Vec<DeviceStub> = list
            .device_info_list
            .into_iter()
            .map(DeviceStub::from)
            .collect();

        tracing::info!(count = stubs.len(), "Purifiers found");
        Ok(stubs)
    }

    /// Returns the filter replacement reminder period in hours.
    ///
    /// A disabled reminder (`0` months) falls back to
    /// [`DEFAULT_FILTER_ALARM_MONTHS`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Api` if the service rejects the request,
    /// `Error::Protocol` if it cannot be reached and `Error::Parse` if the
    /// answer carries no usable `filterUsageAlarm`.
    pub async fn filter_alarm_duration(
        &self,
        access_token: &str,
        uuid: &Uuid,
        device_id: &str,
    ) -> Result<i64, Error> {
        let body = serde_json::json!({
            "accessToken": access_token,
            "uuid": uuid,
            "deviceId": device_id,
        });

        let response = self
            .transport
            .post_json(&self.endpoints.filter_alarm(), &body)
            .await
            .map_err(api_error)?;

        let alarm: FilterAlarmResponse =
            serde_json::from_str(&response).map_err(ParseError::from)?;
        tracing::debug!(device_id, months = alarm.filter_usage_alarm, "Filter alarm info");

        let months = if alarm.filter_usage_alarm == 0 {
            DEFAULT_FILTER_ALARM_MONTHS
        } else {
            alarm.filter_usage_alarm
        };
        Ok(months * 30 * 24)
    }
}

/// Maps a rejected request to `Error::Api` using the body's result fields.
fn api_error(error: ProtocolError) -> Error {
    match error {
        ProtocolError::Status { status, body } => {
            let result = serde_json::from_str::<ApiResult>(&body).unwrap_or_default();
            let error = Error::Api {
                result_code: result.result_code.unwrap_or_else(|| status.to_string()),
                result_message: result.result_message.unwrap_or(body),
            };
            tracing::warn!(error = %error, "Account request rejected");
            error
        }
        other => other.into(),
    }
}
