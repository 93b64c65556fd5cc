// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Communication with the Winix cloud.
//!
//! All traffic is plain HTTPS request/response against two hosts: the device
//! API (control, state, parameters) and the mobile/account API (device list,
//! filter alarm). [`Endpoints`] knows the URL layout, [`Transport`] performs
//! the requests and [`Driver`] ties both to one device.
//!
//! # Transports
//!
//! - [`HttpClient`]: reqwest-based transport (feature `http`, enabled by default)
//! - any type implementing [`Transport`], for tests or custom stacks

mod driver;
#[cfg(feature = "http")]
mod http;

pub use driver::Driver;
#[cfg(feature = "http")]
pub use http::{HttpClient, HttpClientBuilder, HttpConfig};

use crate::command::ControlCommand;
use crate::error::ProtocolError;

/// Default base URL of the device API.
pub const DEFAULT_API_BASE: &str = "https://us.api.winix-iot.com";

/// Default base URL of the mobile/account API.
pub const DEFAULT_MOBILE_BASE: &str = "https://us.mobile.winix-iot.com";

/// Fixed API number segment of the control URL.
const CONTROL_API_NO: &str = "A211";

/// Trait for transports that can reach the Winix cloud.
///
/// Implementations treat any non-2xx answer as a failure and report it as
/// [`ProtocolError::Status`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Performs a GET request and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the status is not 2xx.
    async fn get(&self, url: &str) -> Result<String, ProtocolError>;

    /// Performs a POST request with a JSON body and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the status is not 2xx.
    async fn post_json(&self, url: &str, body: &serde_json::Value)
    -> Result<String, ProtocolError>;
}

/// URL layout of the Winix cloud.
///
/// # Examples
///
/// ```
/// use winix_lib::command::ControlCommand;
/// use winix_lib::protocol::Endpoints;
/// use winix_lib::types::Switch;
///
/// let endpoints = Endpoints::default();
/// assert_eq!(
///     endpoints.control("dev_1", &ControlCommand::power(Switch::On)),
///     "https://us.api.winix-iot.com/common/control/devices/dev_1/A211/A02:1"
/// );
///
/// let local = Endpoints::new("http://127.0.0.1:8080/", "http://127.0.0.1:8081");
/// assert_eq!(local.state("dev_1"), "http://127.0.0.1:8080/common/event/sttus/devices/dev_1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
    mobile_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_MOBILE_BASE)
    }
}

impl Endpoints {
    /// Creates endpoints for the given base URLs.
    ///
    /// Trailing slashes are removed.
    #[must_use]
    pub fn new(api_base: impl Into<String>, mobile_base: impl Into<String>) -> Self {
        Self {
            api_base: trim_base(api_base.into()),
            mobile_base: trim_base(mobile_base.into()),
        }
    }

    /// Returns the device API base URL.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the mobile/account API base URL.
    #[must_use]
    pub fn mobile_base(&self) -> &str {
        &self.mobile_base
    }

    /// URL of a control write.
    #[must_use]
    pub fn control(&self, device_id: &str, command: &ControlCommand) -> String {
        format!(
            "{}/common/control/devices/{}/{CONTROL_API_NO}/{}",
            self.api_base,
            urlencoding::encode(device_id),
            command.to_path()
        )
    }

    /// URL of the state query.
    #[must_use]
    pub fn state(&self, device_id: &str) -> String {
        format!(
            "{}/common/event/sttus/devices/{}",
            self.api_base,
            urlencoding::encode(device_id)
        )
    }

    /// URL of the parameter query.
    #[must_use]
    pub fn param(&self, device_id: &str) -> String {
        format!(
            "{}/common/event/param/devices/{}",
            self.api_base,
            urlencoding::encode(device_id)
        )
    }

    /// URL of the device list.
    #[must_use]
    pub fn device_list(&self) -> String {
        format!("{}/getDeviceInfoList", self.mobile_base)
    }

    /// URL of the filter alarm query.
    #[must_use]
    pub fn filter_alarm(&self) -> String {
        format!("{}/getFilterAlarmInfo", self.mobile_base)
    }
}

fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}
