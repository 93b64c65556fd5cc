// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identity.

use serde::Serialize;

use crate::response::DeviceInfo;

/// Immutable description of one purifier, as registered to the account.
///
/// # Examples
///
/// ```
/// use winix_lib::device::DeviceStub;
///
/// let stub = DeviceStub::new("847207352CE0_364yr8i989").with_alias("Bedroom");
/// assert_eq!(stub.id(), "847207352CE0_364yr8i989");
/// assert_eq!(stub.alias(), "Bedroom");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceStub {
    id: String,
    mac: Option<String>,
    alias: Option<String>,
    location_code: Option<String>,
    filter_replace_date: Option<String>,
    model: Option<String>,
    sw_version: Option<String>,
}

impl DeviceStub {
    /// Creates a stub with only a device id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the user-visible alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the MAC address.
    #[must_use]
    pub fn with_mac(mut self, mac: impl Into<String>) -> Self {
        self.mac = Some(mac.into());
        self
    }

    /// Sets the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Device id used in every request.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Alias, falling back to the device id.
    #[must_use]
    pub fn alias(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.id)
    }

    /// MAC address.
    #[must_use]
    pub fn mac(&self) -> Option<&str> {
        self.mac.as_deref()
    }

    /// Location code.
    #[must_use]
    pub fn location_code(&self) -> Option<&str> {
        self.location_code.as_deref()
    }

    /// Date of the last filter replacement, as reported.
    #[must_use]
    pub fn filter_replace_date(&self) -> Option<&str> {
        self.filter_replace_date.as_deref()
    }

    /// Model name.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// MCU firmware version.
    #[must_use]
    pub fn sw_version(&self) -> Option<&str> {
        self.sw_version.as_deref()
    }
}

impl From<DeviceInfo> for DeviceStub {
    fn from(info: DeviceInfo) -> Self {
        Self {
            id: info.device_id,
            mac: info.mac,
            alias: info.device_alias,
            location_code: info.device_loc_code,
            filter_replace_date: info.filter_replace_date,
            model: info.model_name,
            sw_version: info.mcu_ver,
        }
    }
}
