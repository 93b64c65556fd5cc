// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-device request driver.

use std::sync::Arc;

use crate::command::ControlCommand;
use crate::error::{Error, ParseError, ProtocolError};
use crate::response;
use crate::state::DeviceState;

use super::{Endpoints, Transport};

/// Sends commands to and reads state from one device.
///
/// The driver is stateless apart from the device id. Every call is a single
/// request, and failures are returned as-is without retries.
#[derive(Debug)]
pub struct Driver<T> {
    device_id: String,
    transport: Arc<T>,
    endpoints: Endpoints,
}

impl<T> Clone for Driver<T> {
    fn clone(&self) -> Self {
        Self {
            device_id: self.device_id.clone(),
            transport: Arc::clone(&self.transport),
            endpoints: self.endpoints.clone(),
        }
    }
}

impl<T: Transport> Driver<T> {
    /// Creates a driver for one device.
    pub fn new(device_id: impl Into<String>, transport: Arc<T>, endpoints: Endpoints) -> Self {
        Self {
            device_id: device_id.into(),
            transport,
            endpoints,
        }
    }

    /// Returns the device id.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Sends a single control write.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or is rejected.
    pub async fn send_control(&self, command: &ControlCommand) -> Result<(), ProtocolError> {
        let url = self.endpoints.control(&self.device_id, command);
        tracing::debug!(
            device_id = %self.device_id,
            attribute = command.wire_code(),
            value = command.wire_value(),
            "Sending control command"
        );
        let body = self.transport.get(&url).await?;
        tracing::trace!(device_id = %self.device_id, body = %body, "Control response");
        Ok(())
    }

    /// Fetches the raw state response body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or is rejected.
    pub async fn fetch_state(&self) -> Result<String, ProtocolError> {
        self.transport
            .get(&self.endpoints.state(&self.device_id))
            .await
    }

    /// Fetches and decodes the device state.
    ///
    /// The server's no-data signal and an envelope without an event entry
    /// both yield an empty state.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails and `Error::Parse` if
    /// the body is not JSON.
    pub async fn get_state(&self) -> Result<DeviceState, Error> {
        let body = self.fetch_state().await?;

        match response::parse_state(&body) {
            Ok(state) => Ok(state),
            Err(ParseError::NoData) => {
                tracing::info!(device_id = %self.device_id, "No data received");
                Ok(DeviceState::new())
            }
            Err(e @ ParseError::MissingField(_)) => {
                tracing::error!(
                    device_id = %self.device_id,
                    error = %e,
                    body = %body,
                    "State response has no attributes"
                );
                Ok(DeviceState::new())
            }
            Err(e) => {
                tracing::error!(
                    device_id = %self.device_id,
                    error = %e,
                    body = %body,
                    "Error parsing state response"
                );
                Err(e.into())
            }
        }
    }

    /// Reads the filter life, in hours, from the parameter endpoint.
    ///
    /// Returns `None` on any failure, including the no-data signal.
    pub async fn get_filter_life(&self) -> Option<i64> {
        let body = match self
            .transport
            .get(&self.endpoints.param(&self.device_id))
            .await
        {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(device_id = %self.device_id, error = %e, "Error getting filter life");
                return None;
            }
        };

        match response::parse_filter_life(&body) {
            Ok(hours) => Some(hours),
            Err(ParseError::NoData) => {
                tracing::info!(device_id = %self.device_id, "No filter life data received");
                None
            }
            Err(e) => {
                tracing::debug!(device_id = %self.device_id, error = %e, "Unusable filter life response");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::testing::RecordingTransport;
    use crate::types::{Airflow, Switch};

    fn driver(transport: &Arc<RecordingTransport>) -> Driver<RecordingTransport> {
        Driver::new("dev_1", Arc::clone(transport), Endpoints::new("http://api", "http://mobile"))
    }

    #[tokio::test]
    async fn send_control_builds_url() {
        let transport = Arc::new(RecordingTransport::new());
        let driver = driver(&transport);

        driver
            .send_control(&ControlCommand::airflow(Airflow::Turbo))
            .await
            .unwrap();
        driver
            .send_control(&ControlCommand::power(Switch::Off))
            .await
            .unwrap();

        assert_eq!(
            transport.urls(),
            vec![
                "http://api/common/control/devices/dev_1/A211/A04:05",
                "http://api/common/control/devices/dev_1/A211/A02:0",
            ]
        );
    }

    #[tokio::test]
    async fn send_control_propagates_failure() {
        let transport = Arc::new(RecordingTransport::new());
        transport.fail_with(500);
        let result = driver(&transport)
            .send_control(&ControlCommand::power(Switch::On))
            .await;
        assert!(matches!(result, Err(ProtocolError::Status { status: 500, .. })));
    }

    #[tokio::test]
    async fn get_state_no_data_is_empty() {
        let transport = Arc::new(RecordingTransport::new());
        transport.set_state_body(
            r#"{"statusCode": 200, "headers": {"resultCode": "S100", "resultMessage": "no data"}, "body": {}}"#,
        );
        let state = driver(&transport).get_state().await.unwrap();
        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn get_state_without_event_is_empty() {
        let transport = Arc::new(RecordingTransport::new());
        transport.set_state_body(
            r#"{"statusCode": 200, "headers": {"resultCode": "S100", "resultMessage": ""}, "body": {}}"#,
        );
        let state = driver(&transport).get_state().await.unwrap();
        assert!(state.is_empty());

        transport.set_state_body(r#"{"body": {"data": []}}"#);
        let state = driver(&transport).get_state().await.unwrap();
        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn get_state_malformed_is_parse_error() {
        let transport = Arc::new(RecordingTransport::new());
        transport.set_state_body("not json");
        let result = driver(&transport).get_state().await;
        assert!(matches!(result, Err(Error::Parse(ParseError::Json(_)))));
    }

    #[tokio::test]
    async fn filter_life() {
        let transport = Arc::new(RecordingTransport::new());
        transport.set_param_body(r#"{"body": {"data": [{"attributes": {"P01": "6480"}}]}}"#);
        let driver = driver(&transport);
        assert_eq!(driver.get_filter_life().await, Some(6480));
        assert_eq!(
            transport.urls(),
            vec!["http://api/common/event/param/devices/dev_1"]
        );

        transport.set_param_body(r#"{"headers": {"resultMessage": "no data"}, "body": {}}"#);
        assert_eq!(driver.get_filter_life().await, None);

        transport.fail_with(404);
        assert_eq!(driver.get_filter_life().await, None);
    }
}
