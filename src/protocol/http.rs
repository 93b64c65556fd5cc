// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the Winix cloud.

use std::time::Duration;

use reqwest::{Client, Response};

use crate::error::ProtocolError;
use crate::protocol::{DEFAULT_API_BASE, DEFAULT_MOBILE_BASE, Endpoints, Transport};

// ============================================================================
// HttpConfig - Connection settings for the Winix cloud
// ============================================================================

/// Configuration for talking to the Winix cloud over HTTP.
///
/// Holds both base URLs and the request timeout. The defaults point at the
/// US production hosts.
///
/// # Examples
///
/// ```
/// use winix_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Production defaults
/// let config = HttpConfig::new();
/// assert_eq!(config.api_base(), "https://us.api.winix-iot.com");
///
/// // Pointing at a local mock
/// let config = HttpConfig::new()
///     .with_api_base("http://127.0.0.1:8080")
///     .with_mobile_base("http://127.0.0.1:8080")
///     .with_timeout(Duration::from_secs(2));
/// assert_eq!(config.endpoints().device_list(), "http://127.0.0.1:8080/getDeviceInfoList");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    api_base: String,
    mobile_base: String,
    timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with the production defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            mobile_base: DEFAULT_MOBILE_BASE.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the device API base URL.
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the mobile/account API base URL.
    #[must_use]
    pub fn with_mobile_base(mut self, base: impl Into<String>) -> Self {
        self.mobile_base = base.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
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

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the URL layout from this configuration.
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.api_base.clone(), self.mobile_base.clone())
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        HttpClientBuilder::new().timeout(self.timeout).build()
    }
}

// ============================================================================
// HttpClient - reqwest-backed transport
// ============================================================================

/// HTTP transport for the Winix cloud.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Examples
///
/// ```no_run
/// use winix_lib::protocol::{Endpoints, HttpClient, Transport};
///
/// # async fn example() -> winix_lib::Result<()> {
/// let client = HttpClient::new()?;
/// let body = client.get(&Endpoints::default().state("847207352CE0_364yr8i989")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProtocolError> {
        HttpClientBuilder::new().build()
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    async fn read(response: Response) -> Result<String, ProtocolError> {
        let status = response.status();
        let body = response.text().await.map_err(ProtocolError::Http)?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body = %body, "Request rejected");
            return Err(ProtocolError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(body = %body, "Received HTTP response");
        Ok(body)
    }
}

impl Transport for HttpClient {
    async fn get(&self, url: &str) -> Result<String, ProtocolError> {
        tracing::debug!(url = %url, "Sending HTTP GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        Self::read(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<String, ProtocolError> {
        tracing::debug!(url = %url, "Sending HTTP POST");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        Self::read(response).await
    }
}

/// Builder for creating an HTTP client with custom configuration.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if client creation fails.
    pub fn build(self) -> Result<HttpClient, ProtocolError> {
        let mut builder =
            Client::builder().timeout(self.timeout.unwrap_or(HttpConfig::DEFAULT_TIMEOUT));

        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(ProtocolError::Http)?;
        Ok(HttpClient { client })
    }
}
