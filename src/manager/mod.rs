// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polling manager for several Winix purifiers.
//!
//! The [`DeviceManager`] owns one [`DeviceWrapper`](crate::device::DeviceWrapper)
//! per purifier, refreshes them on a fixed interval and publishes a
//! [`RefreshSummary`] after every cycle.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use uuid::Uuid;
//! use winix_lib::account::AccountClient;
//! use winix_lib::manager::{DeviceManager, ManagerConfig};
//! use winix_lib::protocol::HttpConfig;
//!
//! # async fn example(access_token: &str, uuid: Uuid) -> winix_lib::Result<()> {
//! let config = HttpConfig::new();
//! let endpoints = config.endpoints();
//! let client = Arc::new(config.into_client()?);
//!
//! let account = AccountClient::new(Arc::clone(&client), endpoints.clone());
//! let manager = DeviceManager::new(client, endpoints, ManagerConfig::default());
//! manager.discover(&account, access_token, &uuid).await?;
//!
//! let summary = manager.refresh_all().await;
//! for id in &summary.failed {
//!     eprintln!("{id} did not refresh");
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod device_manager;

pub use config::ManagerConfig;
pub use device_manager::{DeviceManager, RefreshSummary};
