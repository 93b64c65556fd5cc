// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Winix` Lib - A Rust library to control Winix air purifiers.
//!
//! This library provides async APIs to interact with Winix purifiers through
//! the Winix cloud, the same service the official mobile app talks to.
//!
//! # Supported Features
//!
//! - **Power and modes**: On/off, auto, manual, sleep and named presets
//! - **Fan speed**: Named speeds or percentages
//! - **PlasmaWave**: On/off/toggle
//! - **Extras**: Child lock and display brightness on models that have them
//! - **Readings**: Air quality, AQI, ambient light and filter life
//! - **Account**: Device discovery and filter reminder settings
//!
//! # Layers
//!
//! - [`codec`] and [`command`]: translation between wire codes and typed values
//! - [`protocol`]: URL layout, the [`Transport`] trait and the reqwest client
//! - [`device`]: the stateful [`DeviceWrapper`] for one purifier
//! - [`manager`]: polling of several purifiers
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use winix_lib::{DeviceStub, DeviceWrapper, Endpoints, HttpClient};
//!
//! #[tokio::main]
//! async fn main() -> winix_lib::Result<()> {
//!     let client = Arc::new(HttpClient::new()?);
//!     let device = DeviceWrapper::new(
//!         DeviceStub::new("847207352CE0_364yr8i989"),
//!         client,
//!         Endpoints::default(),
//!     );
//!
//!     // Read the current state
//!     device.refresh().await;
//!     println!("on: {}, air quality: {:?}", device.is_on(), device.state().air_quality());
//!
//!     // Change it
//!     device.set_preset_mode("Manual (PlasmaWave off)").await?;
//!     device.set_percentage(50).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Decoding Without a Device
//!
//! ```
//! use winix_lib::codec::decode;
//! use winix_lib::command::ControlCommand;
//! use winix_lib::types::{Category, Mode};
//!
//! let state = decode([("A03", "02"), ("S08", "79")]);
//! assert_eq!(state.mode(), Some(Mode::Manual));
//! assert_eq!(state.air_qvalue(), Some(79));
//!
//! let command = ControlCommand::encode(Category::Mode, "auto").unwrap();
//! assert_eq!(command.to_path(), "A03:01");
//! ```

pub mod account;
pub mod codec;
pub mod command;
pub mod device;
pub mod error;
pub mod manager;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use account::AccountClient;
pub use command::ControlCommand;
pub use device::{DeviceStub, DeviceWrapper, PresetMode, RefreshOutcome};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use manager::{DeviceManager, ManagerConfig, RefreshSummary};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::{Driver, Endpoints, Transport};
pub use state::{DeviceFacets, DeviceState, Features};
pub use types::{AirQuality, Airflow, BrightnessLevel, Category, FanSpeed, Mode, Switch};
