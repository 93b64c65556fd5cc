// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stateful per-device wrapper for Winix purifiers.
//!
//! A [`DeviceWrapper`] keeps the last known state of one purifier together
//! with its derived facets, and turns high-level intents ("set speed high",
//! "preset Sleep") into the ordered sequence of single-attribute control
//! calls the Winix cloud expects.
//!
//! # Local state
//!
//! The cloud does not report the effect of a control call, so every accepted
//! command also updates the cached state the way the device is expected to
//! change. The next [`refresh`](DeviceWrapper::refresh) replaces the cache
//! with what the device actually reports.
//!
//! Commands are success-gated: the skip check happens first, then exactly one
//! request is awaited, and only if it succeeds are the local changes applied.
//! A failed request leaves the cache exactly as it was.
//!
//! ```no_run
//! use std::sync::Arc;
//! use winix_lib::device::{DeviceStub, DeviceWrapper};
//! use winix_lib::protocol::{Endpoints, HttpClient};
//! use winix_lib::types::FanSpeed;
//!
//! # async fn example() -> winix_lib::Result<()> {
//! let client = Arc::new(HttpClient::new()?);
//! let stub = DeviceStub::new("847207352CE0_364yr8i989").with_alias("Bedroom");
//! let device = DeviceWrapper::new(stub, client, Endpoints::default());
//!
//! device.refresh().await;
//! device.set_speed(FanSpeed::High).await?;
//! assert!(device.is_manual());
//! # Ok(())
//! # }
//! ```

mod preset;
mod stub;
#[cfg(test)]
pub(crate) mod testing;

pub use preset::{PresetMode, PresetStep};
pub use stub::DeviceStub;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::command::ControlCommand;
use crate::error::Error;
use crate::protocol::{Driver, Endpoints, Transport};
use crate::state::{DeviceFacets, DeviceState, Features, StateChange};
use crate::types::{Airflow, BrightnessLevel, FanSpeed, Mode, Switch};

/// Result of a [`DeviceWrapper::refresh`].
#[derive(Debug)]
pub enum RefreshOutcome {
    /// State was replaced with a fresh decode.
    Updated,
    /// The server had nothing to report. Cached state was kept.
    NoData,
    /// The request or the response failed. Cached state was kept.
    Failed(Error),
}

impl RefreshOutcome {
    /// Returns `true` if the cached state was replaced.
    #[must_use]
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated)
    }

    /// Returns `true` if the refresh failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Debug, Default)]
struct Cache {
    state: DeviceState,
    facets: DeviceFacets,
    refreshed: bool,
}

/// Local view of one purifier plus the commands that change it.
///
/// Methods take `&self`; the cache sits behind a lock that is never held
/// across a network call, so a wrapper can be shared through an `Arc`.
#[derive(Debug)]
pub struct DeviceWrapper<T> {
    stub: DeviceStub,
    driver: Driver<T>,
    cache: RwLock<Cache>,
}

impl<T: Transport> DeviceWrapper<T> {
    /// Creates a wrapper with an empty state.
    pub fn new(stub: DeviceStub, transport: Arc<T>, endpoints: Endpoints) -> Self {
        let driver = Driver::new(stub.id(), transport, endpoints);
        Self {
            stub,
            driver,
            cache: RwLock::new(Cache::default()),
        }
    }

    /// Returns the device identity.
    #[must_use]
    pub fn stub(&self) -> &DeviceStub {
        &self.stub
    }

    /// Returns the device id.
    #[must_use]
    pub fn device_id(&self) -> &str {
        self.stub.id()
    }

    /// Returns the user-visible name.
    #[must_use]
    pub fn alias(&self) -> &str {
        self.stub.alias()
    }

    /// Returns the underlying driver.
    #[must_use]
    pub fn driver(&self) -> &Driver<T> {
        &self.driver
    }

    // ========== Refresh ==========

    /// Fetches the device state and replaces the cache with it.
    ///
    /// The state is replaced wholesale and the facets are derived from
    /// scratch. If the server has no data, or the request fails, the cache is
    /// left untouched; a failure is logged and returned in the outcome.
    pub async fn refresh(&self) -> RefreshOutcome {
        let state = match self.driver.get_state().await {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(alias = %self.alias(), error = %e, "Refresh failed, keeping last state");
                return RefreshOutcome::Failed(e);
            }
        };

        if state.is_empty() {
            tracing::debug!(alias = %self.alias(), "Refresh returned no attributes");
            return RefreshOutcome::NoData;
        }

        let facets = DeviceFacets::derive(&state);
        let airflow = state.airflow();
        {
            let mut cache = self.cache.write();
            cache.state = state;
            cache.facets = facets;
            cache.refreshed = true;
        }

        tracing::debug!(
            alias = %self.alias(),
            on = facets.is_on,
            auto = facets.is_auto,
            manual = facets.is_manual,
            sleep = facets.is_sleep,
            airflow = ?airflow,
            plasma = facets.is_plasma_on,
            "Updated"
        );
        RefreshOutcome::Updated
    }

    /// Reads the filter life, in hours, from the parameter endpoint.
    pub async fn fetch_filter_life(&self) -> Option<i64> {
        self.driver.get_filter_life().await
    }

    // ========== Readers ==========

    /// Returns a snapshot of the cached state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.cache.read().state.clone()
    }

    /// Returns the cached facets.
    #[must_use]
    pub fn facets(&self) -> DeviceFacets {
        self.cache.read().facets
    }

    /// Returns `true` if the device is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.facets().is_on
    }

    /// Returns `true` if the device is in auto mode.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.facets().is_auto
    }

    /// Returns `true` if the device is in manual mode.
    #[must_use]
    pub fn is_manual(&self) -> bool {
        self.facets().is_manual
    }

    /// Returns `true` if the device runs the sleep airflow.
    #[must_use]
    pub fn is_sleep(&self) -> bool {
        self.facets().is_sleep
    }

    /// Returns `true` if plasma is on.
    #[must_use]
    pub fn is_plasma_on(&self) -> bool {
        self.facets().is_plasma_on
    }

    /// Returns `true` if the child lock is on.
    #[must_use]
    pub fn is_child_lock_on(&self) -> bool {
        self.cache.read().state.child_lock() == Some(Switch::On)
    }

    /// Returns the display brightness, if known.
    #[must_use]
    pub fn brightness_level(&self) -> Option<BrightnessLevel> {
        self.cache.read().state.brightness_level()
    }

    /// Returns the optional features this device reported.
    #[must_use]
    pub fn features(&self) -> Features {
        Features::detect(&self.cache.read().state)
    }

    /// Returns the remaining filter life in percent.
    #[must_use]
    pub fn filter_life_percent(&self) -> Option<u8> {
        self.cache.read().state.filter_life_percent()
    }

    /// Returns `true` once a refresh has produced state.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.cache.read().refreshed
    }

    /// Returns the preset matching the cached facets.
    #[must_use]
    pub fn preset_mode(&self) -> Option<PresetMode> {
        let facets = self.facets();
        if facets.is_sleep {
            Some(PresetMode::Sleep)
        } else if facets.is_auto {
            Some(if facets.is_plasma_on {
                PresetMode::Auto
            } else {
                PresetMode::AutoPlasmaOff
            })
        } else if facets.is_manual {
            Some(if facets.is_plasma_on {
                PresetMode::Manual
            } else {
                PresetMode::ManualPlasmaOff
            })
        } else {
            None
        }
    }

    /// Returns the fan speed as a percentage.
    ///
    /// `None` in sleep or auto mode, or when the airflow is unknown.
    #[must_use]
    pub fn percentage(&self) -> Option<u8> {
        let cache = self.cache.read();
        if cache.facets.is_sleep || cache.facets.is_auto {
            return None;
        }
        let speed = FanSpeed::try_from(cache.state.airflow()?).ok()?;
        Some(speed.percentage())
    }

    // ========== Power ==========

    /// Turns the device on if it is believed to be off.
    ///
    /// # Errors
    ///
    /// Returns error if the control call fails.
    pub async fn ensure_on(&self) -> Result<(), Error> {
        if self.is_on() {
            return Ok(());
        }
        tracing::debug!(alias = %self.alias(), "=> turned on");
        self.send(
            ControlCommand::power(Switch::On),
            StateChange::Power(Switch::On),
            |facets| facets.is_on = true,
        )
        .await
    }

    /// Turns the device on and puts it in auto mode.
    ///
    /// # Errors
    ///
    /// Returns error if a control call fails. Later steps are not attempted.
    pub async fn turn_on(&self) -> Result<(), Error> {
        self.ensure_on().await?;
        self.auto().await
    }

    /// Turns the device off if it is believed to be on.
    ///
    /// # Errors
    ///
    /// Returns error if the control call fails.
    pub async fn turn_off(&self) -> Result<(), Error> {
        if !self.is_on() {
            return Ok(());
        }
        tracing::debug!(alias = %self.alias(), "=> turned off");
        self.send(
            ControlCommand::power(Switch::Off),
            StateChange::Power(Switch::Off),
            |facets| facets.is_on = false,
        )
        .await
    }

    // ========== Modes ==========

    /// Puts the device in auto mode with low airflow. Plasma is untouched.
    ///
    /// # Errors
    ///
    /// Returns error if the control call fails.
    pub async fn auto(&self) -> Result<(), Error> {
        if self.is_auto() {
            return Ok(());
        }
        tracing::debug!(alias = %self.alias(), "=> set mode=auto");
        self.send(
            ControlCommand::mode(Mode::Auto),
            StateChange::Batch(vec![
                StateChange::Mode(Mode::Auto),
                StateChange::Airflow(Airflow::Low),
            ]),
            |facets| {
                facets.is_auto = true;
                facets.is_manual = false;
                facets.is_sleep = false;
            },
        )
        .await
    }

    /// Puts the device in manual mode with low airflow. Plasma is untouched.
    ///
    /// # Errors
    ///
    /// Returns error if the control call fails.
    pub async fn manual(&self) -> Result<(), Error> {
        if self.is_manual() {
            return Ok(());
        }
        tracing::debug!(alias = %self.alias(), "=> set mode=manual");
        self.send(
            ControlCommand::mode(Mode::Manual),
            StateChange::Batch(vec![
                StateChange::Mode(Mode::Manual),
                StateChange::Airflow(Airflow::Low),
            ]),
            |facets| {
                facets.is_auto = false;
                facets.is_manual = true;
                facets.is_sleep = false;
            },
        )
        .await
    }

    /// Switches to the sleep airflow. Plasma is untouched.
    ///
    /// # Errors
    ///
    /// Returns error if the control call fails.
    pub async fn sleep(&self) -> Result<(), Error> {
        if self.is_sleep() {
            return Ok(());
        }
        tracing::debug!(alias = %self.alias(), "=> set mode=sleep");
        self.send(
            ControlCommand::airflow(Airflow::Sleep),
            StateChange::Batch(vec![
                StateChange::Airflow(Airflow::Sleep),
                StateChange::Mode(Mode::Manual),
            ]),
            |facets| {
                facets.is_auto = false;
                facets.is_manual = false;
                facets.is_sleep = true;
            },
        )
        .await
    }

    // ========== Plasma ==========

    /// Turns plasma on. With `force`, sends even if plasma is believed on.
    ///
    /// # Errors
    ///
    /// Returns error if the control call fails.
    pub async fn plasmawave_on(&self, force: bool) -> Result<(), Error> {
        if !force && self.is_plasma_on() {
            return Ok(());
        }
        tracing::debug!(alias = %self.alias(), "=> set plasmawave=on");
        self.send(
            ControlCommand::plasma(Switch::On),
            StateChange::Plasma(Switch::On),
            |facets| facets.is_plasma_on = true,
        )
        .await
    }

    /// Turns plasma off. With `force`, sends even if plasma is believed off.
    ///
    /// # Errors
    ///
    /// Returns error if the control call fails.
    pub async fn plasmawave_off(&self, force: bool) -> Result<(), Error> {
        if !force && !self.is_plasma_on() {
            return Ok(());
        }
        tracing::debug!(alias = %self.alias(), "=> set plasmawave=off");
        self.send(
            ControlCommand::plasma(Switch::Off),
            StateChange::Plasma(Switch::Off),
            |facets| facets.is_plasma_on = false,
        )
        .await
    }

    /// Flips plasma.
    ///
    /// # Errors
    ///
    /// Returns error if the control call fails.
    pub async fn plasmawave_toggle(&self) -> Result<(), Error> {
        if self.is_plasma_on() {
            self.plasmawave_off(false).await
        } else {
            self.plasmawave_on(false).await
        }
    }

    // ========== Speed ==========

    /// Powers on, switches to manual mode and sets the fan speed.
    ///
    /// Nothing is sent if the cached airflow already equals `speed`.
    ///
    /// # Errors
    ///
    /// Returns error if a control call fails. Later steps are not attempted.
    pub async fn set_speed(&self, speed: FanSpeed) -> Result<(), Error> {
        if self.cache.read().state.airflow() == Some(speed.airflow()) {
            return Ok(());
        }

        self.ensure_on().await?;
        self.manual().await?;

        tracing::debug!(alias = %self.alias(), speed = %speed, "=> set speed");
        self.send(
            ControlCommand::speed(speed),
            StateChange::Airflow(speed.airflow()),
            |facets| facets.is_sleep = false,
        )
        .await
    }

    /// Sets the fan speed from its label (`low`, `medium`, `high`, `turbo`).
    ///
    /// Returns `Ok(false)` without sending anything if the label is unknown.
    ///
    /// # Errors
    ///
    /// Returns error if a control call fails.
    pub async fn set_speed_label(&self, label: &str) -> Result<bool, Error> {
        match label.parse::<FanSpeed>() {
            Ok(speed) => self.set_speed(speed).await.map(|()| true),
            Err(e) => {
                tracing::warn!(alias = %self.alias(), error = %e, "Rejected speed");
                Ok(false)
            }
        }
    }

    /// Sets the fan speed from a percentage. `0` turns the device off.
    ///
    /// Returns `Ok(false)` without sending anything above 100.
    ///
    /// # Errors
    ///
    /// Returns error if a control call fails.
    pub async fn set_percentage(&self, percentage: u8) -> Result<bool, Error> {
        match FanSpeed::from_percentage(percentage) {
            Ok(Some(speed)) => self.set_speed(speed).await.map(|()| true),
            Ok(None) => self.turn_off().await.map(|()| true),
            Err(e) => {
                tracing::warn!(alias = %self.alias(), error = %e, "Rejected percentage");
                Ok(false)
            }
        }
    }

    // ========== Presets ==========

    /// Powers on and applies a preset by name or numeric alias.
    ///
    /// Returns `Ok(false)` without sending anything if the preset is unknown.
    ///
    /// # Errors
    ///
    /// Returns error if a control call fails. Later steps are not attempted.
    pub async fn set_preset_mode(&self, preset: &str) -> Result<bool, Error> {
        let preset = match preset.parse::<PresetMode>() {
            Ok(preset) => preset,
            Err(e) => {
                tracing::warn!(alias = %self.alias(), error = %e, "Rejected preset mode");
                return Ok(false);
            }
        };

        self.ensure_on().await?;
        tracing::debug!(alias = %self.alias(), preset = %preset, "=> set preset");

        for step in preset.steps() {
            match *step {
                PresetStep::Auto => self.auto().await?,
                PresetStep::Manual => self.manual().await?,
                PresetStep::Sleep => self.sleep().await?,
                PresetStep::PlasmaOn { force } => self.plasmawave_on(force).await?,
                PresetStep::PlasmaOff { force } => self.plasmawave_off(force).await?,
            }
        }
        Ok(true)
    }

    // ========== Child lock and brightness ==========

    /// Turns the child lock on.
    ///
    /// # Errors
    ///
    /// Returns error if the control call fails.
    pub async fn child_lock_on(&self) -> Result<(), Error> {
        self.set_child_lock(Switch::On).await
    }

    /// Turns the child lock off.
    ///
    /// # Errors
    ///
    /// Returns error if the control call fails.
    pub async fn child_lock_off(&self) -> Result<(), Error> {
        self.set_child_lock(Switch::Off).await
    }

    async fn set_child_lock(&self, target: Switch) -> Result<(), Error> {
        if self.cache.read().state.child_lock() == Some(target) {
            return Ok(());
        }
        tracing::debug!(alias = %self.alias(), child_lock = %target, "=> set child lock");
        self.send(
            ControlCommand::child_lock(target),
            StateChange::ChildLock(target),
            |_| {},
        )
        .await
    }

    /// Sets the display brightness to one of 0, 30, 70 or 100.
    ///
    /// Returns `Ok(false)` without sending anything for other values.
    ///
    /// # Errors
    ///
    /// Returns error if the control call fails.
    pub async fn set_brightness_level(&self, value: i64) -> Result<bool, Error> {
        let level = match BrightnessLevel::try_from(value) {
            Ok(level) => level,
            Err(e) => {
                tracing::warn!(alias = %self.alias(), error = %e, "Rejected brightness level");
                return Ok(false);
            }
        };

        if self.brightness_level() == Some(level) {
            return Ok(true);
        }
        tracing::debug!(alias = %self.alias(), level = %level, "=> set brightness");
        self.send(
            ControlCommand::brightness_level(level),
            StateChange::BrightnessLevel(level),
            |_| {},
        )
        .await
        .map(|()| true)
    }

    /// Sends one command and, once it succeeded, applies its local effect.
    async fn send(
        &self,
        command: ControlCommand,
        change: StateChange,
        update: impl FnOnce(&mut DeviceFacets),
    ) -> Result<(), Error> {
        if let Err(e) = self.driver.send_control(&command).await {
            tracing::warn!(alias = %self.alias(), command = %command, error = %e, "Command failed");
            return Err(e.into());
        }

        let mut cache = self.cache.write();
        cache.state.apply(&change);
        update(&mut cache.facets);
        Ok(())
    }
}
