// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Winix device control.
//!
//! Each enumerated type knows its semantic label and its wire value code, so
//! a typed value can only ever be encoded into a valid table entry.
//!
//! # Types
//!
//! - [`Category`] - Attribute category (`power`, `airflow`, ...)
//! - [`Switch`] - Off/on for power, plasma and child lock
//! - [`Mode`] - Auto or manual operation
//! - [`Airflow`] - Airflow as reported by the device
//! - [`FanSpeed`] - The four user selectable speeds
//! - [`AirQuality`] - Good/fair/poor sensor reading
//! - [`BrightnessLevel`] - Display brightness (0, 30, 70, 100 %)

mod airflow;
mod brightness;
mod category;
mod mode;
mod switch;

pub use airflow::{Airflow, FanSpeed};
pub use brightness::BrightnessLevel;
pub use category::Category;
pub use mode::{AirQuality, Mode};
pub use switch::Switch;
