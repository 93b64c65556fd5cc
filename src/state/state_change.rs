// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! A [`StateChange`] is the local effect a control command is assumed to
//! have. After a command is accepted by the server, the matching change is
//! applied to the cached [`DeviceState`](super::DeviceState) so readers see
//! the new value before the next refresh.

use crate::types::{Airflow, BrightnessLevel, Mode, Switch};

/// A single assumed change to the device state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// Power was switched.
    Power(Switch),
    /// Operating mode changed.
    Mode(Mode),
    /// Airflow changed.
    Airflow(Airflow),
    /// Plasma was switched.
    Plasma(Switch),
    /// Child lock was switched.
    ChildLock(Switch),
    /// Display brightness changed.
    BrightnessLevel(BrightnessLevel),
    /// Several changes applied together.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Returns the number of individual changes, flattening batches.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Batch(changes) => changes.iter().map(Self::len).sum(),
            _ => 1,
        }
    }

    /// Returns `true` for an empty batch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
