// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for Winix cloud JSON responses.
//!
//! The device endpoints wrap their payload in an [`EventEnvelope`]. The
//! account endpoints return flat objects with `resultCode`/`resultMessage`.

mod account;
mod envelope;
mod state;

pub use account::{ApiResult, DeviceInfo, DeviceInfoListResponse, FilterAlarmResponse};
pub use envelope::{EventBody, EventData, EventEnvelope, NO_DATA_MESSAGE, ResultHeaders};
pub use state::{FILTER_LIFE_CODE, parse_filter_life, parse_state};
