// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Manager configuration.

use std::time::Duration;

/// Configuration for a [`DeviceManager`](super::DeviceManager).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use winix_lib::manager::ManagerConfig;
///
/// let config = ManagerConfig::new().with_scan_interval(Duration::from_secs(120));
/// assert_eq!(config.scan_interval(), Duration::from_secs(120));
///
/// // Intervals below the minimum are raised to it
/// let config = ManagerConfig::new().with_scan_interval(Duration::from_secs(5));
/// assert_eq!(config.scan_interval(), ManagerConfig::MIN_SCAN_INTERVAL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerConfig {
    scan_interval: Duration,
    event_capacity: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ManagerConfig {
    /// Shortest allowed polling interval.
    pub const MIN_SCAN_INTERVAL: Duration = Duration::from_secs(30);
    /// Default polling interval.
    pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(30);
    /// Default capacity of the refresh event channel.
    pub const DEFAULT_EVENT_CAPACITY: usize = 16;

    /// Creates a configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scan_interval: Self::DEFAULT_SCAN_INTERVAL,
            event_capacity: Self::DEFAULT_EVENT_CAPACITY,
        }
    }

    /// Sets the polling interval, clamped to [`Self::MIN_SCAN_INTERVAL`].
    #[must_use]
    pub fn with_scan_interval(mut self, interval: Duration) -> Self {
        self.scan_interval = interval.max(Self::MIN_SCAN_INTERVAL);
        self
    }

    /// Sets the capacity of the refresh event channel.
    ///
    /// A capacity of 0 is raised to 1.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }

    /// Returns the polling interval.
    #[must_use]
    pub const fn scan_interval(&self) -> Duration {
        self.scan_interval
    }

    /// Returns the capacity of the refresh event channel.
    #[must_use]
    pub const fn event_capacity(&self) -> usize {
        self.event_capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ManagerConfig::default();
        assert_eq!(config.scan_interval(), Duration::from_secs(30));
        assert_eq!(config.event_capacity(), 16);
    }

    #[test]
    fn scan_interval_is_clamped() {
        let config = ManagerConfig::new().with_scan_interval(Duration::from_secs(29));
        assert_eq!(config.scan_interval(), Duration::from_secs(30));

        let config = ManagerConfig::new().with_scan_interval(Duration::from_secs(300));
        assert_eq!(config.scan_interval(), Duration::from_secs(300));
    }

    #[test]
    fn event_capacity_is_at_least_one() {
        assert_eq!(ManagerConfig::new().with_event_capacity(0).event_capacity(), 1);
    }
}
