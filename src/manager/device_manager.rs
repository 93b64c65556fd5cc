// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device manager for polling several purifiers.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::account::AccountClient;
use crate::device::{DeviceStub, DeviceWrapper, RefreshOutcome};
use crate::error::Error;
use crate::protocol::{Endpoints, Transport};

use super::ManagerConfig;

/// Outcome of one polling cycle over all devices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Devices whose state was replaced.
    pub updated: Vec<String>,
    /// Devices for which the server had no data.
    pub no_data: Vec<String>,
    /// Devices whose refresh failed.
    pub failed: Vec<String>,
}

impl RefreshSummary {
    /// Total number of devices polled.
    #[must_use]
    pub fn len(&self) -> usize {
        self.updated.len() + self.no_data.len() + self.failed.len()
    }

    /// Returns `true` if no device was polled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Manager owning one [`DeviceWrapper`] per purifier.
///
/// All wrappers share one transport. Devices are refreshed one after the
/// other and independently: a failure on one device is recorded in the
/// [`RefreshSummary`] and never prevents the others from refreshing.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use winix_lib::device::DeviceStub;
/// use winix_lib::manager::{DeviceManager, ManagerConfig};
/// use winix_lib::protocol::{Endpoints, HttpClient};
///
/// #[tokio::main]
/// async fn main() -> winix_lib::Result<()> {
///     let manager = DeviceManager::new(
///         Arc::new(HttpClient::new()?),
///         Endpoints::default(),
///         ManagerConfig::default(),
///     );
///     manager.add_stubs([DeviceStub::new("847207352CE0_364yr8i989")]);
///
///     // Summaries of every polling cycle
///     let mut events = manager.subscribe();
///     tokio::spawn(async move {
///         while let Ok(summary) = events.recv().await {
///             println!("{} updated, {} failed", summary.updated.len(), summary.failed.len());
///         }
///     });
///
///     // Polls until the future is dropped
///     manager.run().await;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct DeviceManager<T> {
    transport: Arc<T>,
    endpoints: Endpoints,
    config: ManagerConfig,
    wrappers: RwLock<Vec<Arc<DeviceWrapper<T>>>>,
    events: broadcast::Sender<RefreshSummary>,
}

impl<T: Transport> DeviceManager<T> {
    /// Creates a manager without devices.
    pub fn new(transport: Arc<T>, endpoints: Endpoints, config: ManagerConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity());
        Self {
            transport,
            endpoints,
            config,
            wrappers: RwLock::new(Vec::new()),
            events,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Adds one wrapper per stub. Returns the number of devices managed.
    pub fn add_stubs(&self, stubs: impl IntoIterator<Item = DeviceStub>) -> usize {
        let added: Vec<_> = stubs
            .into_iter()
            .map(|stub| Arc::new(self.build_wrapper(stub)))
            .collect();
        let mut wrappers = self.wrappers.write();
        wrappers.extend(added);
        wrappers.len()
    }

    fn build_wrapper(&self, stub: DeviceStub) -> DeviceWrapper<T> {
        DeviceWrapper::new(stub, Arc::clone(&self.transport), self.endpoints.clone())
    }

    /// Replaces the managed devices with those registered to the account.
    ///
    /// Returns the number of devices found.
    ///
    /// # Errors
    ///
    /// Returns error if the device list cannot be fetched. The current
    /// devices are kept in that case.
    pub async fn discover(
        &self,
        account: &AccountClient<T>,
        access_token: &str,
        uuid: &Uuid,
    ) -> Result<usize, Error> {
        let stubs = account.device_stubs(access_token, uuid).await?;
        if stubs.is_empty() {
            tracing::info!("No purifiers found");
        }

        let fresh: Vec<_> = stubs
            .into_iter()
            .map(|stub| Arc::new(self.build_wrapper(stub)))
            .collect();
        let count = fresh.len();
        *self.wrappers.write() = fresh;
        Ok(count)
    }

    /// Returns all wrappers.
    #[must_use]
    pub fn wrappers(&self) -> Vec<Arc<DeviceWrapper<T>>> {
        self.wrappers.read().clone()
    }

    /// Returns the wrapper for a device id.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeviceNotFound` if no managed device has this id.
    pub fn wrapper(&self, device_id: &str) -> Result<Arc<DeviceWrapper<T>>, Error> {
        self.wrappers
            .read()
            .iter()
            .find(|wrapper| wrapper.device_id() == device_id)
            .cloned()
            .ok_or_else(|| Error::DeviceNotFound(device_id.to_string()))
    }

    /// Returns the number of managed devices.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.wrappers.read().len()
    }

    /// Subscribes to the summary published after every polling cycle.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RefreshSummary> {
        self.events.subscribe()
    }

    /// Refreshes every device once.
    pub async fn refresh_all(&self) -> RefreshSummary {
        let wrappers = self.wrappers();
        tracing::info!(count = wrappers.len(), "Updating devices");

        let mut summary = RefreshSummary::default();
        for wrapper in wrappers {
            let id = wrapper.device_id().to_string();
            match wrapper.refresh().await {
                RefreshOutcome::Updated => summary.updated.push(id),
                RefreshOutcome::NoData => summary.no_data.push(id),
                RefreshOutcome::Failed(_) => summary.failed.push(id),
            }
        }

        // No subscribers is not an error
        let _ = self.events.send(summary.clone());
        summary
    }

    /// Refreshes all devices every scan interval, starting immediately.
    ///
    /// Runs until the returned future is dropped.
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.config.scan_interval());
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            self.refresh_all().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::device::testing::RecordingTransport;

    fn manager(transport: &Arc<RecordingTransport>) -> DeviceManager<RecordingTransport> {
        DeviceManager::new(
            Arc::clone(transport),
            Endpoints::new("http://api", "http://mobile"),
            ManagerConfig::default(),
        )
    }

    #[tokio::test]
    async fn new_manager_is_empty() {
        let transport = Arc::new(RecordingTransport::new());
        let manager = manager(&transport);
        assert_eq!(manager.device_count(), 0);
        assert!(manager.refresh_all().await.is_empty());
    }

    #[tokio::test]
    async fn wrapper_lookup() {
        let transport = Arc::new(RecordingTransport::new());
        let manager = manager(&transport);
        manager.add_stubs([DeviceStub::new("a"), DeviceStub::new("b")]);

        assert_eq!(manager.wrapper("b").unwrap().device_id(), "b");
        assert!(matches!(
            manager.wrapper("c"),
            Err(Error::DeviceNotFound(ref id)) if id == "c"
        ));
    }

    #[tokio::test]
    async fn refresh_all_summarises_and_publishes() {
        let transport = Arc::new(RecordingTransport::new());
        transport.set_state_attributes(&[("A02", "1")]);
        let manager = manager(&transport);
        manager.add_stubs([DeviceStub::new("a"), DeviceStub::new("b")]);
        let mut events = manager.subscribe();

        let summary = manager.refresh_all().await;
        assert_eq!(summary.updated, vec!["a", "b"]);
        assert_eq!(events.recv().await.unwrap(), summary);

        transport.fail_with(500);
        let summary = manager.refresh_all().await;
        assert_eq!(summary.failed, vec!["a", "b"]);
        assert!(manager.wrapper("a").unwrap().is_on());
    }

    #[tokio::test]
    async fn discover_replaces_devices() {
        let transport = Arc::new(RecordingTransport::new());
        let manager = manager(&transport);
        manager.add_stubs([DeviceStub::new("old")]);

        transport.set_post_body(
            r#"{"resultCode": "200", "deviceInfoList": [{"deviceId": "x_1"}, {"deviceId": "x_2"}]}"#,
        );
        let account = AccountClient::new(
            Arc::clone(&transport),
            Endpoints::new("http://api", "http://mobile"),
        );
        let count = manager
            .discover(&account, "token", &Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(count, 2);
        assert!(manager.wrapper("old").is_err());
        assert!(manager.wrapper("x_2").is_ok());
    }

    #[tokio::test]
    async fn discover_swaps_devices_while_readers_hold_the_old_list() {
        let transport = Arc::new(RecordingTransport::new());
        transport.set_state_attributes(&[("A02", "1")]);
        let manager = manager(&transport);
        manager.add_stubs([DeviceStub::new("old")]);
        let before = manager.wrappers();

        transport.set_post_body(r#"{"resultCode": "200", "deviceInfoList": [{"deviceId": "new"}]}"#);
        let account = AccountClient::new(
            Arc::clone(&transport),
            Endpoints::new("http://api", "http://mobile"),
        );
        manager
            .discover(&account, "token", &Uuid::new_v4())
            .await
            .unwrap();

        // A snapshot taken before discovery stays complete
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].device_id(), "old");
        let ids: Vec<_> = manager
            .wrappers()
            .iter()
            .map(|wrapper| wrapper.device_id().to_string())
            .collect();
        assert_eq!(ids, vec!["new"]);
        assert_eq!(manager.refresh_all().await.updated, vec!["new"]);
    }

    #[tokio::test]
    async fn failed_discovery_keeps_devices() {
        let transport = Arc::new(RecordingTransport::new());
        let manager = manager(&transport);
        manager.add_stubs([DeviceStub::new("old")]);
        transport.fail_with(400);

        let account = AccountClient::new(Arc::clone(&transport), Endpoints::default());
        assert!(manager.discover(&account, "t", &Uuid::new_v4()).await.is_err());
        assert_eq!(manager.device_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn run_polls_every_scan_interval() {
        let transport = Arc::new(RecordingTransport::new());
        let manager = manager(&transport);
        manager.add_stubs([DeviceStub::new("a")]);

        let result = tokio::time::timeout(Duration::from_secs(65), manager.run()).await;
        assert!(result.is_err());

        // Ticks at 0 s, 30 s and 60 s
        assert_eq!(transport.urls().len(), 3);
    }
}
