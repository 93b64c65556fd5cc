// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests against the real Winix cloud.
//!
//! These tests require a Winix account with at least one purifier and are
//! ignored by default.
//! Run with: `cargo test --test real_devices -- --ignored --test-threads=1`
//!
//! # Environment Variables
//!
//! - `WINIX_ACCESS_TOKEN` - Access token obtained at login
//! - `WINIX_UUID` - Client UUID registered with the token
//!
//! # Example
//!
//! ```bash
//! export WINIX_ACCESS_TOKEN=eyJraWQiOi...
//! export WINIX_UUID=0b8a7a8e-2f4e-4d61-9d4c-3c2b1a0f9e8d
//! cargo test --test real_devices -- --ignored --test-threads=1
//! ```

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use uuid::Uuid;
use winix_lib::protocol::HttpConfig;
use winix_lib::{AccountClient, DeviceManager, HttpClient, ManagerConfig};

// =============================================================================
// Test Configuration from Environment Variables
// =============================================================================

/// Account credentials loaded from environment variables.
struct AccountConfig {
    access_token: String,
    uuid: Uuid,
}

impl AccountConfig {
    fn from_env() -> Self {
        Self {
            access_token: env::var("WINIX_ACCESS_TOKEN").expect("WINIX_ACCESS_TOKEN not set"),
            uuid: env::var("WINIX_UUID")
                .expect("WINIX_UUID not set")
                .parse()
                .expect("Invalid WINIX_UUID"),
        }
    }
}

async fn discover() -> (
    AccountConfig,
    AccountClient<HttpClient>,
    DeviceManager<HttpClient>,
) {
    let account_config = AccountConfig::from_env();
    let config = HttpConfig::new();
    let endpoints = config.endpoints();
    let client = Arc::new(config.into_client().unwrap());

    let account = AccountClient::new(Arc::clone(&client), endpoints.clone());
    let manager = DeviceManager::new(client, endpoints, ManagerConfig::default());
    let count = manager
        .discover(&account, &account_config.access_token, &account_config.uuid)
        .await
        .unwrap();
    assert!(count > 0, "no purifier registered to this account");

    (account_config, account, manager)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
#[ignore = "requires a Winix account"]
async fn refresh_all_devices() {
    let (_, _, manager) = discover().await;

    let summary = manager.refresh_all().await;
    assert!(summary.failed.is_empty(), "failed: {:?}", summary.failed);

    for device in manager.wrappers() {
        println!(
            "{}: on={} preset={:?} air_quality={:?} filter_life={:?}%",
            device.alias(),
            device.is_on(),
            device.preset_mode(),
            device.state().air_quality(),
            device.filter_life_percent()
        );
    }
}

#[tokio::test]
#[ignore = "requires a Winix account"]
async fn filter_alarm_duration() {
    let (config, account, manager) = discover().await;

    for device in manager.wrappers() {
        let hours = account
            .filter_alarm_duration(&config.access_token, &config.uuid, device.device_id())
            .await
            .unwrap();
        assert!(hours > 0);
        assert_eq!(hours % 24, 0);
    }
}

#[tokio::test]
#[ignore = "requires a Winix account and changes the first purifier's plasma setting"]
async fn plasma_toggle_round_trip() {
    let (_, _, manager) = discover().await;
    let device = manager.wrappers().remove(0);
    assert!(device.refresh().await.is_updated());

    let initial = device.is_plasma_on();
    device.plasmawave_toggle().await.unwrap();
    assert_eq!(device.is_plasma_on(), !initial);

    sleep(Duration::from_secs(5)).await;
    device.refresh().await;
    assert_eq!(device.is_plasma_on(), !initial);

    if initial {
        device.plasmawave_on(true).await.unwrap();
    } else {
        device.plasmawave_off(true).await.unwrap();
    }
}
