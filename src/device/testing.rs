// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory transport for unit tests.

use parking_lot::Mutex;

use crate::error::ProtocolError;
use crate::protocol::Transport;

const OK_BODY: &str =
    r#"{"statusCode": 200, "headers": {"resultCode": "S100", "resultMessage": ""}, "body": {}}"#;

/// Records every requested URL and answers from canned bodies.
#[derive(Debug)]
pub(crate) struct RecordingTransport {
    urls: Mutex<Vec<String>>,
    posts: Mutex<Vec<serde_json::Value>>,
    state_body: Mutex<String>,
    param_body: Mutex<String>,
    post_body: Mutex<String>,
    failure: Mutex<Option<u16>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self {
            urls: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
            state_body: Mutex::new(OK_BODY.to_string()),
            param_body: Mutex::new(OK_BODY.to_string()),
            post_body: Mutex::new("{}".to_string()),
            failure: Mutex::new(None),
        }
    }

    /// Answers state queries with the given attributes.
    pub(crate) fn set_state_attributes(&self, attributes: &[(&str, &str)]) {
        let attributes: serde_json::Map<String, serde_json::Value> = attributes
            .iter()
            .map(|(code, value)| ((*code).to_string(), serde_json::Value::from(*value)))
            .collect();
        let body = serde_json::json!({
            "statusCode": 200,
            "headers": {"resultCode": "S100", "resultMessage": ""},
            "body": {"data": [{"apiNo": "A210", "attributes": attributes}]}
        });
        self.set_state_body(&body.to_string());
    }

    pub(crate) fn set_state_body(&self, body: &str) {
        *self.state_body.lock() = body.to_string();
    }

    pub(crate) fn set_param_body(&self, body: &str) {
        *self.param_body.lock() = body.to_string();
    }

    pub(crate) fn set_post_body(&self, body: &str) {
        *self.post_body.lock() = body.to_string();
    }

    /// Makes every following request fail with `status`.
    pub(crate) fn fail_with(&self, status: u16) {
        *self.failure.lock() = Some(status);
    }

    pub(crate) fn recover(&self) {
        *self.failure.lock() = None;
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }

    pub(crate) fn posts(&self) -> Vec<serde_json::Value> {
        self.posts.lock().clone()
    }

    /// The `{code}:{value}` segments of all control requests, in order.
    pub(crate) fn controls(&self) -> Vec<String> {
        self.urls
            .lock()
            .iter()
            .filter_map(|url| url.split_once("/A211/").map(|(_, path)| path.to_string()))
            .collect()
    }

    pub(crate) fn clear(&self) {
        self.urls.lock().clear();
        self.posts.lock().clear();
    }

    fn check(&self) -> Result<(), ProtocolError> {
        match *self.failure.lock() {
            Some(status) => Err(ProtocolError::Status {
                status,
                body: String::new(),
            }),
            None => Ok(()),
        }
    }
}

impl Transport for RecordingTransport {
    async fn get(&self, url: &str) -> Result<String, ProtocolError> {
        self.urls.lock().push(url.to_string());
        self.check()?;

        if url.contains("/common/event/sttus/") {
            Ok(self.state_body.lock().clone())
        } else if url.contains("/common/event/param/") {
            Ok(self.param_body.lock().clone())
        } else {
            Ok(OK_BODY.to_string())
        }
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<String, ProtocolError> {
        self.urls.lock().push(url.to_string());
        self.posts.lock().push(body.clone());
        self.check()?;
        Ok(self.post_body.lock().clone())
    }
}
