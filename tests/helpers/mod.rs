// SPDX-FileCopyrightText: 2026 Epochscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for epochscan integration tests
//!
//! Provides a scriptable mock query source plus record builders, so tests
//! exercise the collection without a real LCD connection.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

use async_trait::async_trait;
use epochscan::{EpochRecord, EpochsResponse, QuerySource, SourceError};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Installs an env-filtered fmt subscriber once per test binary.
///
/// Run with `EPOCHSCAN_LOG=epochscan=debug` to see hydration and
/// view-creation logs while chasing a failing test.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter =
            EnvFilter::try_from_env("EPOCHSCAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Mock QuerySource for testing the refresh path
///
/// Responses are scripted in order; each fetch consumes the next one.
/// Fetches beyond the script fail with a transport error.
///
/// # Example
///
/// ```rust,ignore
/// let source = MockQuerySource::new()
///     .with_response(epochs_response(vec![day_epoch()]))
///     .with_error(SourceError::transport("gateway timeout"));
///
/// collection.refresh(&source).await?;
/// ```
#[allow(dead_code)]
pub struct MockQuerySource {
    script: Mutex<VecDeque<Result<EpochsResponse, SourceError>>>,
    fetches: AtomicUsize,
    chain_ids: Mutex<Vec<String>>,
}

// Not every integration test binary drives the refresh path.
#[allow(dead_code)]
impl MockQuerySource {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fetches: AtomicUsize::new(0),
            chain_ids: Mutex::new(Vec::new()),
        }
    }

    /// Appends a successful response to the script.
    pub fn with_response(self, response: EpochsResponse) -> Self {
        self.script.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Appends a failure to the script.
    pub fn with_error(self, error: SourceError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of fetches performed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Chain ids the source was asked about, in order.
    pub fn fetched_chain_ids(&self) -> Vec<String> {
        self.chain_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuerySource for MockQuerySource {
    async fn fetch_epochs(&self, chain_id: &str) -> Result<EpochsResponse, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.chain_ids.lock().unwrap().push(chain_id.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SourceError::transport("no scripted response left")))
    }
}

/// Builds an epoch record with the given fields.
pub fn epoch_record(identifier: &str, duration: &str, start: &str) -> EpochRecord {
    EpochRecord {
        identifier: identifier.to_string(),
        duration: duration.to_string(),
        current_epoch_start_time: start.to_string(),
    }
}

/// Wraps records into a response.
pub fn epochs_response(epochs: Vec<EpochRecord>) -> EpochsResponse {
    EpochsResponse { epochs }
}
