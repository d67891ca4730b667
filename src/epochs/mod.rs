// SPDX-FileCopyrightText: 2026 Epochscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Epoch collection: the shared response cell plus per-identifier view memoization.
//!
//! [`EpochCollection`] is the single source of truth for the raw epochs
//! response of one chain. It hands out [`EpochView`] handles that are memoized
//! per identifier, so repeated lookups return the identical `Arc` and the map
//! never grows beyond the chain's own (small, configured) set of epoch names.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::errors::SourceError;
use crate::source::QuerySource;

pub mod types;
pub mod view;

use types::{EpochRecord, EpochsResponse};
use view::EpochView;

/// Response cell shared between a collection and its views.
///
/// Views hold a [`std::sync::Weak`] to this cell, so they never extend the collection's
/// lifetime; once the collection is dropped, views read as not-yet-loaded.
#[derive(Debug, Default)]
pub(crate) struct ResponseCell {
    response: RwLock<Option<EpochsResponse>>,
}

impl ResponseCell {
    /// Looks up the record for `identifier` in the current response.
    ///
    /// `None` when no response has been hydrated yet or when the latest
    /// response carries no record with that identifier.
    pub(crate) fn record(&self, identifier: &str) -> Option<EpochRecord> {
        let guard = read_or_recover(&self.response);
        guard
            .as_ref()?
            .epochs
            .iter()
            .find(|epoch| epoch.identifier == identifier)
            .cloned()
    }

    fn replace(&self, response: EpochsResponse) {
        let mut guard = write_or_recover(&self.response);
        *guard = Some(response);
    }
}

// The cell only ever holds plain data, so a panic while a lock is held cannot
// leave it logically inconsistent; recover from poisoning instead of
// propagating a panic into unrelated readers.
fn read_or_recover<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_or_recover<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Tracks the latest epochs response for one chain and hands out stable,
/// memoized [`EpochView`] handles per epoch identifier.
///
/// The view map is append-only: entries are never evicted, trading unbounded
/// growth for referential stability of the returned handles. The identifier
/// space is the chain's configured set of epoch names, so growth is bounded
/// in practice.
///
/// All operations take `&self`; interior locking makes [`hydrate`] and
/// [`view`] safe to call from concurrent tasks without external
/// serialization.
///
/// # Examples
///
/// ```rust
/// use epochscan::{EpochCollection, EpochRecord, EpochsResponse};
///
/// let collection = EpochCollection::new("osmosis-1");
/// let day = collection.view("day");
///
/// collection.hydrate(EpochsResponse {
///     epochs: vec![EpochRecord {
///         identifier: "day".to_string(),
///         duration: "86400s".to_string(),
///         current_epoch_start_time: "2023-01-01T00:00:00Z".to_string(),
///     }],
/// });
///
/// // The view obtained before hydration sees the new data on the next read.
/// assert_eq!(day.duration(), Some(chrono::Duration::seconds(86400)));
/// ```
///
/// [`hydrate`]: EpochCollection::hydrate
/// [`view`]: EpochCollection::view
#[derive(Debug)]
pub struct EpochCollection {
    chain_id: String,
    cell: Arc<ResponseCell>,
    views: RwLock<HashMap<String, Arc<EpochView>>>,
}

impl EpochCollection {
    /// Creates an empty collection for the given chain.
    ///
    /// No response is tracked until [`hydrate`](Self::hydrate) or
    /// [`refresh`](Self::refresh) is called; until then every view reads as
    /// not-yet-loaded.
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            cell: Arc::new(ResponseCell::default()),
            views: RwLock::new(HashMap::new()),
        }
    }

    /// The chain this collection was created for.
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Replaces the tracked response, discarding any previous one.
    ///
    /// Every existing view observes the new data on its next read; reads are
    /// pull-based, so no propagation step is needed. A response with zero
    /// epochs or with malformed records is accepted as-is: record-level
    /// problems surface lazily, per view, at derivation time.
    ///
    /// Any fetch still in flight at the [`QuerySource`] is superseded by this
    /// call; abandoning it is the source's concern.
    pub fn hydrate(&self, response: EpochsResponse) {
        debug!(
            chain_id = %self.chain_id,
            epochs = response.epochs.len(),
            "hydrating epochs response"
        );
        self.cell.replace(response);
    }

    /// Returns the memoized view for `identifier`, creating it on first use.
    ///
    /// The same `Arc` is returned for the same identifier on every call for
    /// the lifetime of the collection, across any number of intervening
    /// [`hydrate`](Self::hydrate) calls. The check-then-insert runs under the
    /// map's write lock, so concurrent lookups for the same unseen identifier
    /// cannot produce two distinct views.
    pub fn view(&self, identifier: &str) -> Arc<EpochView> {
        if let Some(existing) = read_or_recover(&self.views).get(identifier) {
            return Arc::clone(existing);
        }

        let mut views = write_or_recover(&self.views);
        let entry = views.entry(identifier.to_string()).or_insert_with(|| {
            debug!(chain_id = %self.chain_id, identifier, "creating epoch view");
            Arc::new(EpochView::new(identifier, Arc::downgrade(&self.cell)))
        });
        Arc::clone(entry)
    }

    /// The raw record currently backing `identifier`, if any.
    ///
    /// This is the same read every view accessor performs; exposed for
    /// callers that want the untouched record without going through a view.
    pub fn current_record(&self, identifier: &str) -> Option<EpochRecord> {
        self.cell.record(identifier)
    }

    /// Fetches a fresh response from `source` and hydrates it.
    ///
    /// The one async touchpoint of the crate. Transport failures are returned
    /// untouched and leave the previously tracked response in place.
    pub async fn refresh(&self, source: &dyn QuerySource) -> Result<(), SourceError> {
        let response = source.fetch_epochs(&self.chain_id).await?;
        self.hydrate(response);
        Ok(())
    }
}
