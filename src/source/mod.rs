// SPDX-FileCopyrightText: 2026 Epochscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The fetch seam between the collection and the outside world.
//!
//! [`QuerySource`] is the only external dependency of the crate. Transport,
//! retry, backoff, response persistence, and endpoint resolution for a chain
//! all live behind it; the collection only ever sees a decoded
//! [`EpochsResponse`](crate::EpochsResponse) or a [`SourceError`].

use async_trait::async_trait;

use crate::epochs::types::EpochsResponse;
use crate::errors::SourceError;

/// Capability to fetch the epochs response for a chain.
///
/// Implementations typically query the chain's LCD endpoint at
/// [`constants::EPOCHS_QUERY_PATH`](crate::constants::EPOCHS_QUERY_PATH).
///
/// # Supersession
///
/// A call to [`EpochCollection::hydrate`](crate::EpochCollection::hydrate)
/// marks any fetch still in flight as superseded. Implementations are
/// expected to abandon or ignore the stale result themselves; the collection
/// never tracks outstanding fetches.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a source can be shared across
/// tasks refreshing multiple collections.
#[async_trait]
pub trait QuerySource: Send + Sync {
    /// Fetches the current epochs response for `chain_id`.
    async fn fetch_epochs(&self, chain_id: &str) -> Result<EpochsResponse, SourceError>;
}
