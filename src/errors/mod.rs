// SPDX-FileCopyrightText: 2026 Epochscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the epochscan library.
//!
//! Only the fetch seam can fail: [`SourceError`] covers everything a
//! [`QuerySource`](crate::QuerySource) implementation may report. Derivation
//! itself never errors; missing or malformed records degrade to `Option` and
//! sentinel values inside [`EpochView`](crate::EpochView), so nothing in the
//! read path raises to the caller.
//!
//! [`EpochscanError`] is the unified wrapper for callers that do not need to
//! distinguish error sources; module errors convert into it via `From`, so
//! `?` propagates naturally.

/// Errors reported by [`QuerySource`](crate::QuerySource) implementations.
///
/// Retry and backoff live behind the source seam; by the time one of these
/// surfaces from [`EpochCollection::refresh`](crate::EpochCollection::refresh)
/// the source has given up, and the previously hydrated response (if any)
/// remains in place.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The remote endpoint could not be reached or answered abnormally.
    #[error("transport error: {details}")]
    Transport {
        /// Description of the transport failure
        details: String,
    },

    /// The response body could not be decoded into an epochs response.
    #[error("failed to decode epochs response: {details}")]
    Decode {
        /// Details about the decode failure
        details: String,
        /// The underlying decode error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The chain does not expose an epochs module.
    #[error("chain {chain_id} does not expose the epochs query")]
    UnsupportedChain {
        /// The chain the fetch was attempted for
        chain_id: String,
    },
}

impl SourceError {
    /// Create a `Transport` error with details.
    pub fn transport(details: impl Into<String>) -> Self {
        SourceError::Transport {
            details: details.into(),
        }
    }

    /// Create a `Decode` error from any decode failure.
    pub fn decode(
        details: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SourceError::Decode {
            details: details.into(),
            source: Box::new(source),
        }
    }

    /// Create an `UnsupportedChain` error for a chain id.
    pub fn unsupported_chain(chain_id: impl Into<String>) -> Self {
        SourceError::UnsupportedChain {
            chain_id: chain_id.into(),
        }
    }
}

/// Unified error type for all epochscan operations.
///
/// Wraps the module-specific error types for callers that handle failures
/// uniformly.
#[derive(Debug, thiserror::Error)]
pub enum EpochscanError {
    /// Error from the query source while fetching an epochs response.
    #[error("Query source error: {0}")]
    Source(#[from] SourceError),
}
