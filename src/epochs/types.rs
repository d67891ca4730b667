// SPDX-FileCopyrightText: 2026 Epochscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Wire types for the epochs query.
//!
//! These mirror the JSON shape served by the chain's epochs module
//! (`/osmosis/epochs/v1beta1/epochs`). Records are kept as received:
//! `duration` stays a raw protobuf duration string and
//! `current_epoch_start_time` a raw timestamp string. Derivation into typed
//! durations and instants happens in [`EpochView`](crate::EpochView), lazily,
//! so a malformed record never fails response decoding.

use serde::{Deserialize, Serialize};

/// One epoch record as returned by the chain.
///
/// The upstream protobuf JSON serializer emits `duration` as a decimal number
/// of whole seconds followed by the literal suffix `"s"` (e.g. `"86400s"`);
/// fractional components are never present at second granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochRecord {
    /// Name of the epoch, unique within one chain (e.g. `"day"`, `"week"`).
    pub identifier: String,
    /// Raw duration string, `"<seconds>s"`.
    pub duration: String,
    /// Start timestamp of the current iteration of this epoch, as an
    /// RFC 3339 instant string.
    pub current_epoch_start_time: String,
}

/// The full set of epoch records last fetched from the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochsResponse {
    pub epochs: Vec<EpochRecord>,
}
