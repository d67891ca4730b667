// SPDX-FileCopyrightText: 2026 Epochscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Per-identifier derived view over the collection's current response.
//!
//! An [`EpochView`] caches nothing: each accessor re-reads the owning
//! collection's latest response and derives its result on the spot, so a view
//! is always consistent with the most recent hydration without any
//! invalidation step.

use std::sync::Weak;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::types::EpochRecord;
use super::ResponseCell;
use crate::config::constants::DURATION_SECONDS_SUFFIX;

/// Derived view of one epoch: raw record passthrough plus typed duration and
/// start/end instants.
///
/// Obtained from [`EpochCollection::view`](crate::EpochCollection::view);
/// one instance exists per identifier for the lifetime of the collection.
/// The back-reference to the collection is weak, so outstanding views never
/// keep a dropped collection alive; they simply read as not-yet-loaded.
///
/// Derivation never fails loudly. Missing responses, unknown identifiers, and
/// malformed records all degrade to `None` or to the epoch-zero sentinel
/// instant, so one bad record cannot crash unrelated consumers.
#[derive(Debug)]
pub struct EpochView {
    identifier: String,
    cell: Weak<ResponseCell>,
}

impl EpochView {
    pub(crate) fn new(identifier: &str, cell: Weak<ResponseCell>) -> Self {
        Self {
            identifier: identifier.to_string(),
            cell,
        }
    }

    /// The epoch identifier this view was created for.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The raw record currently backing this view.
    ///
    /// `None` before the first hydration, when the latest response has no
    /// record with this identifier, or after the owning collection has been
    /// dropped.
    pub fn epoch(&self) -> Option<EpochRecord> {
        self.cell.upgrade()?.record(&self.identifier)
    }

    /// The epoch's duration, derived from the raw `"<seconds>s"` string.
    ///
    /// The upstream serializer only emits whole seconds, so the suffix is
    /// stripped and the leading integer converted to milliseconds. A record
    /// whose duration carries no leading digits yields `None` rather than an
    /// error; [`end_time`](Self::end_time) then falls back to the start
    /// instant.
    pub fn duration(&self) -> Option<Duration> {
        let record = self.epoch()?;
        let seconds = match parse_leading_seconds(&record.duration) {
            Some(seconds) => seconds,
            None => {
                debug!(
                    identifier = %self.identifier,
                    duration = %record.duration,
                    "unparseable epoch duration"
                );
                return None;
            }
        };
        Some(Duration::milliseconds(seconds.saturating_mul(1000)))
    }

    /// Start instant of the current iteration of this epoch.
    ///
    /// Returns the epoch-zero sentinel (`1970-01-01T00:00:00Z`) while no
    /// record is available, so callers can always format or compare the
    /// result without an `Option` dance.
    pub fn start_time(&self) -> DateTime<Utc> {
        let Some(record) = self.epoch() else {
            return DateTime::UNIX_EPOCH;
        };
        parse_instant(&record.current_epoch_start_time).unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// End instant of the current iteration: `start_time() + duration()`.
    ///
    /// Equals [`start_time`](Self::start_time) when no duration can be
    /// derived, and on the (pathological) overflow of the addition.
    pub fn end_time(&self) -> DateTime<Utc> {
        let start = self.start_time();
        match self.duration() {
            Some(duration) => start.checked_add_signed(duration).unwrap_or(start),
            None => start,
        }
    }
}

/// Parses the leading integer of a protobuf duration string, tolerating a
/// trailing `"s"` suffix.
///
/// `"600s"` -> `Some(600)`, `"600"` -> `Some(600)`, `"12x34s"` -> `Some(12)`,
/// `"abc"` / `""` -> `None`.
fn parse_leading_seconds(raw: &str) -> Option<i64> {
    let body = raw.strip_suffix(DURATION_SECONDS_SUFFIX).unwrap_or(raw);
    let digits_end = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    body[..digits_end].parse().ok()
}

/// Parses a wire timestamp: RFC 3339 first, then a bare unix-seconds string.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
}
