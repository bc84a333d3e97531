// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Default limits of the recording pipeline.

/// Maximum age, in milliseconds, of a queue item before the drain discards it.
pub const MAX_DELAY_MS: i64 = 200;

/// Quiet period, in milliseconds, that closes a burst of draw signals.
pub const DEBOUNCE_TIME_MS: u64 = 64;

/// A snapshot is taken at least this often, in milliseconds, while draws keep coming.
pub const MAX_RECORD_DELAY_MS: u64 = 64;

/// Maximum number of items waiting in the recorded data queue.
pub const MAX_QUEUE_SIZE: usize = 128;

/// Views wider or taller than this, in density independent pixels, are not captured as images.
pub const IMAGE_SIZE_LIMIT_DP: i64 = 120;

/// Encoded images above this size, in bytes, are dropped.
pub const BITMAP_SIZE_LIMIT_BYTES: usize = 15_000;

/// A full snapshot is forced when the last one is older than this, in milliseconds.
pub const FULL_SNAPSHOT_INTERVAL_MS: i64 = 3_000;

/// Identifier used by the RUM SDK when no application, session or view is active.
pub const NULL_UUID: &str = "00000000-0000-0000-0000-000000000000";
