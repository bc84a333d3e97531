// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Ordered queue of recorded data awaiting asynchronous enrichment.
//!
//! Items are appended from the UI side and drained on a background worker. A snapshot
//! item may wait for image captures to finish. The head of the queue is never skipped:
//! it is processed once ready, or discarded once invalid or older than the maximum delay.

mod handler;
mod item;
mod recorded_data_queue;
mod refs;
mod service;

pub use handler::RecordedDataQueueHandler;
pub use item::{
    RecordedDataQueueItem, SnapshotRecordedDataQueueItem, TouchEventRecordedDataQueueItem,
};
pub use recorded_data_queue::{DrainOutcome, RecordedDataQueue};
pub use refs::RecordedDataQueueRefs;
pub use service::{QueueCommand, RecordedDataQueueService};
