// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Turns drained queue items into replay records.

mod snapshot_processor;

pub use snapshot_processor::SnapshotProcessor;

use crate::model::EnrichedRecord;
use crate::queue::{SnapshotRecordedDataQueueItem, TouchEventRecordedDataQueueItem};

/// Consumer of ready queue items, called in queue order from the drain worker.
pub trait RecordedDataProcessor: Send + Sync {
    fn process_screen_snapshots(&self, item: &SnapshotRecordedDataQueueItem);
    fn process_touch_events_records(&self, item: &TouchEventRecordedDataQueueItem);
}

/// Storage for produced records.
pub trait RecordWriter: Send + Sync {
    fn write(&self, record: EnrichedRecord);
}

/// Notified whenever records for a view were handed to the writer.
pub trait RecordCallback: Send + Sync {
    fn on_record_for_view_sent(&self, view_id: &str);
}
