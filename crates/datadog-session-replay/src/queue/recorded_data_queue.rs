// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::item::RecordedDataQueueItem;
use crate::errors::EnqueueError;
use crate::processor::RecordedDataProcessor;
use crate::sync::lock;
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;
use tracing::{debug, error};

/// What a drain cycle did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrainOutcome {
    pub processed: usize,
    pub discarded: usize,
    /// The cycle stopped on a head that is not ready yet.
    pub blocked: bool,
}

/// FIFO of recorded data with head-of-line blocking.
///
/// Appends only take the item lock. A drain cycle holds the drain lock for its whole
/// duration and the item lock only while inspecting and popping the head, so processing
/// never delays an append.
#[derive(Debug)]
pub struct RecordedDataQueue {
    items: Mutex<VecDeque<RecordedDataQueueItem>>,
    drain_lock: Mutex<()>,
    max_item_delay_ms: i64,
    capacity: usize,
}

enum Head {
    Empty,
    Discarded,
    Blocked,
    Ready(RecordedDataQueueItem),
}

impl RecordedDataQueue {
    pub fn new(max_item_delay_ms: i64, capacity: usize) -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            drain_lock: Mutex::new(()),
            max_item_delay_ms,
            capacity,
        }
    }

    pub fn offer(&self, item: RecordedDataQueueItem) -> Result<(), EnqueueError> {
        let mut items = lock(&self.items);
        if items.len() >= self.capacity {
            return Err(EnqueueError::Full(self.capacity));
        }
        items.push_back(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.items).is_empty()
    }

    /// Hands every leading ready item to `processor`, in order.
    ///
    /// Heads that are invalid or older than the maximum delay at `now` are discarded.
    /// The cycle stops at the first head that is neither discardable nor ready.
    pub fn drain(&self, now: i64, processor: &dyn RecordedDataProcessor) -> DrainOutcome {
        let _cycle = lock(&self.drain_lock);
        let mut outcome = DrainOutcome::default();

        loop {
            let item = match self.pop_head(now) {
                Head::Empty => break,
                Head::Blocked => {
                    outcome.blocked = true;
                    break;
                }
                Head::Discarded => {
                    outcome.discarded += 1;
                    continue;
                }
                Head::Ready(item) => item,
            };

            let result = panic::catch_unwind(AssertUnwindSafe(|| match &item {
                RecordedDataQueueItem::Snapshot(snapshot) => {
                    processor.process_screen_snapshots(snapshot)
                }
                RecordedDataQueueItem::TouchEvent(touch) => {
                    processor.process_touch_events_records(touch)
                }
            }));
            match result {
                Ok(()) => outcome.processed += 1,
                Err(_) => {
                    error!("Recorded data processor panicked, dropping item");
                    outcome.discarded += 1;
                }
            }
        }

        outcome
    }

    fn pop_head(&self, now: i64) -> Head {
        let mut items = lock(&self.items);
        let Some(head) = items.front() else {
            return Head::Empty;
        };

        if head.is_too_old(now, self.max_item_delay_ms) {
            debug!(
                timestamp = head.rum_context_data().timestamp,
                now, "Discarding stale queue item"
            );
        } else if !head.is_valid() {
            debug!("Discarding invalid queue item");
        } else if head.is_ready() {
            return items.pop_front().map_or(Head::Empty, Head::Ready);
        } else {
            return Head::Blocked;
        }

        items.pop_front();
        Head::Discarded
    }
}
