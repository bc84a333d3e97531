// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::item::{
    RecordedDataQueueItem, SnapshotRecordedDataQueueItem, TouchEventRecordedDataQueueItem,
};
use super::recorded_data_queue::{DrainOutcome, RecordedDataQueue};
use super::service::QueueCommand;
use crate::errors::DrainError;
use crate::model::MobileRecord;
use crate::recorder::SystemInformation;
use crate::rum::{RumContextData, RumContextDataHandler};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error};

/// UI-facing side of the recorded data queue.
///
/// Appends items and asks the background worker to drain. Never blocks on processing.
#[derive(Clone)]
pub struct RecordedDataQueueHandler {
    queue: Arc<RecordedDataQueue>,
    rum_context_data_handler: Arc<RumContextDataHandler>,
    tx: mpsc::UnboundedSender<QueueCommand>,
    drain_pending: Arc<AtomicBool>,
}

impl RecordedDataQueueHandler {
    pub(super) fn new(
        queue: Arc<RecordedDataQueue>,
        rum_context_data_handler: Arc<RumContextDataHandler>,
        tx: mpsc::UnboundedSender<QueueCommand>,
        drain_pending: Arc<AtomicBool>,
    ) -> Self {
        Self {
            queue,
            rum_context_data_handler,
            tx,
            drain_pending,
        }
    }

    /// Appends an empty snapshot item. Returns `None` when there is no valid RUM
    /// context or the queue is full.
    pub fn add_snapshot_item(
        &self,
        system_information: SystemInformation,
    ) -> Option<Arc<SnapshotRecordedDataQueueItem>> {
        let rum_context_data = self.rum_context_data_handler.create_rum_context_data()?;
        let item = Arc::new(SnapshotRecordedDataQueueItem::new(
            rum_context_data,
            system_information,
        ));
        self.insert(RecordedDataQueueItem::Snapshot(item.clone()), item.rum_context_data())?;
        Some(item)
    }

    /// Appends a batch of pointer interactions. Same drop rules as snapshots.
    pub fn add_touch_event_item(
        &self,
        pointer_interactions: Vec<MobileRecord>,
    ) -> Option<Arc<TouchEventRecordedDataQueueItem>> {
        let rum_context_data = self.rum_context_data_handler.create_rum_context_data()?;
        let item = Arc::new(TouchEventRecordedDataQueueItem::new(
            rum_context_data,
            pointer_interactions,
        ));
        self.insert(RecordedDataQueueItem::TouchEvent(item.clone()), item.rum_context_data())?;
        Some(item)
    }

    fn insert(
        &self,
        item: RecordedDataQueueItem,
        rum_context_data: &RumContextData,
    ) -> Option<()> {
        match self.queue.offer(item) {
            Ok(()) => Some(()),
            Err(e) => {
                debug!("Dropping queue item: {e}");
                self.rum_context_data_handler.restore(rum_context_data);
                None
            }
        }
    }

    /// Asks the worker for a drain cycle.
    ///
    /// Requests made while one is already pending collapse into it. The flag is cleared by
    /// the worker right before it scans, so a request racing with a running cycle still
    /// gets its own scan.
    pub fn try_to_consume_items(&self) {
        if self.queue.is_empty() {
            return;
        }
        if self.drain_pending.swap(true, Ordering::AcqRel) {
            return;
        }
        if self.tx.send(QueueCommand::Drain).is_err() {
            self.drain_pending.store(false, Ordering::Release);
            error!("Failed to request a drain: queue worker is not running");
        }
    }

    /// Releases one async job of `item` and requests a drain once none remain.
    pub fn on_async_work_completed(&self, item: &SnapshotRecordedDataQueueItem) {
        if item.decrement_pending_jobs() == 0 {
            self.try_to_consume_items();
        }
    }

    /// Runs a drain cycle on the worker and waits for it.
    pub async fn flush(&self) -> Result<DrainOutcome, DrainError> {
        let (response_tx, response_rx) = oneshot::channel();
        self.tx
            .send(QueueCommand::Flush(response_tx))
            .map_err(|_| DrainError::WorkerStopped)?;

        response_rx.await.map_err(|_| DrainError::ResponseDropped)
    }

    pub fn shutdown(&self) -> Result<(), DrainError> {
        self.tx
            .send(QueueCommand::Shutdown)
            .map_err(|_| DrainError::WorkerStopped)
    }

    pub fn queue_size(&self) -> usize {
        self.queue.len()
    }
}
