// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::handler::RecordedDataQueueHandler;
use super::recorded_data_queue::{DrainOutcome, RecordedDataQueue};
use crate::config::SessionReplayConfig;
use crate::processor::RecordedDataProcessor;
use crate::rum::RumContextDataHandler;
use crate::time::TimeProvider;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error};

#[derive(Debug)]
pub enum QueueCommand {
    Drain,
    Flush(oneshot::Sender<DrainOutcome>),
    Shutdown,
}

/// Background worker owning the destructive side of the recorded data queue.
pub struct RecordedDataQueueService {
    queue: Arc<RecordedDataQueue>,
    processor: Arc<dyn RecordedDataProcessor>,
    time_provider: Arc<dyn TimeProvider>,
    drain_pending: Arc<AtomicBool>,
    rx: mpsc::UnboundedReceiver<QueueCommand>,
}

impl RecordedDataQueueService {
    pub fn new(
        config: &SessionReplayConfig,
        processor: Arc<dyn RecordedDataProcessor>,
        rum_context_data_handler: Arc<RumContextDataHandler>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> (Self, RecordedDataQueueHandler) {
        let (tx, rx) = mpsc::unbounded_channel();
        let queue = Arc::new(RecordedDataQueue::new(
            config.max_item_delay_ms,
            config.max_queue_size,
        ));
        let drain_pending = Arc::new(AtomicBool::new(false));

        let handler = RecordedDataQueueHandler::new(
            queue.clone(),
            rum_context_data_handler,
            tx,
            drain_pending.clone(),
        );
        let service = Self {
            queue,
            processor,
            time_provider,
            drain_pending,
            rx,
        };

        (service, handler)
    }

    pub async fn run(mut self) {
        debug!("Recorded data queue service started");

        while let Some(command) = self.rx.recv().await {
            match command {
                QueueCommand::Drain => {
                    self.drain_pending.store(false, Ordering::Release);
                    self.drain();
                }

                QueueCommand::Flush(response_tx) => {
                    let outcome = self.drain();
                    if response_tx.send(outcome).is_err() {
                        error!("Failed to send flush response - receiver dropped");
                    }
                }

                QueueCommand::Shutdown => {
                    debug!("Recorded data queue service shutting down");
                    break;
                }
            }
        }

        debug!("Recorded data queue service stopped");
    }

    fn drain(&self) -> DrainOutcome {
        let now = self.time_provider.get_device_timestamp();
        let outcome = self.queue.drain(now, self.processor.as_ref());
        if outcome.processed > 0 || outcome.discarded > 0 {
            debug!(
                processed = outcome.processed,
                discarded = outcome.discarded,
                blocked = outcome.blocked,
                "Drained recorded data queue"
            );
        }
        outcome
    }
}
