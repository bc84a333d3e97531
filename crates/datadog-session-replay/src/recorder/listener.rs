// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::debouncer::Debouncer;
use super::snapshot_producer::SnapshotProducer;
use super::view::{OnDrawListener, Window, WindowOwner};
use super::AsyncJobStatusCallback;
use crate::queue::{RecordedDataQueueHandler, RecordedDataQueueRefs};
use std::sync::{Arc, Weak};
use tracing::debug;

struct WindowsSnapshotTask {
    owner: Weak<dyn WindowOwner>,
    windows: Vec<Weak<dyn Window>>,
    handler: RecordedDataQueueHandler,
    producer: Arc<SnapshotProducer>,
}

impl WindowsSnapshotTask {
    fn take_snapshot(&self) -> bool {
        let Some(owner) = self.owner.upgrade() else {
            debug!("Skipping snapshot: window owner is gone");
            return false;
        };
        let windows: Vec<Arc<dyn Window>> = self.windows.iter().filter_map(Weak::upgrade).collect();
        if windows.is_empty() {
            return false;
        }

        let system_information = owner.resolve_system_information();
        let Some(item) = self.handler.add_snapshot_item(system_information.clone()) else {
            return false;
        };

        let async_jobs: Arc<dyn AsyncJobStatusCallback> = Arc::new(RecordedDataQueueRefs::new(
            self.handler.clone(),
            item.clone(),
        ));
        let nodes = windows
            .iter()
            .filter_map(|window| window.decor_view())
            .filter_map(|root| self.producer.produce(&root, &system_information, &async_jobs))
            .collect();

        // Readiness is gated on the nodes, so image jobs that already finished are
        // picked up by the drain requested below.
        item.set_nodes(nodes);
        self.handler.try_to_consume_items();
        true
    }
}

/// Draw listener shared by the windows of one owner.
///
/// Holds the owner and the windows weakly. A debounced snapshot whose owner is gone is a
/// no-op. `on_draw` is called on the UI thread and snapshots only ever run there.
pub struct WindowsOnDrawListener {
    snapshot_task: Arc<WindowsSnapshotTask>,
    debouncer: Debouncer,
}

impl WindowsOnDrawListener {
    pub fn new(
        owner: &Arc<dyn WindowOwner>,
        windows: &[Arc<dyn Window>],
        handler: RecordedDataQueueHandler,
        producer: Arc<SnapshotProducer>,
        debouncer: Debouncer,
    ) -> Self {
        Self {
            snapshot_task: Arc::new(WindowsSnapshotTask {
                owner: Arc::downgrade(owner),
                windows: windows.iter().map(Arc::downgrade).collect(),
                handler,
                producer,
            }),
            debouncer,
        }
    }

    /// Takes a snapshot on the calling thread, dropping any pending debounced one.
    pub fn take_snapshot_now(&self) -> bool {
        self.debouncer.cancel_pending();
        self.snapshot_task.take_snapshot()
    }

    pub fn stop(&self) {
        self.debouncer.cancel_pending();
    }
}

impl OnDrawListener for WindowsOnDrawListener {
    fn on_draw(&self) {
        let snapshot_task = self.snapshot_task.clone();
        self.debouncer.debounce(move || {
            snapshot_task.take_snapshot();
        });
    }
}
