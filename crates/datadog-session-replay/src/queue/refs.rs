// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::handler::RecordedDataQueueHandler;
use super::item::SnapshotRecordedDataQueueItem;
use crate::recorder::AsyncJobStatusCallback;
use std::sync::Arc;

/// Routes the async jobs of one snapshot to its queue item.
pub struct RecordedDataQueueRefs {
    handler: RecordedDataQueueHandler,
    item: Arc<SnapshotRecordedDataQueueItem>,
}

impl RecordedDataQueueRefs {
    pub fn new(
        handler: RecordedDataQueueHandler,
        item: Arc<SnapshotRecordedDataQueueItem>,
    ) -> Self {
        Self { handler, item }
    }
}

impl AsyncJobStatusCallback for RecordedDataQueueRefs {
    fn job_started(&self) {
        self.item.increment_pending_jobs();
    }

    fn job_finished(&self) {
        self.handler.on_async_work_completed(&self.item);
    }
}
