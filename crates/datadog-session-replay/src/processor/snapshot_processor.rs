// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::{RecordCallback, RecordWriter, RecordedDataProcessor};
use crate::constants::FULL_SNAPSHOT_INTERVAL_MS;
use crate::model::{EnrichedRecord, FocusData, MetaData, MobileRecord, Wireframe};
use crate::queue::{SnapshotRecordedDataQueueItem, TouchEventRecordedDataQueueItem};
use crate::recorder::{GlobalBounds, Node, ScreenOrientation};
use crate::rum::SessionReplayRumContext;
use crate::sync::lock;
use std::sync::{Arc, Mutex};
use tracing::trace;

#[derive(Default)]
struct ProcessorState {
    prev_wireframes: Vec<Wireframe>,
    last_full_snapshot_at: Option<i64>,
    last_screen: Option<(GlobalBounds, ScreenOrientation)>,
}

/// Writes view lifecycle and full snapshot records for every processed snapshot.
pub struct SnapshotProcessor {
    writer: Arc<dyn RecordWriter>,
    record_callback: Arc<dyn RecordCallback>,
    state: Mutex<ProcessorState>,
}

impl SnapshotProcessor {
    pub fn new(writer: Arc<dyn RecordWriter>, record_callback: Arc<dyn RecordCallback>) -> Self {
        Self {
            writer,
            record_callback,
            state: Mutex::new(ProcessorState::default()),
        }
    }

    fn write(&self, context: &SessionReplayRumContext, records: Vec<MobileRecord>) {
        self.writer.write(EnrichedRecord {
            application_id: context.application_id.clone(),
            session_id: context.session_id.clone(),
            view_id: context.view_id.clone(),
            records,
        });
        self.record_callback.on_record_for_view_sent(&context.view_id);
    }
}

impl RecordedDataProcessor for SnapshotProcessor {
    fn process_screen_snapshots(&self, item: &SnapshotRecordedDataQueueItem) {
        let data = item.rum_context_data();
        let timestamp = data.timestamp;
        let wireframes: Vec<Wireframe> = item.nodes().iter().flat_map(Node::flatten).collect();
        if wireframes.is_empty() {
            return;
        }

        let system_information = item.system_information();
        let screen = (
            system_information.screen_bounds,
            system_information.screen_orientation,
        );
        let view_changed = data.prev_rum_context != data.new_rum_context;

        let mut state = lock(&self.state);
        if view_changed && data.prev_rum_context.is_valid() {
            self.write(
                &data.prev_rum_context,
                vec![MobileRecord::ViewEnd { timestamp }],
            );
        }

        let screen_changed = state.last_screen != Some(screen);
        let full_snapshot_due = state
            .last_full_snapshot_at
            .map_or(true, |last| timestamp - last >= FULL_SNAPSHOT_INTERVAL_MS);

        let mut records = Vec::new();
        if view_changed || screen_changed {
            let screen_size = system_information
                .screen_bounds
                .density_normalized(system_information.screen_density);
            records.push(MobileRecord::Meta {
                timestamp,
                data: MetaData {
                    width: screen_size.width,
                    height: screen_size.height,
                    href: None,
                },
            });
            records.push(MobileRecord::Focus {
                timestamp,
                data: FocusData { has_focus: true },
            });
        }

        let force_full_snapshot = view_changed || screen_changed || full_snapshot_due;
        if force_full_snapshot || state.prev_wireframes != wireframes {
            records.push(MobileRecord::FullSnapshot {
                timestamp,
                wireframes: wireframes.clone(),
            });
            state.last_full_snapshot_at = Some(timestamp);
        } else {
            trace!(timestamp, "Skipping unchanged snapshot");
        }

        state.prev_wireframes = wireframes;
        state.last_screen = Some(screen);
        drop(state);

        if !records.is_empty() {
            self.write(&data.new_rum_context, records);
        }
    }

    fn process_touch_events_records(&self, item: &TouchEventRecordedDataQueueItem) {
        self.write(
            &item.rum_context_data().new_rum_context,
            item.touch_data().to_vec(),
        );
    }
}
