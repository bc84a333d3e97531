// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::model::MobileRecord;
use crate::recorder::{Node, SystemInformation};
use crate::rum::RumContextData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// A screen snapshot waiting for its nodes and image captures.
///
/// Nodes are attached once, after the tree walk. Image captures started during the walk
/// bump `pending_jobs` and release it from their completion threads.
#[derive(Debug)]
pub struct SnapshotRecordedDataQueueItem {
    rum_context_data: RumContextData,
    system_information: SystemInformation,
    nodes: OnceLock<Vec<Node>>,
    pending_jobs: AtomicUsize,
}

impl SnapshotRecordedDataQueueItem {
    pub fn new(rum_context_data: RumContextData, system_information: SystemInformation) -> Self {
        Self {
            rum_context_data,
            system_information,
            nodes: OnceLock::new(),
            pending_jobs: AtomicUsize::new(0),
        }
    }

    pub fn rum_context_data(&self) -> &RumContextData {
        &self.rum_context_data
    }

    pub fn system_information(&self) -> &SystemInformation {
        &self.system_information
    }

    /// Attached nodes, empty until `set_nodes` was called.
    pub fn nodes(&self) -> &[Node] {
        self.nodes.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// Attaches the produced nodes. Returns `false` if nodes were already attached.
    pub fn set_nodes(&self, nodes: Vec<Node>) -> bool {
        self.nodes.set(nodes).is_ok()
    }

    pub fn pending_jobs(&self) -> usize {
        self.pending_jobs.load(Ordering::Acquire)
    }

    pub fn increment_pending_jobs(&self) {
        self.pending_jobs.fetch_add(1, Ordering::AcqRel);
    }

    /// Releases one pending job and returns how many remain. Never goes below zero.
    pub fn decrement_pending_jobs(&self) -> usize {
        match self
            .pending_jobs
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |pending| {
                pending.checked_sub(1)
            }) {
            Ok(previous) => previous - 1,
            Err(_) => 0,
        }
    }

    /// False once the attached nodes turned out empty.
    pub fn is_valid(&self) -> bool {
        self.nodes.get().map_or(true, |nodes| !nodes.is_empty())
    }

    pub fn is_ready(&self) -> bool {
        self.nodes.get().is_some() && self.pending_jobs() == 0
    }
}

/// A batch of pointer interaction records.
#[derive(Debug)]
pub struct TouchEventRecordedDataQueueItem {
    rum_context_data: RumContextData,
    touch_data: Vec<MobileRecord>,
}

impl TouchEventRecordedDataQueueItem {
    pub fn new(rum_context_data: RumContextData, touch_data: Vec<MobileRecord>) -> Self {
        Self {
            rum_context_data,
            touch_data,
        }
    }

    pub fn rum_context_data(&self) -> &RumContextData {
        &self.rum_context_data
    }

    pub fn touch_data(&self) -> &[MobileRecord] {
        &self.touch_data
    }

    pub fn is_valid(&self) -> bool {
        !self.touch_data.is_empty()
    }

    pub fn is_ready(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub enum RecordedDataQueueItem {
    Snapshot(Arc<SnapshotRecordedDataQueueItem>),
    TouchEvent(Arc<TouchEventRecordedDataQueueItem>),
}

impl RecordedDataQueueItem {
    pub fn rum_context_data(&self) -> &RumContextData {
        match self {
            RecordedDataQueueItem::Snapshot(item) => item.rum_context_data(),
            RecordedDataQueueItem::TouchEvent(item) => item.rum_context_data(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            RecordedDataQueueItem::Snapshot(item) => item.is_valid(),
            RecordedDataQueueItem::TouchEvent(item) => item.is_valid(),
        }
    }

    pub fn is_ready(&self) -> bool {
        match self {
            RecordedDataQueueItem::Snapshot(item) => item.is_ready(),
            RecordedDataQueueItem::TouchEvent(item) => item.is_ready(),
        }
    }

    pub fn is_too_old(&self, now: i64, max_delay_ms: i64) -> bool {
        now - self.rum_context_data().timestamp > max_delay_ms
    }
}
