// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::Wireframe;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

const POINTER_INTERACTION_SOURCE: u8 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaData {
    pub width: i64,
    pub height: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusData {
    pub has_focus: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventType {
    Down,
    Up,
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    Touch,
    Mouse,
    Pen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerInteractionData {
    pub pointer_event_type: PointerEventType,
    pub pointer_type: PointerType,
    pub pointer_id: i64,
    pub x: i64,
    pub y: i64,
}

impl Serialize for PointerInteractionData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PointerInteractionData", 6)?;
        state.serialize_field("source", &POINTER_INTERACTION_SOURCE)?;
        state.serialize_field("pointerEventType", &self.pointer_event_type)?;
        state.serialize_field("pointerType", &self.pointer_type)?;
        state.serialize_field("pointerId", &self.pointer_id)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.end()
    }
}

/// A replay record, as stored in a segment.
#[derive(Debug, Clone, PartialEq)]
pub enum MobileRecord {
    Meta { timestamp: i64, data: MetaData },
    Focus { timestamp: i64, data: FocusData },
    ViewEnd { timestamp: i64 },
    FullSnapshot { timestamp: i64, wireframes: Vec<Wireframe> },
    IncrementalSnapshot { timestamp: i64, data: PointerInteractionData },
}

impl MobileRecord {
    pub fn record_type(&self) -> u8 {
        match self {
            MobileRecord::Meta { .. } => 4,
            MobileRecord::Focus { .. } => 6,
            MobileRecord::ViewEnd { .. } => 7,
            MobileRecord::FullSnapshot { .. } => 10,
            MobileRecord::IncrementalSnapshot { .. } => 11,
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            MobileRecord::Meta { timestamp, .. }
            | MobileRecord::Focus { timestamp, .. }
            | MobileRecord::ViewEnd { timestamp }
            | MobileRecord::FullSnapshot { timestamp, .. }
            | MobileRecord::IncrementalSnapshot { timestamp, .. } => *timestamp,
        }
    }
}

#[derive(Serialize)]
struct FullSnapshotData<'a> {
    wireframes: &'a [Wireframe],
}

impl Serialize for MobileRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if matches!(self, MobileRecord::ViewEnd { .. }) {
            2
        } else {
            3
        };
        let mut state = serializer.serialize_struct("MobileRecord", len)?;
        state.serialize_field("type", &self.record_type())?;
        state.serialize_field("timestamp", &self.timestamp())?;
        match self {
            MobileRecord::Meta { data, .. } => state.serialize_field("data", data)?,
            MobileRecord::Focus { data, .. } => state.serialize_field("data", data)?,
            MobileRecord::ViewEnd { .. } => {}
            MobileRecord::FullSnapshot { wireframes, .. } => {
                state.serialize_field("data", &FullSnapshotData { wireframes })?
            }
            MobileRecord::IncrementalSnapshot { data, .. } => state.serialize_field("data", data)?,
        }
        state.end()
    }
}

/// Records of one view, ready to be handed to storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    pub application_id: String,
    pub session_id: String,
    pub view_id: String,
    pub records: Vec<MobileRecord>,
}

impl EnrichedRecord {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
