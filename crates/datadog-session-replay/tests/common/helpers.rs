// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Helper functions for integration tests

use super::mocks::{
    MemoryRecordWriter, MockClock, MockRecordCallback, MockRumContextProvider, MockView,
    MockWindow, MockWindowOwner,
};
use datadog_session_replay::config::SessionReplayConfig;
use datadog_session_replay::model::{
    Alignment, HorizontalAlignment, MobileRecord, Padding, PointerEventType,
    PointerInteractionData, PointerType, VerticalAlignment,
};
use datadog_session_replay::recorder::image::BitmapCapture;
use datadog_session_replay::recorder::view::TextAttributes;
use datadog_session_replay::recorder::{GlobalBounds, View, Window, WindowOwner};
use datadog_session_replay::session_replay::{SessionReplay, SessionReplayCollaborators};
use std::sync::Arc;
use std::time::Duration;

/// Everything a test needs to drive and observe a running recorder
pub struct Harness {
    pub session_replay: SessionReplay,
    pub clock: Arc<MockClock>,
    pub writer: Arc<MemoryRecordWriter>,
    pub callback: Arc<MockRecordCallback>,
    pub window: Arc<MockWindow>,
    pub owner: Arc<dyn WindowOwner>,
}

impl Harness {
    pub fn windows(&self) -> Vec<Arc<dyn Window>> {
        vec![self.window.clone() as Arc<dyn Window>]
    }

    pub fn start_recording(&self) {
        self.session_replay
            .start_recording(&self.windows(), &self.owner);
    }
}

/// Start a recorder on the current runtime around a screen with two images
pub fn start_harness(
    rum_context_provider: Arc<MockRumContextProvider>,
    bitmap_capture: Arc<dyn BitmapCapture>,
) -> Harness {
    let clock = Arc::new(MockClock::default());
    let writer = Arc::new(MemoryRecordWriter::default());
    let callback = Arc::new(MockRecordCallback::default());

    let session_replay = SessionReplay::start(
        SessionReplayConfig::default(),
        SessionReplayCollaborators {
            rum_context_provider,
            time_provider: clock.clone(),
            record_writer: writer.clone(),
            record_callback: callback.clone(),
            bitmap_capture,
        },
        tokio::runtime::Handle::current(),
    )
    .expect("Failed to start session replay");

    Harness {
        session_replay,
        clock,
        writer,
        callback,
        window: MockWindow::new(1, checkout_screen()),
        owner: Arc::new(MockWindowOwner::on_current_runtime()),
    }
}

/// Screen tree: root container, a title and two 40dp avatars
pub fn checkout_screen() -> Arc<dyn View> {
    MockView::container(
        1,
        GlobalBounds::new(0, 0, 1080, 1920),
        vec![
            MockView::text(2, GlobalBounds::new(30, 60, 600, 90), title("Checkout")),
            MockView::image(3, GlobalBounds::new(30, 300, 120, 120)),
            MockView::image(4, GlobalBounds::new(180, 300, 120, 120)),
        ],
    )
}

pub fn title(text: &str) -> TextAttributes {
    TextAttributes {
        text: text.to_string(),
        hint: None,
        color: 0xff21_2121,
        hint_color: 0x8021_2121,
        family: "sans-serif".to_string(),
        size: 48.0,
        padding: Padding::default(),
        alignment: Alignment {
            horizontal: HorizontalAlignment::Left,
            vertical: VerticalAlignment::Center,
        },
    }
}

pub fn tap(timestamp: i64, x: i64, y: i64) -> Vec<MobileRecord> {
    [PointerEventType::Down, PointerEventType::Up]
        .into_iter()
        .map(|pointer_event_type| MobileRecord::IncrementalSnapshot {
            timestamp,
            data: PointerInteractionData {
                pointer_event_type,
                pointer_type: PointerType::Touch,
                pointer_id: 0,
                x,
                y,
            },
        })
        .collect()
}

/// Poll `condition`, flushing the recorder between attempts
pub async fn wait_until(session_replay: &SessionReplay, condition: impl Fn() -> bool) {
    for _ in 0..300 {
        session_replay.flush().await.expect("Failed to flush");
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Condition not met in time");
}
