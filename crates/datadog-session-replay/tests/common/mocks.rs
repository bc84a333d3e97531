// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Mock host collaborators: views, windows, RUM context, clock, storage and pixel copy

use datadog_session_replay::model::EnrichedRecord;
use datadog_session_replay::processor::{RecordCallback, RecordWriter};
use datadog_session_replay::recorder::image::{Bitmap, BitmapCapture, PixelCopyListener};
use datadog_session_replay::recorder::view::{TextAttributes, ViewBackground};
use datadog_session_replay::recorder::{
    GlobalBounds, OnDrawListener, ScreenOrientation, SystemInformation, UiExecutor, View, Window,
    WindowId, WindowOwner,
};
use datadog_session_replay::rum::{RumContextProvider, SessionReplayRumContext};
use datadog_session_replay::time::TimeProvider;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// Mock view with fixed attributes
pub struct MockView {
    pub id: i64,
    pub class_name: &'static str,
    pub bounds: GlobalBounds,
    pub background: Option<ViewBackground>,
    pub text: Option<TextAttributes>,
    pub drawable: bool,
    pub children: Vec<Arc<dyn View>>,
}

impl MockView {
    pub fn container(id: i64, bounds: GlobalBounds, children: Vec<Arc<dyn View>>) -> Arc<dyn View> {
        Arc::new(Self {
            id,
            class_name: "android.widget.FrameLayout",
            bounds,
            background: Some(ViewBackground {
                color: 0xffff_ffff,
                corner_radius: 0.0,
            }),
            text: None,
            drawable: false,
            children,
        })
    }

    pub fn text(id: i64, bounds: GlobalBounds, text: TextAttributes) -> Arc<dyn View> {
        Arc::new(Self {
            id,
            class_name: "android.widget.TextView",
            bounds,
            background: None,
            text: Some(text),
            drawable: false,
            children: Vec::new(),
        })
    }

    pub fn image(id: i64, bounds: GlobalBounds) -> Arc<dyn View> {
        Arc::new(Self {
            id,
            class_name: "android.widget.ImageView",
            bounds,
            background: None,
            text: None,
            drawable: true,
            children: Vec::new(),
        })
    }
}

impl View for MockView {
    fn id(&self) -> i64 {
        self.id
    }

    fn class_name(&self) -> &str {
        self.class_name
    }

    fn is_visible(&self) -> bool {
        true
    }

    fn alpha(&self) -> f32 {
        1.0
    }

    fn bounds(&self) -> GlobalBounds {
        self.bounds
    }

    fn background(&self) -> Option<ViewBackground> {
        self.background
    }

    fn text(&self) -> Option<TextAttributes> {
        self.text.clone()
    }

    fn has_drawable(&self) -> bool {
        self.drawable
    }

    fn children(&self) -> Vec<Arc<dyn View>> {
        self.children.clone()
    }
}

/// Mock window keeping its draw listeners in a list
pub struct MockWindow {
    pub id: WindowId,
    pub decor_view: Arc<dyn View>,
    pub listeners: Mutex<Vec<Arc<dyn OnDrawListener>>>,
}

impl MockWindow {
    pub fn new(id: u64, decor_view: Arc<dyn View>) -> Arc<Self> {
        Arc::new(Self {
            id: WindowId(id),
            decor_view,
            listeners: Mutex::new(Vec::new()),
        })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl Window for MockWindow {
    fn id(&self) -> WindowId {
        self.id
    }

    fn decor_view(&self) -> Option<Arc<dyn View>> {
        Some(self.decor_view.clone())
    }

    fn add_on_draw_listener(&self, listener: Arc<dyn OnDrawListener>) {
        self.listeners.lock().unwrap().push(listener);
    }

    fn remove_on_draw_listener(&self, listener: &Arc<dyn OnDrawListener>) {
        self.listeners
            .lock()
            .unwrap()
            .retain(|registered| !Arc::ptr_eq(registered, listener));
    }
}

/// Posts UI tasks onto the test runtime, which is single threaded
pub struct MockUiExecutor(pub tokio::runtime::Handle);

impl UiExecutor for MockUiExecutor {
    fn post(&self, task: Box<dyn FnOnce() + Send>) {
        self.0.spawn(async move { task() });
    }
}

/// Mock activity on a 1080x1920 portrait screen at density 3
pub struct MockWindowOwner {
    pub ui_executor: Arc<MockUiExecutor>,
}

impl MockWindowOwner {
    pub fn on_current_runtime() -> Self {
        Self {
            ui_executor: Arc::new(MockUiExecutor(tokio::runtime::Handle::current())),
        }
    }
}

impl WindowOwner for MockWindowOwner {
    fn ui_executor(&self) -> Arc<dyn UiExecutor> {
        self.ui_executor.clone()
    }

    fn resolve_system_information(&self) -> SystemInformation {
        SystemInformation {
            screen_bounds: GlobalBounds::new(0, 0, 1080, 1920),
            screen_orientation: ScreenOrientation::Portrait,
            screen_density: 3.0,
            theme_color: Some("#ffffffff".to_string()),
        }
    }
}

/// Mock RUM context provider whose active view can be switched
pub struct MockRumContextProvider(pub Mutex<Option<SessionReplayRumContext>>);

impl MockRumContextProvider {
    pub fn with_view(view_id: &str) -> Arc<Self> {
        Arc::new(Self(Mutex::new(Some(SessionReplayRumContext::new(
            "app-id", "session-id", view_id,
        )))))
    }

    pub fn without_view() -> Arc<Self> {
        Arc::new(Self(Mutex::new(None)))
    }
}

impl RumContextProvider for MockRumContextProvider {
    fn get_rum_context(&self) -> Option<SessionReplayRumContext> {
        self.0.lock().unwrap().clone()
    }
}

/// Mock clock moved by hand
#[derive(Default)]
pub struct MockClock(pub AtomicI64);

impl MockClock {
    pub fn set(&self, timestamp: i64) {
        self.0.store(timestamp, Ordering::SeqCst);
    }
}

impl TimeProvider for MockClock {
    fn get_device_timestamp(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Mock storage keeping every written record
#[derive(Default)]
pub struct MemoryRecordWriter(pub Mutex<Vec<EnrichedRecord>>);

impl MemoryRecordWriter {
    pub fn records(&self) -> Vec<EnrichedRecord> {
        self.0.lock().unwrap().clone()
    }
}

impl RecordWriter for MemoryRecordWriter {
    fn write(&self, record: EnrichedRecord) {
        self.0.lock().unwrap().push(record);
    }
}

/// Mock record callback collecting view ids
#[derive(Default)]
pub struct MockRecordCallback(pub Mutex<Vec<String>>);

impl RecordCallback for MockRecordCallback {
    fn on_record_for_view_sent(&self, view_id: &str) {
        self.0.lock().unwrap().push(view_id.to_string());
    }
}

/// Mock pixel copy holding every request until the test completes it
#[derive(Default)]
pub struct DeferredBitmapCapture {
    pending: Mutex<VecDeque<Box<dyn PixelCopyListener>>>,
}

impl DeferredBitmapCapture {
    pub fn pending(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    pub fn complete_next(&self) {
        let listener = self.pending.lock().unwrap().pop_front();
        if let Some(listener) = listener {
            listener.on_copy_success(solid_bitmap(8, 8));
        }
    }

    pub fn fail_next(&self, error_code: i32) {
        let listener = self.pending.lock().unwrap().pop_front();
        if let Some(listener) = listener {
            listener.on_copy_failure(error_code);
        }
    }
}

impl BitmapCapture for DeferredBitmapCapture {
    fn capture(&self, _view: Arc<dyn View>, listener: Box<dyn PixelCopyListener>) {
        self.pending.lock().unwrap().push_back(listener);
    }
}

/// Mock pixel copy answering from a separate thread
pub struct ThreadedBitmapCapture;

impl BitmapCapture for ThreadedBitmapCapture {
    fn capture(&self, view: Arc<dyn View>, listener: Box<dyn PixelCopyListener>) {
        std::thread::spawn(move || {
            let bounds = view.bounds();
            let side = |value: i64| u32::try_from(value.clamp(1, 16)).unwrap_or(1);
            listener.on_copy_success(solid_bitmap(side(bounds.width), side(bounds.height)));
        });
    }
}

pub fn solid_bitmap(width: u32, height: u32) -> Bitmap {
    Bitmap {
        width,
        height,
        pixels: [0u8, 128, 255, 255].repeat((width * height) as usize),
    }
}
