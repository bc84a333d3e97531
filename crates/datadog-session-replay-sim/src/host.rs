// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Simulated host: an activity with one window, its view tree, pixel copy and storage.

use std::collections::VecDeque;
use std::mem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info};

use datadog_session_replay::{
    model::{
        Alignment, EnrichedRecord, HorizontalAlignment, MobileRecord, Padding, PointerEventType,
        PointerInteractionData, PointerType, VerticalAlignment,
    },
    processor::{RecordCallback, RecordWriter},
    recorder::{
        image::{Bitmap, BitmapCapture, PixelCopyListener},
        view::{TextAttributes, ViewBackground},
        GlobalBounds, OnDrawListener, ScreenOrientation, SystemInformation, UiExecutor, View,
        Window, WindowId, WindowOwner,
    },
    rum::{RumContextProvider, SessionReplayRumContext},
    time::{SystemTimeProvider, TimeProvider},
};

const SCREEN_WIDTH: i64 = 1080;
const SCREEN_HEIGHT: i64 = 1920;
const SCREEN_DENSITY: f32 = 3.0;

pub struct SimView {
    id: i64,
    class_name: &'static str,
    bounds: GlobalBounds,
    background: Option<u32>,
    text: Mutex<Option<String>>,
    drawable: bool,
    children: Vec<Arc<dyn View>>,
}

impl SimView {
    fn new(id: i64, class_name: &'static str, bounds: GlobalBounds) -> Self {
        Self {
            id,
            class_name,
            bounds,
            background: None,
            text: Mutex::new(None),
            drawable: false,
            children: Vec::new(),
        }
    }

    fn label(id: i64, bounds: GlobalBounds, text: &str) -> Self {
        let view = Self::new(id, "android.widget.TextView", bounds);
        view.set_text(text);
        view
    }

    fn set_text(&self, text: &str) {
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
    }
}

impl View for SimView {
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
        self.background.map(|color| ViewBackground {
            color,
            corner_radius: 12.0,
        })
    }

    fn text(&self) -> Option<TextAttributes> {
        let text = self
            .text
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()?;
        Some(TextAttributes {
            text,
            hint: None,
            color: 0xff21_2121,
            hint_color: 0x8021_2121,
            family: "sans-serif".to_string(),
            size: 48.0,
            padding: Padding {
                top: 12,
                bottom: 12,
                left: 24,
                right: 24,
            },
            alignment: Alignment {
                horizontal: HorizontalAlignment::Left,
                vertical: VerticalAlignment::Center,
            },
        })
    }

    fn has_drawable(&self) -> bool {
        self.drawable
    }

    fn children(&self) -> Vec<Arc<dyn View>> {
        self.children.clone()
    }
}

pub struct SimWindow {
    id: WindowId,
    decor_view: Arc<dyn View>,
    counter: Arc<SimView>,
    listeners: Mutex<Vec<Arc<dyn OnDrawListener>>>,
}

impl SimWindow {
    /// A checkout screen: title, cart counter, two product thumbnails and a pay button.
    pub fn checkout(id: u64) -> Arc<Self> {
        let counter = Arc::new(SimView::label(
            3,
            GlobalBounds::new(48, 300, 600, 120),
            "Items: 0",
        ));
        let thumbnail = |id: i64, x: i64| {
            let mut view = SimView::new(
                id,
                "android.widget.ImageView",
                GlobalBounds::new(x, 480, 330, 330),
            );
            view.drawable = true;
            Arc::new(view) as Arc<dyn View>
        };
        let mut pay_button = SimView::label(6, GlobalBounds::new(48, 1700, 984, 144), "Pay");
        pay_button.class_name = "android.widget.Button";
        pay_button.background = Some(0xff63_2ca6);

        let mut root = SimView::new(
            1,
            "android.widget.FrameLayout",
            GlobalBounds::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
        );
        root.background = Some(0xffff_ffff);
        let title = SimView::label(2, GlobalBounds::new(48, 120, 984, 150), "Checkout");
        root.children = vec![
            Arc::new(title) as Arc<dyn View>,
            counter.clone() as Arc<dyn View>,
            thumbnail(4, 48),
            thumbnail(5, 420),
            Arc::new(pay_button) as Arc<dyn View>,
        ];

        Arc::new(Self {
            id: WindowId(id),
            decor_view: Arc::new(root),
            counter,
            listeners: Mutex::new(Vec::new()),
        })
    }

    pub fn advance_frame(&self, frame: u64) {
        if frame % 10 == 0 {
            self.counter.set_text(&format!("Items: {}", frame / 10));
        }
    }

    pub fn draw(&self) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener.on_draw();
        }
    }

    pub fn tap(&self, frame: u64) -> Vec<MobileRecord> {
        let timestamp = SystemTimeProvider.get_device_timestamp();
        let x = 100 + (frame % 800) as i64;
        [PointerEventType::Down, PointerEventType::Up]
            .into_iter()
            .map(|pointer_event_type| MobileRecord::IncrementalSnapshot {
                timestamp,
                data: PointerInteractionData {
                    pointer_event_type,
                    pointer_type: PointerType::Touch,
                    pointer_id: 0,
                    x,
                    y: 590,
                },
            })
            .collect()
    }
}

impl Window for SimWindow {
    fn id(&self) -> WindowId {
        self.id
    }

    fn decor_view(&self) -> Option<Arc<dyn View>> {
        Some(self.decor_view.clone())
    }

    fn add_on_draw_listener(&self, listener: Arc<dyn OnDrawListener>) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    fn remove_on_draw_listener(&self, listener: &Arc<dyn OnDrawListener>) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|registered| !Arc::ptr_eq(registered, listener));
    }
}

type UiTask = Box<dyn FnOnce() + Send>;

/// Main thread task queue, drained once per frame by the frame loop.
#[derive(Default)]
pub struct SimLooper {
    tasks: Mutex<VecDeque<UiTask>>,
}

impl SimLooper {
    pub fn run_pending(&self) -> usize {
        let tasks = mem::take(&mut *self.tasks.lock().unwrap_or_else(PoisonError::into_inner));
        let count = tasks.len();
        for task in tasks {
            task();
        }
        count
    }
}

impl UiExecutor for SimLooper {
    fn post(&self, task: UiTask) {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(task);
    }
}

pub struct SimActivity {
    looper: Arc<SimLooper>,
}

impl SimActivity {
    pub fn new(looper: Arc<SimLooper>) -> Self {
        Self { looper }
    }
}

impl WindowOwner for SimActivity {
    fn ui_executor(&self) -> Arc<dyn UiExecutor> {
        self.looper.clone()
    }

    fn resolve_system_information(&self) -> SystemInformation {
        SystemInformation {
            screen_bounds: GlobalBounds::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
            screen_orientation: ScreenOrientation::Portrait,
            screen_density: SCREEN_DENSITY,
            theme_color: Some("#ffffffff".to_string()),
        }
    }
}

pub struct SimRumContextProvider {
    application_id: String,
    views_started: AtomicUsize,
    current: Mutex<Option<SessionReplayRumContext>>,
}

impl SimRumContextProvider {
    pub fn new(application_id: &str) -> Self {
        Self {
            application_id: application_id.to_string(),
            views_started: AtomicUsize::new(0),
            current: Mutex::new(None),
        }
    }

    pub fn start_view(&self, name: &str) {
        let index = self.views_started.fetch_add(1, Ordering::Relaxed);
        let context = SessionReplayRumContext::new(
            self.application_id.clone(),
            "sim-session",
            format!("{name}-{index}"),
        );
        info!(view_id = %context.view_id, "RUM view started");
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(context);
    }
}

impl RumContextProvider for SimRumContextProvider {
    fn get_rum_context(&self) -> Option<SessionReplayRumContext> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Answers pixel copies from a worker thread after `delay`, like the platform does.
pub struct SimBitmapCapture {
    delay: Duration,
}

impl SimBitmapCapture {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl BitmapCapture for SimBitmapCapture {
    fn capture(&self, view: Arc<dyn View>, listener: Box<dyn PixelCopyListener>) {
        let delay = self.delay;
        thread::spawn(move || {
            thread::sleep(delay);
            let bounds = view.bounds();
            let side = |value: i64| (value / 8).clamp(1, 64) as u32;
            let (width, height) = (side(bounds.width), side(bounds.height));
            let pixels = (0..width * height)
                .flat_map(|index| {
                    let shade = (index % 256) as u8;
                    [shade, 255 - shade, 128, 255]
                })
                .collect();
            listener.on_copy_success(Bitmap {
                width,
                height,
                pixels,
            });
        });
    }
}

#[derive(Default)]
pub struct LoggingRecordWriter {
    written: AtomicUsize,
}

impl RecordWriter for LoggingRecordWriter {
    fn write(&self, record: EnrichedRecord) {
        match record.to_json() {
            Ok(json) => {
                let total = self.written.fetch_add(1, Ordering::Relaxed) + 1;
                let types: Vec<u8> = record.records.iter().map(MobileRecord::record_type).collect();
                info!(
                    view_id = %record.view_id,
                    ?types,
                    bytes = json.len(),
                    total,
                    "Wrote records"
                );
            }
            Err(e) => error!("Failed to serialize records: {e}"),
        }
    }
}

pub struct LoggingRecordCallback;

impl RecordCallback for LoggingRecordCallback {
    fn on_record_for_view_sent(&self, view_id: &str) {
        debug!(view_id, "Records sent for view");
    }
}
