// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::image::{Bitmap, BitmapCapture, PixelCopyListener};
use super::mapper::MappingContext;
use super::view::{
    OnDrawListener, TextAttributes, UiExecutor, View, ViewBackground, Window, WindowId,
    WindowOwner,
};
use super::{AsyncJobStatusCallback, GlobalBounds, ScreenOrientation, SystemInformation};
use crate::processor::RecordedDataProcessor;
use crate::queue::{SnapshotRecordedDataQueueItem, TouchEventRecordedDataQueueItem};
use crate::rum::{RumContextProvider, SessionReplayRumContext};
use crate::time::TimeProvider;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread::{self, ThreadId};
use tokio::runtime::Handle;

#[derive(Clone)]
pub(crate) struct FakeView {
    pub id: i64,
    pub class_name: String,
    pub visible: bool,
    pub alpha: f32,
    pub bounds: GlobalBounds,
    pub background: Option<ViewBackground>,
    pub text: Option<TextAttributes>,
    pub drawable: bool,
    pub children: Vec<Arc<dyn View>>,
}

impl FakeView {
    pub fn new(id: i64, bounds: GlobalBounds) -> Self {
        Self {
            id,
            class_name: "android.view.View".to_string(),
            visible: true,
            alpha: 1.0,
            bounds,
            background: None,
            text: None,
            drawable: false,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class_name = class_name.to_string();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_drawable(mut self) -> Self {
        self.drawable = true;
        self
    }

    pub fn with_background(mut self, color: u32) -> Self {
        self.background = Some(ViewBackground {
            color,
            corner_radius: 0.0,
        });
        self
    }

    pub fn with_text(mut self, text: TextAttributes) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_children(mut self, children: Vec<FakeView>) -> Self {
        self.children = children
            .into_iter()
            .map(|child| Arc::new(child) as Arc<dyn View>)
            .collect();
        self
    }

    pub fn into_view(self) -> Arc<dyn View> {
        Arc::new(self)
    }
}

impl View for FakeView {
    fn id(&self) -> i64 {
        self.id
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn alpha(&self) -> f32 {
        self.alpha
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

#[derive(Default)]
pub(crate) struct CountingJobs {
    pub started: AtomicUsize,
    pub finished: AtomicUsize,
}

impl CountingJobs {
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

impl AsyncJobStatusCallback for CountingJobs {
    fn job_started(&self) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn job_finished(&self) {
        self.finished.fetch_add(1, Ordering::SeqCst);
    }
}

/// Completes every capture synchronously with a fixed outcome.
pub(crate) struct ImmediateCapture {
    pub outcome: Result<Bitmap, i32>,
    pub captured: Mutex<Vec<i64>>,
}

impl ImmediateCapture {
    pub fn succeeding(width: u32, height: u32) -> Self {
        Self {
            outcome: Ok(Bitmap {
                width,
                height,
                pixels: [200u8, 100, 50, 255].repeat((width * height) as usize),
            }),
            captured: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error_code: i32) -> Self {
        Self {
            outcome: Err(error_code),
            captured: Mutex::new(Vec::new()),
        }
    }
}

impl BitmapCapture for ImmediateCapture {
    fn capture(&self, view: Arc<dyn View>, listener: Box<dyn PixelCopyListener>) {
        self.captured.lock().unwrap().push(view.id());
        match &self.outcome {
            Ok(bitmap) => listener.on_copy_success(bitmap.clone()),
            Err(code) => listener.on_copy_failure(*code),
        }
    }
}

pub(crate) fn system_information(density: f32) -> SystemInformation {
    SystemInformation {
        screen_bounds: GlobalBounds::new(0, 0, 1080, 1920),
        screen_orientation: ScreenOrientation::Portrait,
        screen_density: density,
        theme_color: Some("#ffffffff".to_string()),
    }
}

pub(crate) fn mapping_context(density: f32) -> MappingContext {
    MappingContext {
        system_information: system_information(density),
    }
}

pub(crate) struct FakeWindow {
    pub id: WindowId,
    pub decor_view: Option<Arc<dyn View>>,
    pub listeners: Mutex<Vec<Arc<dyn OnDrawListener>>>,
}

impl FakeWindow {
    pub fn new(id: u64, decor_view: Arc<dyn View>) -> Arc<Self> {
        Arc::new(Self {
            id: WindowId(id),
            decor_view: Some(decor_view),
            listeners: Mutex::new(Vec::new()),
        })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    pub fn draw(&self) {
        let listeners = self.listeners.lock().unwrap().clone();
        for listener in listeners {
            listener.on_draw();
        }
    }
}

impl Window for FakeWindow {
    fn id(&self) -> WindowId {
        self.id
    }

    fn decor_view(&self) -> Option<Arc<dyn View>> {
        self.decor_view.clone()
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

type UiTask = Box<dyn FnOnce() + Send>;

/// Runs posted tasks on the runtime. Under a current-thread runtime that is the test thread.
pub(crate) struct RuntimeUiExecutor(pub Handle);

impl UiExecutor for RuntimeUiExecutor {
    fn post(&self, task: UiTask) {
        self.0.spawn(async move { task() });
    }
}

/// Holds posted tasks until the test runs them.
#[derive(Default)]
pub(crate) struct QueuedUiExecutor(Mutex<Vec<UiTask>>);

impl QueuedUiExecutor {
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn run_all(&self) {
        let tasks = std::mem::take(&mut *self.0.lock().unwrap());
        for task in tasks {
            task();
        }
    }
}

impl UiExecutor for QueuedUiExecutor {
    fn post(&self, task: UiTask) {
        self.0.lock().unwrap().push(task);
    }
}

/// A dedicated thread draining posted tasks in order, like a main looper.
pub(crate) struct UiThread {
    tx: Mutex<mpsc::Sender<UiTask>>,
    pub thread_id: ThreadId,
}

impl UiThread {
    pub fn spawn() -> Arc<Self> {
        let (tx, rx) = mpsc::channel::<UiTask>();
        let handle = thread::spawn(move || {
            for task in rx {
                task();
            }
        });
        Arc::new(Self {
            tx: Mutex::new(tx),
            thread_id: handle.thread().id(),
        })
    }

    /// Runs `f` on the UI thread after everything posted before it, and waits for it.
    pub fn run<R: Send + 'static>(&self, f: impl FnOnce() -> R + Send + 'static) -> R {
        let (tx, rx) = mpsc::channel();
        self.post(Box::new(move || {
            let _ = tx.send(f());
        }));
        rx.recv().unwrap()
    }
}

impl UiExecutor for UiThread {
    fn post(&self, task: UiTask) {
        self.tx.lock().unwrap().send(task).unwrap();
    }
}

/// Owner recording the threads system information was resolved on.
pub(crate) struct FakeOwner {
    ui_executor: Arc<dyn UiExecutor>,
    resolved_on: Mutex<Vec<ThreadId>>,
}

impl FakeOwner {
    pub fn new(ui_executor: Arc<dyn UiExecutor>) -> Self {
        Self {
            ui_executor,
            resolved_on: Mutex::new(Vec::new()),
        }
    }

    pub fn on_current_runtime() -> Self {
        Self::new(Arc::new(RuntimeUiExecutor(Handle::current())))
    }

    pub fn resolved_on(&self) -> Vec<ThreadId> {
        self.resolved_on.lock().unwrap().clone()
    }
}

impl WindowOwner for FakeOwner {
    fn resolve_system_information(&self) -> SystemInformation {
        self.resolved_on.lock().unwrap().push(thread::current().id());
        system_information(1.0)
    }

    fn ui_executor(&self) -> Arc<dyn UiExecutor> {
        self.ui_executor.clone()
    }
}

pub(crate) struct StaticRumContextProvider;

impl RumContextProvider for StaticRumContextProvider {
    fn get_rum_context(&self) -> Option<SessionReplayRumContext> {
        Some(SessionReplayRumContext::new("app", "session", "view"))
    }
}

pub(crate) struct FixedClock(pub i64);

impl TimeProvider for FixedClock {
    fn get_device_timestamp(&self) -> i64 {
        self.0
    }
}

#[derive(Default)]
pub(crate) struct CountingProcessor {
    pub snapshots: AtomicUsize,
}

impl RecordedDataProcessor for CountingProcessor {
    fn process_screen_snapshots(&self, _item: &SnapshotRecordedDataQueueItem) {
        self.snapshots.fetch_add(1, Ordering::SeqCst);
    }

    fn process_touch_events_records(&self, _item: &TouchEventRecordedDataQueueItem) {}
}
