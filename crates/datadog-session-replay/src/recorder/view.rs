// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Capabilities the recorder needs from the host UI toolkit.

use super::{GlobalBounds, SystemInformation};
use crate::model::{Alignment, Padding};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBackground {
    /// ARGB color
    pub color: u32,
    /// Corner radius, in pixels
    pub corner_radius: f32,
}

/// Text attributes of a text-rendering view.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAttributes {
    pub text: String,
    pub hint: Option<String>,
    /// ARGB colors
    pub color: u32,
    pub hint_color: u32,
    pub family: String,
    /// Font size, in pixels
    pub size: f32,
    /// Padding, in pixels
    pub padding: Padding,
    pub alignment: Alignment,
}

/// A live UI element.
pub trait View: Send + Sync {
    fn id(&self) -> i64;
    fn class_name(&self) -> &str;
    fn is_visible(&self) -> bool;
    fn alpha(&self) -> f32;
    /// Bounds on screen, in pixels
    fn bounds(&self) -> GlobalBounds;
    fn background(&self) -> Option<ViewBackground>;
    fn text(&self) -> Option<TextAttributes>;
    /// Whether the view paints a drawable that needs a pixel copy to be recorded
    fn has_drawable(&self) -> bool;
    fn children(&self) -> Vec<Arc<dyn View>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

pub trait OnDrawListener: Send + Sync {
    fn on_draw(&self);
}

/// A top-level window and its view tree.
///
/// Listeners are compared by identity: `remove_on_draw_listener` removes the entry for
/// which `Arc::ptr_eq` holds.
pub trait Window: Send + Sync {
    fn id(&self) -> WindowId;
    fn decor_view(&self) -> Option<Arc<dyn View>>;
    fn add_on_draw_listener(&self, listener: Arc<dyn OnDrawListener>);
    fn remove_on_draw_listener(&self, listener: &Arc<dyn OnDrawListener>);
}

/// Queue of the thread that owns the view tree, such as a main looper.
///
/// Posted tasks run in posting order. Tasks posted after the thread is gone may be
/// dropped without running.
pub trait UiExecutor: Send + Sync {
    fn post(&self, task: Box<dyn FnOnce() + Send>);
}

/// The screen owning a set of windows.
pub trait WindowOwner: Send + Sync {
    fn resolve_system_information(&self) -> SystemInformation;
    /// Executor of the thread the windows are drawn on. Debounced snapshots run there.
    fn ui_executor(&self) -> Arc<dyn UiExecutor>;
}
