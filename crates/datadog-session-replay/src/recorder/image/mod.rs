// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Pixel capture of views and encoding of the captured bitmaps.

mod serializer;

pub use serializer::BitmapSerializer;

use super::view::View;
use std::sync::Arc;

/// Raw RGBA8 pixels of a captured view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// One-shot completion of a pixel copy request. Exactly one method is called.
pub trait PixelCopyListener: Send {
    fn on_copy_success(self: Box<Self>, bitmap: Bitmap);
    fn on_copy_failure(self: Box<Self>, error_code: i32);
}

/// Platform pixel copy. The listener may be called from any thread, including the
/// caller's, before `capture` returns.
pub trait BitmapCapture: Send + Sync {
    fn capture(&self, view: Arc<dyn View>, listener: Box<dyn PixelCopyListener>);
}
