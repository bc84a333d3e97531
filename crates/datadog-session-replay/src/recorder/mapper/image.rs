// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::view::{shape_style, shape_wireframe};
use super::{MappingContext, WireframeMapper};
use crate::constants::IMAGE_SIZE_LIMIT_DP;
use crate::model::{ImageContent, ImageWireframe, Wireframe};
use crate::recorder::image::{Bitmap, BitmapCapture, BitmapSerializer, PixelCopyListener};
use crate::recorder::view::View;
use crate::recorder::AsyncJobStatusCallback;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::debug;

/// Maps views painting a drawable to an image wireframe resolved by a pixel copy.
///
/// The wireframe is emitted right away with an empty payload. The copy and the encoding
/// run off the calling thread and fill it in later.
pub struct ImageViewMapper {
    bitmap_capture: Arc<dyn BitmapCapture>,
    serializer: Arc<BitmapSerializer>,
    runtime: Handle,
    image_size_limit_dp: i64,
}

impl ImageViewMapper {
    pub fn new(
        bitmap_capture: Arc<dyn BitmapCapture>,
        serializer: Arc<BitmapSerializer>,
        runtime: Handle,
    ) -> Self {
        Self {
            bitmap_capture,
            serializer,
            runtime,
            image_size_limit_dp: IMAGE_SIZE_LIMIT_DP,
        }
    }

    #[must_use]
    pub fn with_image_size_limit_dp(mut self, image_size_limit_dp: i64) -> Self {
        self.image_size_limit_dp = image_size_limit_dp;
        self
    }
}

impl WireframeMapper for ImageViewMapper {
    fn map(
        &self,
        view: &Arc<dyn View>,
        mapping_context: &MappingContext,
        async_jobs: &Arc<dyn AsyncJobStatusCallback>,
    ) -> Vec<Wireframe> {
        let density = mapping_context.system_information.screen_density;
        let bounds = view.bounds().density_normalized(density);
        let capturable = view.has_drawable()
            && bounds.width > 0
            && bounds.height > 0
            && bounds.width <= self.image_size_limit_dp
            && bounds.height <= self.image_size_limit_dp;
        if !capturable {
            return vec![Wireframe::Shape(shape_wireframe(
                view.as_ref(),
                mapping_context,
            ))];
        }

        let content = ImageContent::placeholder();
        let wireframe = Wireframe::Image(ImageWireframe {
            id: view.id(),
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            shape_style: shape_style(view.as_ref(), density),
            border: None,
            content: content.clone(),
        });

        async_jobs.job_started();
        self.bitmap_capture.capture(
            view.clone(),
            Box::new(ImageCaptureListener {
                view_id: view.id(),
                content,
                serializer: self.serializer.clone(),
                runtime: self.runtime.clone(),
                async_jobs: async_jobs.clone(),
            }),
        );

        vec![wireframe]
    }
}

struct ImageCaptureListener {
    view_id: i64,
    content: ImageContent,
    serializer: Arc<BitmapSerializer>,
    runtime: Handle,
    async_jobs: Arc<dyn AsyncJobStatusCallback>,
}

impl PixelCopyListener for ImageCaptureListener {
    fn on_copy_success(self: Box<Self>, bitmap: Bitmap) {
        let Self {
            view_id,
            content,
            serializer,
            runtime,
            async_jobs,
        } = *self;

        // Encoding is CPU bound and must not run on the platform callback thread.
        runtime.spawn_blocking(move || {
            match serializer.serialize(bitmap) {
                Ok(image) => {
                    content.resolve(image);
                }
                Err(e) => {
                    debug!(view_id, "Keeping empty image placeholder: {e}");
                }
            }
            async_jobs.job_finished();
        });
    }

    fn on_copy_failure(self: Box<Self>, error_code: i32) {
        debug!(
            view_id = self.view_id,
            error_code, "Pixel copy failed, keeping empty image placeholder"
        );
        self.async_jobs.job_finished();
    }
}
