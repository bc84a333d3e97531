// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Per-widget conversion of live views into wireframes.

mod image;
mod text;
mod view;

pub use image::ImageViewMapper;
pub use text::TextViewMapper;
pub use view::ViewWireframeMapper;

use super::view::View;
use super::{AsyncJobStatusCallback, SystemInformation};
use crate::model::Wireframe;
use hashbrown::HashMap;
use std::sync::Arc;

const TEXT_VIEW_CLASSES: [&str; 4] = [
    "android.widget.TextView",
    "android.widget.Button",
    "android.widget.EditText",
    "androidx.appcompat.widget.AppCompatTextView",
];

const IMAGE_VIEW_CLASSES: [&str; 3] = [
    "android.widget.ImageView",
    "android.widget.ImageButton",
    "androidx.appcompat.widget.AppCompatImageView",
];

/// Facts shared by every mapper during one tree walk.
#[derive(Debug, Clone)]
pub struct MappingContext {
    pub system_information: SystemInformation,
}

/// Converts one view, without its children, into wireframes in paint order.
///
/// Mappers that need asynchronous work call `job_started` before scheduling it and make
/// sure `job_finished` follows, on success and on failure.
pub trait WireframeMapper: Send + Sync {
    fn map(
        &self,
        view: &Arc<dyn View>,
        mapping_context: &MappingContext,
        async_jobs: &Arc<dyn AsyncJobStatusCallback>,
    ) -> Vec<Wireframe>;
}

/// Mapper lookup by view class name.
pub struct MapperRegistry {
    mappers: HashMap<String, Arc<dyn WireframeMapper>>,
    default_mapper: Arc<dyn WireframeMapper>,
}

impl Default for MapperRegistry {
    fn default() -> Self {
        Self::new(Arc::new(ViewWireframeMapper))
    }
}

impl MapperRegistry {
    pub fn new(default_mapper: Arc<dyn WireframeMapper>) -> Self {
        Self {
            mappers: HashMap::new(),
            default_mapper,
        }
    }

    #[must_use]
    pub fn with_mapper(
        mut self,
        class_name: impl Into<String>,
        mapper: Arc<dyn WireframeMapper>,
    ) -> Self {
        self.mappers.insert(class_name.into(), mapper);
        self
    }

    /// Default registry: text widgets, image widgets and a shape for everything else.
    pub fn with_builtin_mappers(image_mapper: Arc<ImageViewMapper>) -> Self {
        let text_mapper: Arc<dyn WireframeMapper> = Arc::new(TextViewMapper);
        let mut registry = Self::default();
        for class_name in TEXT_VIEW_CLASSES {
            registry = registry.with_mapper(class_name, text_mapper.clone());
        }
        for class_name in IMAGE_VIEW_CLASSES {
            registry = registry.with_mapper(class_name, image_mapper.clone());
        }
        registry
    }

    pub fn mapper_for(&self, class_name: &str) -> &Arc<dyn WireframeMapper> {
        self.mappers.get(class_name).unwrap_or(&self.default_mapper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopMapper;

    impl WireframeMapper for NoopMapper {
        fn map(
            &self,
            _view: &Arc<dyn View>,
            _mapping_context: &MappingContext,
            _async_jobs: &Arc<dyn AsyncJobStatusCallback>,
        ) -> Vec<Wireframe> {
            Vec::new()
        }
    }

    #[test]
    fn test_registry_falls_back_to_default() {
        let noop: Arc<dyn WireframeMapper> = Arc::new(NoopMapper);
        let registry = MapperRegistry::default().with_mapper("android.widget.Space", noop.clone());

        assert!(Arc::ptr_eq(
            registry.mapper_for("android.widget.Space"),
            &noop
        ));
        assert!(!Arc::ptr_eq(
            registry.mapper_for("android.widget.FrameLayout"),
            &noop
        ));
    }

    #[tokio::test]
    async fn test_builtin_mappers() {
        let image_mapper = Arc::new(ImageViewMapper::new(
            Arc::new(crate::recorder::test_utils::ImmediateCapture::failing(1)),
            Arc::new(crate::recorder::image::BitmapSerializer::default()),
            tokio::runtime::Handle::current(),
        ));
        let as_dyn: Arc<dyn WireframeMapper> = image_mapper.clone();
        let registry = MapperRegistry::with_builtin_mappers(image_mapper);

        assert!(Arc::ptr_eq(
            registry.mapper_for("android.widget.ImageButton"),
            &as_dyn
        ));
        assert!(!Arc::ptr_eq(
            registry.mapper_for("android.widget.Button"),
            &as_dyn
        ));
    }
}
