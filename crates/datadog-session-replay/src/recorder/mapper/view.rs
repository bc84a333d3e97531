// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::{MappingContext, WireframeMapper};
use crate::model::{ShapeStyle, ShapeWireframe, Wireframe};
use crate::recorder::utils::{color_as_hex_string, density_normalized};
use crate::recorder::view::View;
use crate::recorder::AsyncJobStatusCallback;
use std::sync::Arc;

/// Maps any view to a shape drawn from its bounds and background.
#[derive(Debug, Default, Clone, Copy)]
pub struct ViewWireframeMapper;

impl WireframeMapper for ViewWireframeMapper {
    fn map(
        &self,
        view: &Arc<dyn View>,
        mapping_context: &MappingContext,
        _async_jobs: &Arc<dyn AsyncJobStatusCallback>,
    ) -> Vec<Wireframe> {
        vec![Wireframe::Shape(shape_wireframe(view.as_ref(), mapping_context))]
    }
}

pub(crate) fn shape_style(view: &dyn View, density: f32) -> Option<ShapeStyle> {
    view.background().map(|background| ShapeStyle {
        background_color: Some(color_as_hex_string(background.color)),
        opacity: Some(view.alpha()),
        corner_radius: Some(density_normalized(
            background.corner_radius as i64,
            density,
        )),
    })
}

pub(crate) fn shape_wireframe(view: &dyn View, mapping_context: &MappingContext) -> ShapeWireframe {
    let density = mapping_context.system_information.screen_density;
    let bounds = view.bounds().density_normalized(density);
    ShapeWireframe {
        id: view.id(),
        x: bounds.x,
        y: bounds.y,
        width: bounds.width,
        height: bounds.height,
        shape_style: shape_style(view, density),
        border: None,
    }
}
