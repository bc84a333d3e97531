// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::view::{shape_style, shape_wireframe};
use super::{MappingContext, WireframeMapper};
use crate::model::{Padding, TextPosition, TextStyle, TextWireframe, Wireframe};
use crate::recorder::utils::{color_as_hex_string, density_normalized};
use crate::recorder::view::View;
use crate::recorder::AsyncJobStatusCallback;
use std::sync::Arc;

/// Maps text-rendering views. Empty text falls back to the hint.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextViewMapper;

impl WireframeMapper for TextViewMapper {
    fn map(
        &self,
        view: &Arc<dyn View>,
        mapping_context: &MappingContext,
        _async_jobs: &Arc<dyn AsyncJobStatusCallback>,
    ) -> Vec<Wireframe> {
        let Some(attributes) = view.text() else {
            return vec![Wireframe::Shape(shape_wireframe(
                view.as_ref(),
                mapping_context,
            ))];
        };

        let density = mapping_context.system_information.screen_density;
        let bounds = view.bounds().density_normalized(density);
        let (text, color) = match attributes.hint {
            Some(hint) if attributes.text.is_empty() => (hint, attributes.hint_color),
            _ => (attributes.text, attributes.color),
        };
        let padding = Padding {
            top: density_normalized(attributes.padding.top, density),
            bottom: density_normalized(attributes.padding.bottom, density),
            left: density_normalized(attributes.padding.left, density),
            right: density_normalized(attributes.padding.right, density),
        };

        vec![Wireframe::Text(TextWireframe {
            id: view.id(),
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            shape_style: shape_style(view.as_ref(), density),
            border: None,
            text,
            text_style: TextStyle {
                family: attributes.family,
                size: density_normalized(attributes.size as i64, density),
                color: color_as_hex_string(color),
            },
            text_position: Some(TextPosition {
                padding: Some(padding),
                alignment: Some(attributes.alignment),
            }),
        })]
    }
}
