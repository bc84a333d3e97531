// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::sync::{Arc, OnceLock};

/// One rendered rectangle of the screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Wireframe {
    Shape(ShapeWireframe),
    Text(TextWireframe),
    Image(ImageWireframe),
}

impl Wireframe {
    pub fn id(&self) -> i64 {
        match self {
            Wireframe::Shape(shape) => shape.id,
            Wireframe::Text(text) => text.id,
            Wireframe::Image(image) => image.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeBorder {
    pub color: String,
    pub width: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeWireframe {
    pub id: i64,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_style: Option<ShapeStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<ShapeBorder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    pub family: String,
    pub size: i64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Padding {
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    Top,
    Bottom,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextPosition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextWireframe {
    pub id: i64,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_style: Option<ShapeStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<ShapeBorder>,
    pub text: String,
    pub text_style: TextStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_position: Option<TextPosition>,
}

/// Encoded image payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub base64: String,
    pub mime_type: String,
}

/// Write-once image slot shared by every clone of an image wireframe.
///
/// The slot is resolved at most once, from the thread that finished encoding. Readers
/// only look at it after the owning queue item reported ready, which happens after the
/// resolution.
#[derive(Debug, Clone, Default)]
pub struct ImageContent(Arc<OnceLock<EncodedImage>>);

impl ImageContent {
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Fills the slot. Returns `false` if it was already resolved.
    pub fn resolve(&self, image: EncodedImage) -> bool {
        self.0.set(image).is_ok()
    }

    pub fn resolved(&self) -> Option<&EncodedImage> {
        self.0.get()
    }

    pub fn is_empty(&self) -> bool {
        self.0.get().is_none()
    }
}

impl PartialEq for ImageContent {
    fn eq(&self, other: &Self) -> bool {
        self.resolved() == other.resolved()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageWireframe {
    pub id: i64,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub shape_style: Option<ShapeStyle>,
    pub border: Option<ShapeBorder>,
    pub content: ImageContent,
}

impl Serialize for ImageWireframe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let optional = usize::from(self.shape_style.is_some()) + usize::from(self.border.is_some());
        let mut state = serializer.serialize_struct("ImageWireframe", 8 + optional)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        if let Some(shape_style) = &self.shape_style {
            state.serialize_field("shapeStyle", shape_style)?;
        }
        if let Some(border) = &self.border {
            state.serialize_field("border", border)?;
        }
        match self.content.resolved() {
            Some(image) => {
                state.serialize_field("base64", &image.base64)?;
                state.serialize_field("mimeType", &image.mime_type)?;
                state.serialize_field("isEmpty", &false)?;
            }
            None => {
                state.serialize_field("base64", "")?;
                state.serialize_field("mimeType", "")?;
                state.serialize_field("isEmpty", &true)?;
            }
        }
        state.end()
    }
}
