// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Serializable replay model: wireframes and the records wrapping them.

mod records;
mod wireframe;

pub use records::{
    EnrichedRecord, FocusData, MetaData, MobileRecord, PointerEventType, PointerInteractionData,
    PointerType,
};
pub use wireframe::{
    Alignment, EncodedImage, HorizontalAlignment, ImageContent, ImageWireframe, Padding,
    ShapeBorder, ShapeStyle, ShapeWireframe, TextPosition, TextStyle, TextWireframe,
    VerticalAlignment, Wireframe,
};
