// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Position and size of a view on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobalBounds {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl GlobalBounds {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Converts pixel bounds to density independent pixels.
    pub fn density_normalized(&self, density: f32) -> Self {
        Self {
            x: density_normalized(self.x, density),
            y: density_normalized(self.y, density),
            width: density_normalized(self.width, density),
            height: density_normalized(self.height, density),
        }
    }
}

/// Divides a pixel value by the screen density. A non-positive density leaves it as is.
pub fn density_normalized(value: i64, density: f32) -> i64 {
    if density <= 0.0 {
        return value;
    }
    (value as f64 / f64::from(density)) as i64
}

/// Formats an ARGB color as `#rrggbbaa`.
pub fn color_as_hex_string(argb: u32) -> String {
    let alpha = argb >> 24;
    let rgb = argb & 0x00ff_ffff;
    format!("#{rgb:06x}{alpha:02x}")
}
