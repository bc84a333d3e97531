// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::GlobalBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenOrientation {
    Portrait,
    Landscape,
    #[default]
    Undefined,
}

/// Per snapshot facts about the screen, captured once and never mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SystemInformation {
    /// Screen bounds, in pixels
    pub screen_bounds: GlobalBounds,
    pub screen_orientation: ScreenOrientation,
    /// Pixels per density independent pixel
    pub screen_density: f32,
    /// Window background color of the current theme, as `#rrggbbaa`
    pub theme_color: Option<String>,
}
