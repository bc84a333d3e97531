// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! RUM context tracking.

mod context;
mod data_handler;

pub use context::{RumContextProvider, SessionReplayRumContext};
pub use data_handler::{RumContextData, RumContextDataHandler};
