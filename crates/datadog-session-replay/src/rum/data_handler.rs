// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::{RumContextProvider, SessionReplayRumContext};
use crate::sync::lock;
use crate::time::TimeProvider;
use std::mem;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// A context transition captured when a queue item is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RumContextData {
    pub timestamp: i64,
    pub prev_rum_context: SessionReplayRumContext,
    pub new_rum_context: SessionReplayRumContext,
}

/// Stamps queue items with a timestamp and the context transition they belong to.
pub struct RumContextDataHandler {
    rum_context_provider: Arc<dyn RumContextProvider>,
    time_provider: Arc<dyn TimeProvider>,
    prev_rum_context: Mutex<SessionReplayRumContext>,
}

impl RumContextDataHandler {
    pub fn new(
        rum_context_provider: Arc<dyn RumContextProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            rum_context_provider,
            time_provider,
            prev_rum_context: Mutex::new(SessionReplayRumContext::default()),
        }
    }

    /// Returns the current context transition, or `None` when no valid view is active.
    ///
    /// The timestamp is read before the context so that a view change racing with this
    /// call is attributed to the later item.
    pub fn create_rum_context_data(&self) -> Option<RumContextData> {
        let timestamp = self.time_provider.get_device_timestamp();

        let new_rum_context = match self.rum_context_provider.get_rum_context() {
            Some(context) if context.is_valid() => context,
            Some(context) => {
                debug!(view_id = %context.view_id, "Dropping record: invalid RUM context");
                return None;
            }
            None => {
                debug!("Dropping record: no active RUM view");
                return None;
            }
        };

        let prev_rum_context = mem::replace(
            &mut *lock(&self.prev_rum_context),
            new_rum_context.clone(),
        );

        Some(RumContextData {
            timestamp,
            prev_rum_context,
            new_rum_context,
        })
    }

    /// Undoes the transition of `data` for an item that was never enqueued, so the next
    /// item still carries it. No-op once a later transition was recorded.
    pub fn restore(&self, data: &RumContextData) {
        let mut prev_rum_context = lock(&self.prev_rum_context);
        if *prev_rum_context == data.new_rum_context {
            *prev_rum_context = data.prev_rum_context.clone();
        }
    }
}
