// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::constants::NULL_UUID;
use serde::Serialize;

/// The (application, session, view) triple records are attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionReplayRumContext {
    pub application_id: String,
    pub session_id: String,
    pub view_id: String,
}

impl Default for SessionReplayRumContext {
    fn default() -> Self {
        Self {
            application_id: NULL_UUID.to_string(),
            session_id: NULL_UUID.to_string(),
            view_id: NULL_UUID.to_string(),
        }
    }
}

impl SessionReplayRumContext {
    pub fn new(
        application_id: impl Into<String>,
        session_id: impl Into<String>,
        view_id: impl Into<String>,
    ) -> Self {
        Self {
            application_id: application_id.into(),
            session_id: session_id.into(),
            view_id: view_id.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        [&self.application_id, &self.session_id, &self.view_id]
            .iter()
            .all(|id| !id.is_empty() && id.as_str() != NULL_UUID)
    }
}

/// Supplies the currently active RUM context, if any.
pub trait RumContextProvider: Send + Sync {
    fn get_rum_context(&self) -> Option<SessionReplayRumContext>;
}
