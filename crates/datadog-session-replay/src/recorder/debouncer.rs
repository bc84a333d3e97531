// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::view::UiExecutor;
use crate::sync::lock;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[derive(Default)]
struct DebounceState {
    /// First request since the last execution.
    burst_started: Option<Instant>,
    pending: Option<CancellationToken>,
}

/// Trailing-edge debouncer with a maximum delay.
///
/// Each request replaces the pending one, which runs once `debounce_time` passes without
/// a new request. When the current burst of requests started at least
/// `max_record_delay` ago, the request runs right away instead, so a continuous stream of
/// requests still executes periodically.
///
/// `debounce` must be called on the UI thread. Only the timer runs on the tokio runtime:
/// expired requests are posted back to the UI executor, so every execution happens on the
/// UI thread, one at a time.
pub struct Debouncer {
    runtime: Handle,
    ui_executor: Arc<dyn UiExecutor>,
    debounce_time: Duration,
    max_record_delay: Duration,
    state: Arc<Mutex<DebounceState>>,
}

impl Debouncer {
    pub fn new(
        runtime: Handle,
        ui_executor: Arc<dyn UiExecutor>,
        debounce_time: Duration,
        max_record_delay: Duration,
    ) -> Self {
        Self {
            runtime,
            ui_executor,
            debounce_time,
            max_record_delay,
            state: Arc::new(Mutex::new(DebounceState::default())),
        }
    }

    pub fn debounce<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let now = Instant::now();
        let mut state = lock(&self.state);
        if let Some(pending) = state.pending.take() {
            pending.cancel();
        }

        let burst_started = *state.burst_started.get_or_insert(now);
        if now.duration_since(burst_started) >= self.max_record_delay {
            state.burst_started = None;
            drop(state);
            task();
            return;
        }

        let token = CancellationToken::new();
        state.pending = Some(token.clone());
        drop(state);

        let shared = self.state.clone();
        let ui_executor = self.ui_executor.clone();
        let debounce_time = self.debounce_time;
        let cancelled = token.clone();
        self.runtime.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(debounce_time) => {
                    ui_executor.post(Box::new(move || {
                        {
                            let mut state = lock(&shared);
                            // Replaced while waiting for the UI thread.
                            if token.is_cancelled() {
                                return;
                            }
                            state.pending = None;
                            state.burst_started = None;
                        }
                        task();
                    }));
                }
            }
        });
    }

    /// Drops the pending request, if any, and ends the current burst.
    pub fn cancel_pending(&self) {
        let mut state = lock(&self.state);
        state.burst_started = None;
        if let Some(pending) = state.pending.take() {
            pending.cancel();
        }
    }
}
