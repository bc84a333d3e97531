// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::debouncer::Debouncer;
use super::listener::WindowsOnDrawListener;
use super::snapshot_producer::SnapshotProducer;
use super::view::{OnDrawListener, Window, WindowId, WindowOwner};
use crate::queue::RecordedDataQueueHandler;
use crate::sync::lock;
use hashbrown::HashMap;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tracing::debug;

struct Registration {
    window: Weak<dyn Window>,
    listener: Arc<WindowsOnDrawListener>,
    on_draw: Arc<dyn OnDrawListener>,
}

/// Registers debounced draw listeners on windows.
///
/// Keeps an explicit window id to listener association, cleared when interception
/// stops. Windows are only referenced weakly.
pub struct ViewOnDrawInterceptor {
    handler: RecordedDataQueueHandler,
    producer: Arc<SnapshotProducer>,
    runtime: tokio::runtime::Handle,
    debounce_time: Duration,
    max_record_delay: Duration,
    registrations: Mutex<HashMap<WindowId, Registration>>,
}

impl ViewOnDrawInterceptor {
    pub fn new(
        handler: RecordedDataQueueHandler,
        producer: Arc<SnapshotProducer>,
        runtime: tokio::runtime::Handle,
        debounce_time: Duration,
        max_record_delay: Duration,
    ) -> Self {
        Self {
            handler,
            producer,
            runtime,
            debounce_time,
            max_record_delay,
            registrations: Mutex::new(HashMap::new()),
        }
    }

    /// Registers one listener on all `windows`, replacing earlier registrations of the
    /// same windows, and takes a first snapshot right away.
    pub fn intercept(&self, windows: &[Arc<dyn Window>], owner: &Arc<dyn WindowOwner>) {
        self.stop_intercepting(windows);
        if windows.is_empty() {
            return;
        }

        let listener = Arc::new(WindowsOnDrawListener::new(
            owner,
            windows,
            self.handler.clone(),
            self.producer.clone(),
            Debouncer::new(
                self.runtime.clone(),
                owner.ui_executor(),
                self.debounce_time,
                self.max_record_delay,
            ),
        ));
        let on_draw: Arc<dyn OnDrawListener> = listener.clone();

        {
            let mut registrations = lock(&self.registrations);
            for window in windows {
                window.add_on_draw_listener(on_draw.clone());
                registrations.insert(
                    window.id(),
                    Registration {
                        window: Arc::downgrade(window),
                        listener: listener.clone(),
                        on_draw: on_draw.clone(),
                    },
                );
            }
        }
        debug!(windows = windows.len(), "Intercepting window draws");

        listener.take_snapshot_now();
    }

    pub fn stop_intercepting(&self, windows: &[Arc<dyn Window>]) {
        let mut orphaned = Vec::new();
        {
            let mut registrations = lock(&self.registrations);
            for window in windows {
                let Some(registration) = registrations.remove(&window.id()) else {
                    continue;
                };
                window.remove_on_draw_listener(&registration.on_draw);
                let still_used = registrations
                    .values()
                    .any(|other| Arc::ptr_eq(&other.listener, &registration.listener));
                if !still_used {
                    orphaned.push(registration.listener);
                }
            }
        }

        for listener in orphaned {
            listener.stop();
        }
    }

    pub fn stop_intercepting_all(&self) {
        let registrations: Vec<Registration> = lock(&self.registrations)
            .drain()
            .map(|(_, registration)| registration)
            .collect();

        for registration in registrations {
            if let Some(window) = registration.window.upgrade() {
                window.remove_on_draw_listener(&registration.on_draw);
            }
            registration.listener.stop();
        }
    }

    pub fn intercepted_window_count(&self) -> usize {
        lock(&self.registrations).len()
    }
}
