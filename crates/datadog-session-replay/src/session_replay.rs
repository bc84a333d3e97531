// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Entry point wiring the recorder, the queue worker and the processor together.

use crate::config::SessionReplayConfig;
use crate::errors::{ConfigError, DrainError};
use crate::model::MobileRecord;
use crate::processor::{RecordCallback, RecordWriter, SnapshotProcessor};
use crate::queue::{DrainOutcome, RecordedDataQueueHandler, RecordedDataQueueService};
use crate::recorder::image::{BitmapCapture, BitmapSerializer};
use crate::recorder::mapper::{ImageViewMapper, MapperRegistry};
use crate::recorder::{SnapshotProducer, ViewOnDrawInterceptor, Window, WindowOwner};
use crate::rum::{RumContextDataHandler, RumContextProvider};
use crate::time::TimeProvider;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Host services the recorder depends on.
pub struct SessionReplayCollaborators {
    pub rum_context_provider: Arc<dyn RumContextProvider>,
    pub time_provider: Arc<dyn TimeProvider>,
    pub record_writer: Arc<dyn RecordWriter>,
    pub record_callback: Arc<dyn RecordCallback>,
    pub bitmap_capture: Arc<dyn BitmapCapture>,
}

pub struct SessionReplay {
    handler: RecordedDataQueueHandler,
    interceptor: ViewOnDrawInterceptor,
    service_task: JoinHandle<()>,
}

impl SessionReplay {
    /// Validates `config` and spawns the queue worker on `runtime`.
    pub fn start(
        config: SessionReplayConfig,
        collaborators: SessionReplayCollaborators,
        runtime: Handle,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let SessionReplayCollaborators {
            rum_context_provider,
            time_provider,
            record_writer,
            record_callback,
            bitmap_capture,
        } = collaborators;

        let processor = Arc::new(SnapshotProcessor::new(record_writer, record_callback));
        let rum_context_data_handler = Arc::new(RumContextDataHandler::new(
            rum_context_provider,
            time_provider.clone(),
        ));
        let (service, handler) = RecordedDataQueueService::new(
            &config,
            processor,
            rum_context_data_handler,
            time_provider,
        );

        let image_mapper = ImageViewMapper::new(
            bitmap_capture,
            Arc::new(BitmapSerializer::new(config.bitmap_size_limit_bytes)),
            runtime.clone(),
        )
        .with_image_size_limit_dp(config.image_size_limit_dp);
        let producer = Arc::new(SnapshotProducer::new(
            MapperRegistry::with_builtin_mappers(Arc::new(image_mapper)),
        ));
        let interceptor = ViewOnDrawInterceptor::new(
            handler.clone(),
            producer,
            runtime.clone(),
            config.debounce,
            config.max_record_delay,
        );

        let service_task = runtime.spawn(service.run());
        debug!("Session replay started");

        Ok(Self {
            handler,
            interceptor,
            service_task,
        })
    }

    pub fn start_recording(&self, windows: &[Arc<dyn Window>], owner: &Arc<dyn WindowOwner>) {
        self.interceptor.intercept(windows, owner);
    }

    pub fn stop_recording(&self, windows: &[Arc<dyn Window>]) {
        self.interceptor.stop_intercepting(windows);
    }

    /// Enqueues a batch of pointer interactions. Returns `false` when it was dropped.
    pub fn record_touch_events(&self, pointer_interactions: Vec<MobileRecord>) -> bool {
        if self
            .handler
            .add_touch_event_item(pointer_interactions)
            .is_none()
        {
            return false;
        }
        self.handler.try_to_consume_items();
        true
    }

    pub async fn flush(&self) -> Result<DrainOutcome, DrainError> {
        self.handler.flush().await
    }

    /// Detaches every window, drains what is ready and stops the worker.
    pub async fn stop(self) -> Result<(), DrainError> {
        self.interceptor.stop_intercepting_all();
        let outcome = self.handler.flush().await?;
        debug!(
            processed = outcome.processed,
            discarded = outcome.discarded,
            "Final drain before stopping"
        );
        self.handler.shutdown()?;

        if let Err(e) = self.service_task.await {
            error!("Recorded data queue service task failed: {e}");
        }
        debug!("Session replay stopped");
        Ok(())
    }
}
