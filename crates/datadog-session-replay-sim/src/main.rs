// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

mod host;

use std::env;
use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use datadog_session_replay::{
    config::SessionReplayConfig,
    logger::Formatter,
    recorder::{Window, WindowOwner},
    session_replay::{SessionReplay, SessionReplayCollaborators},
    time::SystemTimeProvider,
};

use host::{
    LoggingRecordCallback, LoggingRecordWriter, SimActivity, SimBitmapCapture, SimLooper,
    SimRumContextProvider, SimWindow,
};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const DEFAULT_DURATION_MS: u64 = 3_000;
const TOUCH_EVERY_FRAMES: u64 = 30;
const DEFAULT_LOG_LEVEL: &str = "info";

fn env_filter(log_level: &str) -> EnvFilter {
    match EnvFilter::try_new(log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Invalid log level '{log_level}': {e}");
            EnvFilter::new(DEFAULT_LOG_LEVEL)
        }
    }
}

#[tokio::main]
pub async fn main() {
    let config = SessionReplayConfig::from_env();

    let log_level = config
        .as_ref()
        .map(|config| config.log_level.clone())
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter(&log_level))
        .event_format(Formatter)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Setting default subscriber failed: {e}");
        return;
    }

    debug!("Logging subsystem enabled");

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Error loading configuration: {e}");
            return;
        }
    };
    let duration = Duration::from_millis(
        env::var("DD_SIM_DURATION_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DURATION_MS),
    );

    let rum_context_provider = Arc::new(SimRumContextProvider::new("sim-application"));
    let collaborators = SessionReplayCollaborators {
        rum_context_provider: rum_context_provider.clone(),
        time_provider: Arc::new(SystemTimeProvider),
        record_writer: Arc::new(LoggingRecordWriter::default()),
        record_callback: Arc::new(LoggingRecordCallback),
        bitmap_capture: Arc::new(SimBitmapCapture::new(Duration::from_millis(20))),
    };
    let session_replay = match SessionReplay::start(
        config,
        collaborators,
        tokio::runtime::Handle::current(),
    ) {
        Ok(session_replay) => session_replay,
        Err(e) => {
            error!("Error starting session replay: {e}");
            return;
        }
    };

    let looper = Arc::new(SimLooper::default());
    let owner: Arc<dyn WindowOwner> = Arc::new(SimActivity::new(looper.clone()));
    let window = SimWindow::checkout(1);
    let windows: Vec<Arc<dyn Window>> = vec![window.clone() as Arc<dyn Window>];
    rum_context_provider.start_view("checkout");
    session_replay.start_recording(&windows, &owner);
    info!(duration_ms = duration.as_millis() as u64, "Simulation started");

    let total_frames = duration.as_millis() as u64 / FRAME_INTERVAL.as_millis() as u64;
    let mut frames = interval(FRAME_INTERVAL);
    frames.tick().await; // discard first tick, which is instantaneous
    for frame in 1..=total_frames {
        frames.tick().await;
        let ran = looper.run_pending();
        if ran > 0 {
            debug!(frame, ran, "Ran posted UI tasks");
        }
        window.advance_frame(frame);
        window.draw();

        if frame % TOUCH_EVERY_FRAMES == 0 {
            let dropped = !session_replay.record_touch_events(window.tap(frame));
            if dropped {
                debug!(frame, "Touch batch dropped");
            }
        }

        if frame == total_frames / 2 {
            rum_context_provider.start_view("payment");
            session_replay.start_recording(&windows, &owner);
        }
    }

    session_replay.stop_recording(&windows);
    looper.run_pending();
    match session_replay.stop().await {
        Ok(()) => info!("Simulation finished"),
        Err(e) => error!("Error stopping session replay: {e}"),
    }
}
