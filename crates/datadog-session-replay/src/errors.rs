// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Error types of the recording pipeline.
//!
//! None of these reach the host application. Callers at the pipeline boundary log
//! them and drop the affected event.

/// Errors raised while loading the session replay configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised when an item cannot be added to the recorded data queue.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EnqueueError {
    #[error("Recorded data queue is full ({0} items)")]
    Full(usize),
}

/// Errors raised when talking to the background drain worker.
#[derive(Debug, thiserror::Error)]
pub enum DrainError {
    #[error("Drain worker is not running")]
    WorkerStopped,

    #[error("Drain worker dropped the response")]
    ResponseDropped,
}

/// Errors raised while turning a captured bitmap into an image payload.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Bitmap buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    InvalidBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Bitmap has an empty size")]
    EmptyBitmap,

    #[error("Encoded image is {0} bytes, over the size limit")]
    TooLarge(usize),

    #[error("Failed to encode bitmap: {0}")]
    Encode(#[from] image::ImageError),
}
