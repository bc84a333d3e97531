// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Session replay recording pipeline.
//!
//! Draw signals from the host windows are debounced into snapshot attempts. Each attempt
//! walks the live view tree on the UI thread and enqueues an item on the recorded data
//! queue. Image content is resolved asynchronously. A background worker drains the queue
//! strictly in order and hands ready items to the processor, which turns them into
//! records for storage.
//!
//! ```text
//!  Window draw ──> Debouncer ──> SnapshotProducer ──> RecordedDataQueue ──> Processor ──> RecordWriter
//!                                       │                   ▲
//!                                       └── pixel copy ─────┘ (pending jobs)
//! ```

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod config;
pub mod constants;
pub mod errors;
pub mod logger;
pub mod model;
pub mod processor;
pub mod queue;
pub mod recorder;
pub mod rum;
pub mod session_replay;
pub mod time;

pub(crate) mod sync;
