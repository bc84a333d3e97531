// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Everything that runs against the live view tree: draw interception, debouncing,
//! the tree walk and the per-widget mappers.

pub mod debouncer;
pub mod image;
pub mod interceptor;
pub mod listener;
pub mod mapper;
pub mod node;
pub mod snapshot_producer;
pub mod system_information;
pub mod utils;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use debouncer::Debouncer;
pub use interceptor::ViewOnDrawInterceptor;
pub use listener::WindowsOnDrawListener;
pub use node::Node;
pub use snapshot_producer::SnapshotProducer;
pub use system_information::{ScreenOrientation, SystemInformation};
pub use utils::GlobalBounds;
pub use view::{OnDrawListener, UiExecutor, View, Window, WindowId, WindowOwner};

/// Sink notified about asynchronous work attached to a snapshot.
///
/// Every `job_started` is eventually followed by exactly one `job_finished`, whether the
/// work succeeded or not.
pub trait AsyncJobStatusCallback: Send + Sync {
    fn job_started(&self);
    fn job_finished(&self);
}
