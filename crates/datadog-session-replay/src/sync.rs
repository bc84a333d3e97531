// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;

/// Locks `mutex`, recovering the guard if a previous holder panicked.
///
/// Critical sections in this crate never leave their data half-updated.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned: PoisonError<MutexGuard<'_, T>>| {
        warn!("Recovering poisoned lock");
        poisoned.into_inner()
    })
}
