// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::mapper::{MapperRegistry, MappingContext};
use super::node::Node;
use super::view::View;
use super::{AsyncJobStatusCallback, SystemInformation};
use std::sync::Arc;

/// Turns a live view tree into a tree of nodes.
///
/// Runs on the thread owning the views. It performs no I/O. Image work is handed to the
/// mappers, which report it through the async job callback.
pub struct SnapshotProducer {
    mappers: MapperRegistry,
}

impl SnapshotProducer {
    pub fn new(mappers: MapperRegistry) -> Self {
        Self { mappers }
    }

    /// Returns `None` when `root` is not visible.
    pub fn produce(
        &self,
        root: &Arc<dyn View>,
        system_information: &SystemInformation,
        async_jobs: &Arc<dyn AsyncJobStatusCallback>,
    ) -> Option<Node> {
        let mapping_context = MappingContext {
            system_information: system_information.clone(),
        };
        self.convert_view_to_node(root, &mapping_context, async_jobs)
    }

    fn convert_view_to_node(
        &self,
        view: &Arc<dyn View>,
        mapping_context: &MappingContext,
        async_jobs: &Arc<dyn AsyncJobStatusCallback>,
    ) -> Option<Node> {
        if !view.is_visible() {
            return None;
        }

        let wireframes = self
            .mappers
            .mapper_for(view.class_name())
            .map(view, mapping_context, async_jobs);
        let children = view
            .children()
            .iter()
            .filter_map(|child| self.convert_view_to_node(child, mapping_context, async_jobs))
            .collect();

        Some(Node {
            wireframes,
            children,
        })
    }
}
