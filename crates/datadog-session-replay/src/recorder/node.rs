// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::model::Wireframe;

/// Wireframes of one view followed by the nodes of its visible children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    pub wireframes: Vec<Wireframe>,
    pub children: Vec<Node>,
}

impl Node {
    /// Wireframes of the subtree in paint order: a node's own wireframes, then its children.
    pub fn flatten(&self) -> Vec<Wireframe> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<Wireframe>) {
        out.extend(self.wireframes.iter().cloned());
        for child in &self.children {
            child.flatten_into(out);
        }
    }
}
