// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Discovery registry mapping host-facing node names to selectors
//!
//! The host plugin runtime discovers nodes by name and wires their inputs;
//! this mapping is assembled once and stays outside the selection core.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::resolution::tables::ModelFamily;

/// Which of the two selection operations a node performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorKind {
    /// The user picks a "WxH" string from the table's enumerated choices
    Exact,
    /// The table entry nearest an input image's aspect ratio is chosen
    Nearest,
}

/// One host-visible node: a model family paired with a selector kind
#[derive(Debug, Clone, Copy)]
pub struct NodeSpec {
    pub name: &'static str,
    pub family: ModelFamily,
    pub kind: SelectorKind,
}

impl NodeSpec {
    /// Enumerated input choices the host should offer for this node.
    ///
    /// Exact nodes list every table entry as a "WxH" string in table order.
    /// Nearest nodes take an image input instead and have no choice list.
    pub fn input_choices(&self) -> Option<Vec<String>> {
        match self.kind {
            SelectorKind::Exact => Some(
                self.family
                    .resolutions()
                    .iter()
                    .map(|entry| format!("{}x{}", entry.width, entry.height))
                    .collect(),
            ),
            SelectorKind::Nearest => None,
        }
    }
}

const NODE_SPECS: &[NodeSpec] = &[
    NodeSpec {
        name: "SDXLResolution",
        family: ModelFamily::SdxlStandard,
        kind: SelectorKind::Exact,
    },
    NodeSpec {
        name: "NearestSDXLResolution",
        family: ModelFamily::SdxlStandard,
        kind: SelectorKind::Nearest,
    },
    NodeSpec {
        name: "SDXLExtendedResolution",
        family: ModelFamily::SdxlExtended,
        kind: SelectorKind::Exact,
    },
    NodeSpec {
        name: "NearestSDXLExtendedResolution",
        family: ModelFamily::SdxlExtended,
        kind: SelectorKind::Nearest,
    },
    NodeSpec {
        name: "QwenResolution",
        family: ModelFamily::Qwen,
        kind: SelectorKind::Exact,
    },
    NodeSpec {
        name: "NearestQwenResolution",
        family: ModelFamily::Qwen,
        kind: SelectorKind::Nearest,
    },
    NodeSpec {
        name: "ZImage1024Resolution",
        family: ModelFamily::ZImage1024,
        kind: SelectorKind::Exact,
    },
    NodeSpec {
        name: "NearestZImage1024Resolution",
        family: ModelFamily::ZImage1024,
        kind: SelectorKind::Nearest,
    },
    NodeSpec {
        name: "ZImage1280Resolution",
        family: ModelFamily::ZImage1280,
        kind: SelectorKind::Exact,
    },
    NodeSpec {
        name: "NearestZImage1280Resolution",
        family: ModelFamily::ZImage1280,
        kind: SelectorKind::Nearest,
    },
];

/// All nodes this crate exposes to the host runtime
pub fn node_specs() -> &'static [NodeSpec] {
    NODE_SPECS
}

/// Look up a node by its host-facing name
pub fn lookup(name: &str) -> Option<&'static NodeSpec> {
    static BY_NAME: OnceLock<HashMap<&'static str, &'static NodeSpec>> = OnceLock::new();
    let by_name = BY_NAME.get_or_init(|| {
        NODE_SPECS.iter().map(|spec| (spec.name, spec)).collect()
    });
    by_name.get(name).copied()
}
