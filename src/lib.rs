// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Resolution-selection helpers for image-generation pipelines
//!
//! Given a target model family (SDXL, Qwen, Z-Image), this crate exposes the
//! fixed table of resolutions that family supports and two ways to pick one:
//! an explicit "WxH" choice, or the table entry whose aspect ratio is nearest
//! to an existing image's. A host node runtime discovers the selectors
//! through the [`registry`] module and routes the returned (width, height)
//! pair downstream.

pub mod registry;
pub mod resolution;

// Re-export main types from the selection modules
pub use registry::{lookup, node_specs, NodeSpec, SelectorKind};
pub use resolution::select::{
    nearest_for_image, nearest_for_tensor, nearest_resolution, parse_resolution, SelectionError,
};
pub use resolution::tables::{
    ModelFamily, ResolutionEntry, DEFAULT_RESOLUTION, QWEN_SUPPORTED_RESOLUTIONS,
    SDXL_EXTENDED_RESOLUTIONS, SDXL_SUPPORTED_RESOLUTIONS, Z_IMAGE_RESOLUTIONS_1024,
    Z_IMAGE_RESOLUTIONS_1280,
};
