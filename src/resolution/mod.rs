// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Resolution tables and selection for image-generation model families
//!
//! This module provides:
//! - Curated per-family resolution tables (SDXL, extended SDXL, Qwen, Z-Image)
//! - Exact selection from a "WxH" choice string
//! - Nearest-aspect-ratio selection from an existing image's dimensions

pub mod select;
pub mod tables;

pub use select::{
    nearest_for_image, nearest_for_tensor, nearest_resolution, parse_resolution, SelectionError,
};
pub use tables::{ModelFamily, ResolutionEntry, DEFAULT_RESOLUTION};
