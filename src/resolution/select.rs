// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Exact and nearest-aspect-ratio selection over a resolution table

use image::DynamicImage;
use ndarray::Array4;
use thiserror::Error;
use tracing::info;

use super::tables::{ResolutionEntry, DEFAULT_RESOLUTION};

/// Custom error types for resolution selection
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("invalid resolution format '{0}'; expected WIDTHxHEIGHT")]
    InvalidFormat(String),

    #[error("invalid width in '{0}'")]
    InvalidWidth(String),

    #[error("invalid height in '{0}'")]
    InvalidHeight(String),

    #[error("width and height must be > 0 in '{0}'")]
    ZeroDimension(String),

    #[error("image height is zero; aspect ratio is undefined")]
    ZeroHeight,
}

/// Parse a resolution choice like "1024x1024" into (width, height).
///
/// Hosts enumerate the valid choice strings from a table (see
/// [`crate::registry::NodeSpec::input_choices`]), so a well-behaved caller
/// never passes a malformed string; if one arrives anyway it is rejected
/// rather than guessed at.
pub fn parse_resolution(s: &str) -> Result<(u32, u32), SelectionError> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(SelectionError::InvalidFormat(s.to_string()));
    }
    let width = parts[0]
        .parse::<u32>()
        .map_err(|_| SelectionError::InvalidWidth(s.to_string()))?;
    let height = parts[1]
        .parse::<u32>()
        .map_err(|_| SelectionError::InvalidHeight(s.to_string()))?;
    if width == 0 || height == 0 {
        return Err(SelectionError::ZeroDimension(s.to_string()));
    }
    Ok((width, height))
}

/// Pick the table entry whose aspect ratio is closest to `width / height`.
///
/// Distance is the plain absolute difference of aspect ratios. On an exact
/// tie the earliest entry in table order wins. An empty table falls back to
/// [`DEFAULT_RESOLUTION`] instead of failing.
pub fn nearest_resolution(
    width: u32,
    height: u32,
    table: &[ResolutionEntry],
) -> Result<(u32, u32), SelectionError> {
    if height == 0 {
        return Err(SelectionError::ZeroHeight);
    }
    info!("Input image resolution: {}x{}", width, height);
    let image_ratio = width as f64 / height as f64;

    let mut smallest: Option<(f64, &ResolutionEntry)> = None;
    for entry in table {
        let difference = (image_ratio - entry.aspect_ratio).abs();
        let closer = match smallest {
            None => true,
            Some((best, _)) => difference < best,
        };
        if closer {
            smallest = Some((difference, entry));
        }
    }

    let (width, height) = match smallest {
        Some((_, entry)) => (entry.width, entry.height),
        None => DEFAULT_RESOLUTION,
    };
    info!("Selected resolution: {}x{}", width, height);
    Ok((width, height))
}

/// Nearest supported resolution for a batch-first NHWC image tensor.
///
/// Pixel height and width are dims 1 and 2 of the
/// (batch, height, width, channels) shape.
pub fn nearest_for_tensor(
    image: &Array4<f32>,
    table: &[ResolutionEntry],
) -> Result<(u32, u32), SelectionError> {
    let (_batch, height, width, _channels) = image.dim();
    nearest_resolution(width as u32, height as u32, table)
}

/// Nearest supported resolution for an already-decoded image
pub fn nearest_for_image(
    image: &DynamicImage,
    table: &[ResolutionEntry],
) -> Result<(u32, u32), SelectionError> {
    nearest_resolution(image.width(), image.height(), table)
}
