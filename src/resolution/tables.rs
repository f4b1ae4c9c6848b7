// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Supported-resolution tables for the image model families we select for

use serde::{Deserialize, Serialize};

/// One supported resolution: explicit pixel dimensions plus the precomputed
/// width/height aspect ratio the nearest selector compares against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolutionEntry {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Precomputed width / height
    pub aspect_ratio: f64,
}

/// Fallback returned by the nearest selector when a table has no entries
pub const DEFAULT_RESOLUTION: (u32, u32) = (1024, 1024);

const fn res(width: u32, height: u32, aspect_ratio: f64) -> ResolutionEntry {
    ResolutionEntry {
        width,
        height,
        aspect_ratio,
    }
}

/// Resolutions SDXL-class models were trained to accept
pub const SDXL_SUPPORTED_RESOLUTIONS: &[ResolutionEntry] = &[
    res(1024, 1024, 1.0),
    res(1152, 896, 1.2857142857142858),
    res(896, 1152, 0.7777777777777778),
    res(1216, 832, 1.4615384615384615),
    res(832, 1216, 0.6842105263157895),
    res(1344, 768, 1.75),
    res(768, 1344, 0.5714285714285714),
    res(1536, 640, 2.4),
    res(640, 1536, 0.4166666666666667),
];

/// Finer-grained SDXL bucket list covering the 1:4 through 4:1 range
pub const SDXL_EXTENDED_RESOLUTIONS: &[ResolutionEntry] = &[
    res(512, 2048, 0.25),
    res(512, 1984, 0.25806451612903225),
    res(512, 1920, 0.26666666666666666),
    res(512, 1856, 0.27586206896551724),
    res(576, 1792, 0.32142857142857145),
    res(576, 1728, 0.3333333333333333),
    res(576, 1664, 0.34615384615384615),
    res(640, 1600, 0.4),
    res(640, 1536, 0.4166666666666667),
    res(704, 1472, 0.4782608695652174),
    res(704, 1408, 0.5),
    res(704, 1344, 0.5238095238095238),
    res(768, 1344, 0.5714285714285714),
    res(768, 1280, 0.6),
    res(832, 1216, 0.6842105263157895),
    res(832, 1152, 0.7222222222222222),
    res(896, 1152, 0.7777777777777778),
    res(896, 1088, 0.8235294117647058),
    res(960, 1088, 0.8823529411764706),
    res(960, 1024, 0.9375),
    res(1024, 1024, 1.0),
    res(1024, 960, 1.0666666666666667),
    res(1088, 960, 1.1333333333333333),
    res(1088, 896, 1.2142857142857142),
    res(1152, 896, 1.2857142857142858),
    res(1152, 832, 1.3846153846153846),
    res(1216, 832, 1.4615384615384615),
    res(1280, 768, 1.6666666666666667),
    res(1344, 768, 1.75),
    res(1408, 704, 2.0),
    res(1472, 704, 2.090909090909091),
    res(1536, 640, 2.4),
    res(1600, 640, 2.5),
    res(1664, 576, 2.888888888888889),
    res(1728, 576, 3.0),
    res(1792, 576, 3.111111111111111),
    res(1856, 512, 3.625),
    res(1920, 512, 3.75),
    res(1984, 512, 3.875),
    res(2048, 512, 4.0),
];

/// Qwen-Image supported resolutions
pub const QWEN_SUPPORTED_RESOLUTIONS: &[ResolutionEntry] = &[
    res(1328, 1328, 1.0),
    res(1664, 928, 1.793103448275862),
    res(928, 1664, 0.5576923076923077),
    res(1472, 1140, 1.2912280701754386),
    res(1140, 1472, 0.7744565217391305),
    res(1584, 1056, 1.5),
    res(1056, 1584, 0.6666666666666666),
];

/// Z-Image resolutions at the 1024px base
pub const Z_IMAGE_RESOLUTIONS_1024: &[ResolutionEntry] = &[
    res(1024, 1024, 1.0),
    res(1152, 896, 1.2857142857142858),
    res(896, 1152, 0.7777777777777778),
    res(1152, 864, 1.3333333333333333),
    res(864, 1152, 0.75),
    res(1248, 832, 1.5),
    res(832, 1248, 0.6666666666666666),
    res(1280, 720, 1.7777777777777777),
    res(720, 1280, 0.5625),
    res(1344, 576, 2.3333333333333335),
    res(576, 1344, 0.42857142857142855),
];

/// Z-Image resolutions at the 1280px base
pub const Z_IMAGE_RESOLUTIONS_1280: &[ResolutionEntry] = &[
    res(1280, 1280, 1.0),
    res(1440, 1120, 1.2857142857142858),
    res(1120, 1440, 0.7777777777777778),
    res(1472, 1104, 1.3333333333333333),
    res(1104, 1472, 0.75),
    res(1536, 1024, 1.5),
    res(1024, 1536, 0.6666666666666666),
    res(1600, 896, 1.7857142857142858),
    res(896, 1600, 0.56),
    res(1680, 720, 2.3333333333333335),
    res(720, 1680, 0.42857142857142855),
];

/// Image model family a resolution table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFamily {
    SdxlStandard,
    SdxlExtended,
    Qwen,
    ZImage1024,
    ZImage1280,
}

impl ModelFamily {
    /// The supported-resolution table for this family
    pub fn resolutions(&self) -> &'static [ResolutionEntry] {
        match self {
            ModelFamily::SdxlStandard => SDXL_SUPPORTED_RESOLUTIONS,
            ModelFamily::SdxlExtended => SDXL_EXTENDED_RESOLUTIONS,
            ModelFamily::Qwen => QWEN_SUPPORTED_RESOLUTIONS,
            ModelFamily::ZImage1024 => Z_IMAGE_RESOLUTIONS_1024,
            ModelFamily::ZImage1280 => Z_IMAGE_RESOLUTIONS_1280,
        }
    }
}
