// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Consistency checks over the static resolution tables

use resolution_node::resolution::tables::{ModelFamily, SDXL_SUPPORTED_RESOLUTIONS};

const ALL_FAMILIES: [ModelFamily; 5] = [
    ModelFamily::SdxlStandard,
    ModelFamily::SdxlExtended,
    ModelFamily::Qwen,
    ModelFamily::ZImage1024,
    ModelFamily::ZImage1280,
];

#[test]
fn test_tables_are_non_empty() {
    for family in ALL_FAMILIES {
        assert!(
            !family.resolutions().is_empty(),
            "empty table for {:?}",
            family
        );
    }
}

#[test]
fn test_aspect_ratios_match_dimensions() {
    for family in ALL_FAMILIES {
        for entry in family.resolutions() {
            let derived = entry.width as f64 / entry.height as f64;
            assert!(
                (entry.aspect_ratio - derived).abs() < 1e-6,
                "{:?} {}x{}: stored {} vs derived {}",
                family,
                entry.width,
                entry.height,
                entry.aspect_ratio,
                derived
            );
        }
    }
}

#[test]
fn test_dimensions_are_positive() {
    for family in ALL_FAMILIES {
        for entry in family.resolutions() {
            assert!(entry.width > 0, "{:?}", family);
            assert!(entry.height > 0, "{:?}", family);
            assert!(entry.aspect_ratio > 0.0, "{:?}", family);
        }
    }
}

#[test]
fn test_family_accessors_return_expected_tables() {
    assert_eq!(ModelFamily::SdxlStandard.resolutions().len(), 9);
    assert_eq!(ModelFamily::SdxlExtended.resolutions().len(), 40);
    assert_eq!(ModelFamily::Qwen.resolutions().len(), 7);
    assert_eq!(ModelFamily::ZImage1024.resolutions().len(), 11);
    assert_eq!(ModelFamily::ZImage1280.resolutions().len(), 11);
}

#[test]
fn test_resolution_entry_serialization() {
    let entry = SDXL_SUPPORTED_RESOLUTIONS[0];
    let json = serde_json::to_value(entry).unwrap();
    assert_eq!(json["width"], 1024);
    assert_eq!(json["height"], 1024);
    let ratio = json["aspect_ratio"].as_f64().unwrap();
    assert!((ratio - 1.0).abs() < 1e-9);
}
