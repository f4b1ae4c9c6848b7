// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for the host-discovery node registry

use std::collections::HashSet;

use resolution_node::registry::{lookup, node_specs, SelectorKind};
use resolution_node::resolution::select::parse_resolution;
use resolution_node::resolution::tables::ModelFamily;

#[test]
fn test_registry_exposes_ten_nodes() {
    assert_eq!(node_specs().len(), 10);
}

#[test]
fn test_node_names_are_unique() {
    let names: HashSet<&str> = node_specs().iter().map(|spec| spec.name).collect();
    assert_eq!(names.len(), node_specs().len());
}

#[test]
fn test_every_family_has_both_selector_kinds() {
    for family in [
        ModelFamily::SdxlStandard,
        ModelFamily::SdxlExtended,
        ModelFamily::Qwen,
        ModelFamily::ZImage1024,
        ModelFamily::ZImage1280,
    ] {
        let kinds: Vec<SelectorKind> = node_specs()
            .iter()
            .filter(|spec| spec.family == family)
            .map(|spec| spec.kind)
            .collect();
        assert!(kinds.contains(&SelectorKind::Exact), "{:?}", family);
        assert!(kinds.contains(&SelectorKind::Nearest), "{:?}", family);
    }
}

#[test]
fn test_lookup_by_name() {
    let spec = lookup("NearestQwenResolution").unwrap();
    assert_eq!(spec.family, ModelFamily::Qwen);
    assert_eq!(spec.kind, SelectorKind::Nearest);
}

#[test]
fn test_lookup_unknown_returns_none() {
    assert!(lookup("NearestVHSResolution").is_none());
}

#[test]
fn test_exact_node_enumerates_table_choices() {
    let spec = lookup("SDXLResolution").unwrap();
    let choices = spec.input_choices().unwrap();
    assert_eq!(choices.len(), 9);
    assert_eq!(choices[0], "1024x1024");
    assert!(choices.contains(&"1536x640".to_string()));

    // Every advertised choice must be accepted by the exact selector
    for choice in &choices {
        parse_resolution(choice).unwrap();
    }
}

#[test]
fn test_nearest_nodes_have_no_choice_list() {
    let spec = lookup("NearestSDXLExtendedResolution").unwrap();
    assert!(spec.input_choices().is_none());
}
