//! Components mapping resolution

use super::test_utils::{element, resolve};
use jsx_element_type::Settings;

fn settings() -> Settings {
    Settings::new().with_component("CustomInput", "input")
}

#[test]
fn test_dom_element_keeps_tag_name() {
    assert_eq!(resolve(&settings(), &element("input", &[])), "input");
}

#[test]
fn test_mapped_custom_element() {
    assert_eq!(resolve(&settings(), &element("CustomInput", &[])), "input");
}

#[test]
fn test_unmapped_custom_element() {
    assert_eq!(resolve(&settings(), &element("CityInput", &[])), "CityInput");
}

#[test]
fn test_prop_ignored_without_prop_name() {
    assert_eq!(resolve(&settings(), &element("span", &[("as", "h1")])), "span");
}

#[test]
fn test_object_member_names_are_not_mapped() {
    for name in ["toString", "constructor", "__proto__", "hasOwnProperty"] {
        assert_eq!(resolve(&settings(), &element(name, &[])), name);
    }
}

#[test]
fn test_object_member_names_can_be_mapped() {
    let settings = Settings::new().with_component("constructor", "section");
    assert_eq!(resolve(&settings, &element("constructor", &[])), "section");
    assert_eq!(resolve(&settings, &element("toString", &[])), "toString");
}

#[test]
fn test_mapping_is_case_sensitive() {
    assert_eq!(resolve(&settings(), &element("custominput", &[])), "custominput");
}
