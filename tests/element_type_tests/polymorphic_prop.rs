//! Polymorphic prop resolution

use super::test_utils::{element, resolve};
use jsx_element_type::{Attribute, OpeningElement, Settings};

fn settings() -> Settings {
    Settings::new()
        .with_polymorphic_prop_name("asChild")
        .with_component("CustomButton", "button")
}

#[test]
fn test_prop_value_replaces_tag_name() {
    assert_eq!(resolve(&settings(), &element("span", &[("asChild", "h1")])), "h1");
}

#[test]
fn test_prop_value_wins_over_mapping() {
    assert_eq!(
        resolve(&settings(), &element("CustomButton", &[("asChild", "a")])),
        "a"
    );
}

#[test]
fn test_mapping_used_when_prop_missing() {
    assert_eq!(
        resolve(&settings(), &element("CustomButton", &[("as", "a")])),
        "button"
    );
}

#[test]
fn test_prop_name_is_case_sensitive() {
    assert_eq!(
        resolve(&settings(), &element("CustomButton", &[("aschild", "a")])),
        "button"
    );
}

#[test]
fn test_expression_value_falls_through_to_mapping() {
    let node = OpeningElement::new("CustomButton").with_attribute(Attribute::expression("asChild"));
    assert_eq!(resolve(&settings(), &node), "button");
}

#[test]
fn test_valueless_prop_falls_through_to_tag_name() {
    let node = OpeningElement::new("Slot").with_attribute(Attribute::absent("asChild"));
    assert_eq!(resolve(&settings(), &node), "Slot");
}

#[test]
fn test_first_prop_occurrence_decides() {
    assert_eq!(
        resolve(
            &settings(),
            &element("span", &[("asChild", "h2"), ("asChild", "h3")])
        ),
        "h2"
    );
}

#[test]
fn test_prop_value_is_not_mapped_again() {
    let settings = settings().with_component("a", "link");
    assert_eq!(
        resolve(&settings, &element("CustomButton", &[("asChild", "a")])),
        "a"
    );
}
