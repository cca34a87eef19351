//! Polymorphic prop combined with an explicit allow-list

use super::test_utils::{allow_list_settings, element, resolve};
use jsx_element_type::{resolve_with_source, ResolutionSource};

#[test]
fn test_excluded_element_ignores_prop() {
    assert_eq!(
        resolve(&allow_list_settings(), &element("Spinner", &[("asChild", "img")])),
        "Spinner"
    );
}

#[test]
fn test_allowed_element_uses_prop() {
    assert_eq!(
        resolve(&allow_list_settings(), &element("Icon", &[("asChild", "img")])),
        "img"
    );
}

#[test]
fn test_allowed_element_prop_wins_over_mapping() {
    assert_eq!(
        resolve(&allow_list_settings(), &element("Box", &[("asChild", "span")])),
        "span"
    );
}

#[test]
fn test_allowed_element_falls_back_to_mapping() {
    assert_eq!(
        resolve(&allow_list_settings(), &element("Box", &[("as", "a")])),
        "div"
    );
}

#[test]
fn test_excluded_element_skips_mapping() {
    let settings = allow_list_settings().with_component("Spinner", "progress");
    assert_eq!(resolve(&settings, &element("Spinner", &[])), "Spinner");

    let node = element("Spinner", &[]);
    assert_eq!(
        resolve_with_source(&settings, &node).source,
        ResolutionSource::NotAllowed
    );
}

#[test]
fn test_empty_allow_list_excludes_everything() {
    let mut settings = allow_list_settings();
    settings.polymorphic_allow_list = Some(Default::default());
    assert_eq!(resolve(&settings, &element("Box", &[("asChild", "span")])), "Box");
}
