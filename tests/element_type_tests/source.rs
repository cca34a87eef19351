//! Resolution of elements parsed from JSX and TSX source

use super::test_utils::{allow_list_settings, scan_jsx, scan_tsx};
use jsx_element_type::{ResolutionSource, Settings};
use pretty_assertions::assert_eq;

#[test]
fn test_components_mapping_in_source() {
    let result = scan_jsx(
        r#"
export function Form() {
  return (
    <form>
      <CustomInput name="city" />
      <CityInput />
    </form>
  );
}
"#,
        Settings::new().with_component("CustomInput", "input"),
    );
    assert_eq!(result.element_types(), vec!["form", "input", "CityInput"]);
}

#[test]
fn test_polymorphic_prop_in_source() {
    let result = scan_jsx(
        r#"
const Nav = () => (
  <CustomButton asChild="a" href="/">
    <CustomButton as="a" />
  </CustomButton>
);
"#,
        Settings::new()
            .with_polymorphic_prop_name("asChild")
            .with_component("CustomButton", "button"),
    );
    assert_eq!(result.element_types(), vec!["a", "button"]);
}

#[test]
fn test_dynamic_prop_value_falls_through() {
    let result = scan_jsx(
        r#"
const Heading = ({ level }) => <Text as={`h${level}`} />;
const Title = () => <Text as={"h1"} />;
"#,
        Settings::new()
            .with_polymorphic_prop_name("as")
            .with_component("Text", "p"),
    );
    assert_eq!(result.element_types(), vec!["p", "h1"]);
    assert_eq!(result.elements[0].source, ResolutionSource::Component);
    assert_eq!(result.elements[1].source, ResolutionSource::PolymorphicProp);
}

#[test]
fn test_allow_list_in_tsx() {
    let result = scan_tsx(
        r#"
export const Loading = (): JSX.Element => (
  <Box asChild="section">
    <Spinner asChild="img" />
    <Icon asChild="img" />
    <Box />
  </Box>
);
"#,
        allow_list_settings(),
    );
    assert_eq!(result.element_types(), vec!["section", "Spinner", "img", "div"]);
    assert_eq!(result.elements[1].source, ResolutionSource::NotAllowed);
}

#[test]
fn test_member_expression_names() {
    let result = scan_jsx(
        "const a = <Menu.Item as=\"li\" />;",
        Settings::new()
            .with_polymorphic_prop_name("as")
            .allow("Menu.Item"),
    );
    assert_eq!(result.element_types(), vec!["li"]);
}

#[test]
fn test_escaped_prop_values_are_decoded() {
    let result = scan_jsx(
        r#"
const a = <Box as={"\u00681"} />;
const b = <Box as="h&#50;" />;
const c = <Box as={`\x683`} />;
"#,
        Settings::new()
            .with_polymorphic_prop_name("as")
            .with_component("Box", "div"),
    );
    assert_eq!(result.element_types(), vec!["h1", "h2", "h3"]);
}
