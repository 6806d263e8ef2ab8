#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;

fn render(source: &str, slots: &Slots) -> String {
    Template::parse(source).unwrap().render(slots).unwrap()
}

#[test]
fn test_slot_values_are_not_escaped() {
    let slots = Slots::new().with("code", "if lt(sig,0x70a08231) { result := <&\"'> }");
    assert_eq!(
        render("[{{code}}]", &slots),
        "[if lt(sig,0x70a08231) { result := <&\"'> }]"
    );
}

#[test]
fn test_missing_slot_renders_empty() {
    assert_eq!(render("[{{nothing}}]", &Slots::new()), "[]");
}

#[test]
fn test_conditional_on_empty_and_missing_slots() {
    let source = "a{{#if flag}}-on{{/if}}{{#unless flag}}-off{{/unless}}\n";
    assert_eq!(render(source, &Slots::new()), "a-off\n");
    assert_eq!(render(source, &Slots::new().with("flag", "")), "a-off\n");
    assert_eq!(render(source, &Slots::new().with("flag", "x")), "a-on\n");
}

#[test]
fn test_multiline_slot_keeps_its_own_indentation() {
    let slots = Slots::new().with("body", "first\n        second");
    assert_eq!(
        render("    {\n        {{body}}\n    }\n", &slots),
        "    {\n        first\n        second\n    }\n"
    );
}

#[test]
fn test_set_replaces_previous_value() {
    let mut slots = Slots::new();
    slots.set("name", "A").set("name", "B");
    assert_eq!(render("{{name}}", &slots), "B");
}

#[test]
fn test_mismatched_block_is_rejected() {
    assert!(Template::parse("{{#if a}}x{{/unless}}").is_err());
}

#[test]
fn test_unterminated_tag_is_rejected() {
    assert!(Template::parse("contract {{moduleName").is_err());
}
