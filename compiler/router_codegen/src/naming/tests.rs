use pretty_assertions::assert_eq;
use proptest::prelude::*;
use router_ir::Address;

use super::*;

fn modules(names: &[&str]) -> Vec<ModuleDescriptor> {
    names
        .iter()
        .map(|n| ModuleDescriptor::new(*n, Address::ZERO, vec![]))
        .collect()
}

#[test]
fn test_camel_case() {
    assert_eq!(to_private_constant_case("SampleModule"), "_SAMPLE_MODULE");
    assert_eq!(to_private_constant_case("GreeterModule"), "_GREETER_MODULE");
    assert_eq!(to_private_constant_case("owner"), "_OWNER");
    assert_eq!(to_private_constant_case("anotherModule"), "_ANOTHER_MODULE");
}

#[test]
fn test_digits_and_acronyms() {
    assert_eq!(to_private_constant_case("ERC20Module"), "_ERC20_MODULE");
    assert_eq!(to_private_constant_case("V2Router"), "_V2_ROUTER");
    assert_eq!(to_private_constant_case("ERCModule"), "_ERC_MODULE");
    assert_eq!(to_private_constant_case("NFT"), "_NFT");
    assert_eq!(to_private_constant_case("Module2"), "_MODULE2");
}

#[test]
fn test_existing_underscores_are_doubled() {
    assert_eq!(to_private_constant_case("Sample_Module"), "_SAMPLE__MODULE");
    assert_eq!(to_private_constant_case("_Private"), "___PRIVATE");
    assert_eq!(to_private_constant_case("SAMPLE_MODULE"), "_SAMPLE__MODULE");
    assert_ne!(
        to_private_constant_case("Sample_Module"),
        to_private_constant_case("SampleModule")
    );
}

#[test]
fn test_already_constant_case_input() {
    // An input that looks like an output must not alias the name it resembles.
    assert_eq!(to_private_constant_case("_SAMPLE_MODULE"), "___SAMPLE__MODULE");
    assert_ne!(
        to_private_constant_case("_SAMPLE_MODULE"),
        to_private_constant_case("SampleModule")
    );
}

#[test]
fn test_non_identifier_chars() {
    assert_eq!(to_private_constant_case("my-module"), "_MY_MODULE");
    assert_eq!(to_private_constant_case("Pay$Module"), "_PAY$MODULE");
}

#[test]
fn test_case_only_difference_is_disambiguated() {
    let names = ConstantNames::new(&modules(&["SampleModule", "sampleModule", "SAMPLEModule"]));
    let all: Vec<&str> = names.iter().collect();
    assert_eq!(
        all,
        vec!["_SAMPLE_MODULE", "_SAMPLE_MODULE_2", "_SAMPLE_MODULE_3"]
    );
}

#[test]
fn test_suffix_skips_natural_names() {
    // `Sample-Module-2` naturally maps to `_SAMPLE_MODULE_2`, so the clash
    // between the first two modules must skip to `_3`.
    let names = ConstantNames::new(&modules(&["SampleModule", "sampleModule", "Sample-Module-2"]));
    assert_eq!(names.get(ModuleId::new(0)), "_SAMPLE_MODULE");
    assert_eq!(names.get(ModuleId::new(1)), "_SAMPLE_MODULE_3");
    assert_eq!(names.get(ModuleId::new(2)), "_SAMPLE_MODULE_2");
}

#[test]
fn test_foreign_module_id_has_no_name() {
    let names = ConstantNames::new(&modules(&["SampleModule"]));
    assert_eq!(names.get(ModuleId::new(0)), "_SAMPLE_MODULE");
    assert_eq!(names.get(ModuleId::new(1)), "");
    assert_eq!(names.get(ModuleId::new(usize::MAX)), "");
}

#[test]
fn test_identical_module_names_get_distinct_constants() {
    let names = ConstantNames::new(&modules(&["Greeter", "Greeter"]));
    assert_eq!(names.len(), 2);
    assert_ne!(names.get(ModuleId::new(0)), names.get(ModuleId::new(1)));
}

#[test]
fn test_deterministic() {
    let list = modules(&["A", "a", "B_c", "BC", "bC"]);
    assert_eq!(ConstantNames::new(&list), ConstantNames::new(&list));
}

proptest! {
    #[test]
    fn constant_names_are_unique(names in prop::collection::vec("[A-Za-z_][A-Za-z0-9_]{0,8}", 1..12)) {
        let list: Vec<ModuleDescriptor> = names
            .iter()
            .map(|n| ModuleDescriptor::new(n.as_str(), Address::ZERO, vec![]))
            .collect();
        let constants = ConstantNames::new(&list);
        let unique: FxHashSet<&str> = constants.iter().collect();
        prop_assert_eq!(unique.len(), list.len());
    }
}
