#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::fs;

use pretty_assertions::assert_eq;
use router_ir::FragmentKind;

use super::*;

const TOKEN_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

const TOKEN_ABI: &str = r#"[
    {"type": "function", "name": "balanceOf", "inputs": [{"name": "owner", "type": "address"}],
     "outputs": [{"name": "", "type": "uint256"}], "stateMutability": "view"},
    {"type": "event", "name": "Transfer", "inputs": [], "anonymous": false}
]"#;

#[test]
fn test_inline_abi() {
    let text = format!(
        r#"[{{"contractName": "TokenModule", "deployedAddress": "{TOKEN_ADDRESS}",
             "deployTxnHash": "0xabc", "abi": {TOKEN_ABI}}}]"#
    );
    let modules = parse_manifest(&text, Path::new("manifest.json")).unwrap();

    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].name, "TokenModule");
    assert_eq!(modules[0].address.to_string(), TOKEN_ADDRESS);
    assert_eq!(modules[0].fragments.len(), 2);
    assert_eq!(modules[0].fragments[0].function_name(), Some("balanceOf"));
    assert_eq!(modules[0].fragments[1].kind, FragmentKind::Event);
}

#[test]
fn test_lowercase_address_is_accepted() {
    let text = format!(
        r#"[{{"contractName": "TokenModule", "deployedAddress": "{}", "abi": []}}]"#,
        TOKEN_ADDRESS.to_lowercase()
    );
    let modules = parse_manifest(&text, Path::new("manifest.json")).unwrap();
    assert_eq!(modules[0].address.to_string(), TOKEN_ADDRESS);
}

#[test]
fn test_abi_path_is_relative_to_manifest() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("abis")).unwrap();
    fs::write(dir.path().join("abis/Token.json"), TOKEN_ABI).unwrap();
    let manifest = dir.path().join("manifest.json");
    fs::write(
        &manifest,
        format!(
            r#"[{{"contractName": "TokenModule", "deployedAddress": "{TOKEN_ADDRESS}",
                 "abi": "abis/Token.json"}}]"#
        ),
    )
    .unwrap();

    let modules = load_manifest(&manifest).unwrap();
    assert_eq!(modules[0].fragments.len(), 2);
}

#[test]
fn test_artifact_file_with_abi_key() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Token.json"),
        format!(r#"{{"contractName": "TokenModule", "bytecode": "0x00", "abi": {TOKEN_ABI}}}"#),
    )
    .unwrap();
    let manifest = dir.path().join("manifest.json");
    fs::write(
        &manifest,
        format!(
            r#"[{{"contractName": "TokenModule", "deployedAddress": "{TOKEN_ADDRESS}",
                 "abi": "Token.json"}}]"#
        ),
    )
    .unwrap();

    let modules = load_manifest(&manifest).unwrap();
    assert_eq!(modules[0].fragments[0].function_name(), Some("balanceOf"));
}

#[test]
fn test_manifest_order_is_preserved() {
    let text = format!(
        r#"[
            {{"contractName": "B", "deployedAddress": "{TOKEN_ADDRESS}", "abi": []}},
            {{"contractName": "A", "deployedAddress": "{TOKEN_ADDRESS}", "abi": []}}
        ]"#
    );
    let modules = parse_manifest(&text, Path::new("manifest.json")).unwrap();
    let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_missing_manifest_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_manifest(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ManifestError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_missing_abi_file_names_the_abi_path() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("manifest.json");
    let text = format!(
        r#"[{{"contractName": "T", "deployedAddress": "{TOKEN_ADDRESS}", "abi": "Missing.json"}}]"#
    );
    let err = parse_manifest(&text, &manifest).unwrap_err();
    assert!(matches!(err, ManifestError::Io { .. }));
    assert!(err.to_string().contains("Missing.json"));
}

#[test]
fn test_malformed_json_is_json_error() {
    let err = parse_manifest("[{", Path::new("broken.json")).unwrap_err();
    assert!(matches!(err, ManifestError::Json { .. }));
    assert!(err.to_string().starts_with("invalid JSON in 'broken.json'"));
}

#[test]
fn test_bad_checksum_is_rejected() {
    let text = r#"[{"contractName": "T",
        "deployedAddress": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD", "abi": []}]"#;
    let err = parse_manifest(text, Path::new("manifest.json")).unwrap_err();
    assert!(matches!(err, ManifestError::Json { .. }));
}
