//! Built-in router template.

/// Default router contract template.
///
/// Slots: `moduleName`, `modules`, `selectors`, `receive`,
/// `diamondConstructor`, `diamondCompat`. The `selectors` slot sits at depth 4
/// inside `findImplementation`, `modules` and `diamondCompat` at depth 1, and
/// `diamondConstructor` at depth 2.
///
/// Block tags share a line with the text around them so that a disabled
/// section leaves no blank line behind.
pub const ROUTER_TEMPLATE: &str = r#"//SPDX-License-Identifier: Unlicense
pragma solidity ^0.8.0;

// GENERATED CODE - do not edit manually!!
// --------------------------------------------------------------------------------
// --------------------------------------------------------------------------------

contract {{moduleName}} {
    error UnknownSelector(bytes4 sel);

    {{modules}}{{#if diamondConstructor}}

    constructor() {
        {{diamondConstructor}}
    }{{/if}}
{{receive}}
    fallback() external payable {
        // Lookup table: Function selector => implementation contract
        bytes4 sig4 = msg.sig;
        address implementation;

        assembly {
            let sig32 := shr(224, sig4)

            function findImplementation(sig) -> result {
                {{selectors}}
            }

            implementation := findImplementation(sig32)
        }

        if (implementation == address(0)) {
            revert UnknownSelector(sig4);
        }

        // Delegatecall to the implementation contract
        assembly {
            calldatacopy(0, 0, calldatasize())

            let result := delegatecall(gas(), implementation, 0, calldatasize(), 0, 0)
            returndatacopy(0, 0, returndatasize())

            switch result
            case 0 {
                revert(0, returndatasize())
            }
            default {
                return(0, returndatasize())
            }
        }
    }{{#if diamondCompat}}

    {{diamondCompat}}{{/if}}
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Slots, Template};

    #[test]
    fn test_builtin_template_fills_every_slot() {
        let slots = Slots::new()
            .with("moduleName", "SLOT_MODULE_NAME")
            .with("modules", "SLOT_MODULES")
            .with("selectors", "SLOT_SELECTORS")
            .with("receive", "SLOT_RECEIVE")
            .with("diamondConstructor", "SLOT_DIAMOND_CONSTRUCTOR")
            .with("diamondCompat", "SLOT_DIAMOND_COMPAT");
        let template = Template::parse(ROUTER_TEMPLATE);
        assert!(template.is_ok());
        let Ok(template) = template else { return };
        let rendered = template.render(&slots);
        assert!(rendered.is_ok());
        let Ok(rendered) = rendered else { return };
        for value in [
            "contract SLOT_MODULE_NAME {",
            "    SLOT_MODULES\n\n    constructor() {\n        SLOT_DIAMOND_CONSTRUCTOR\n    }\nSLOT_RECEIVE\n",
            "                SLOT_SELECTORS\n",
            "    }\n\n    SLOT_DIAMOND_COMPAT\n}\n",
        ] {
            assert!(rendered.contains(value), "missing {value:?} in\n{rendered}");
        }
    }

    #[test]
    fn test_disabled_sections_leave_no_blank_lines() {
        let slots = Slots::new().with("modules", "MODULES");
        let Ok(template) = Template::parse(ROUTER_TEMPLATE) else {
            panic!("built-in template must compile");
        };
        let Ok(rendered) = template.render(&slots) else {
            panic!("built-in template must render");
        };
        assert!(rendered.contains("    MODULES\n\n    fallback() external payable {"));
        assert!(rendered.ends_with("        }\n    }\n}\n"));
        assert!(!rendered.contains("constructor"));
    }
}
