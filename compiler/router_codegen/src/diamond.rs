//! Diamond-compatibility scaffolding.
//!
//! Tooling built for multi-facet ("diamond") proxies discovers facets through
//! a registry and a `DiamondCut` event. The router is not a real diamond: its
//! modules are fixed at construction and nothing can be added, replaced, or
//! removed. The scaffolding only records the fixed module set in the shape
//! that tooling expects.
//!
//! [`FacetRegistry`] is the generator-side model of that registry. The emitted
//! accessors answer the same questions the registry answers here.

use router_ir::{Address, ModuleDescriptor, ModuleId, Selector};
use router_selectors::{module_selectors, FunctionFilter};

use crate::{ConstantNames, EmitContext};

/// One module registered as a facet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facet {
    pub module: ModuleId,
    pub address: Address,
    /// Routed selectors of the module, in ABI order.
    pub selectors: Vec<Selector>,
}

/// The facet set registered by the emitted constructor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetRegistry {
    facets: Vec<Facet>,
}

impl FacetRegistry {
    /// One facet per module, in module order, with `filter` applied.
    pub fn from_modules(modules: &[ModuleDescriptor], filter: &dyn FunctionFilter) -> Self {
        let facets = modules
            .iter()
            .enumerate()
            .map(|(index, module)| {
                let id = ModuleId::new(index);
                Facet {
                    module: id,
                    address: module.address,
                    selectors: module_selectors(id, module, filter)
                        .into_iter()
                        .map(|s| s.selector)
                        .collect(),
                }
            })
            .collect();
        FacetRegistry { facets }
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Every facet address, in registration order.
    pub fn facet_addresses(&self) -> Vec<Address> {
        self.facets.iter().map(|f| f.address).collect()
    }

    /// Selectors registered for the first facet at `address`.
    pub fn facet_function_selectors(&self, address: Address) -> Option<&[Selector]> {
        self.facets
            .iter()
            .find(|f| f.address == address)
            .map(|f| f.selectors.as_slice())
    }

    /// Facet that registered `selector`, scanning in registration order.
    pub fn facet_of(&self, selector: Selector) -> Option<Address> {
        self.facets
            .iter()
            .find(|f| f.selectors.contains(&selector))
            .map(|f| f.address)
    }
}

/// Constructor body that registers every facet and announces them.
///
/// ```text
/// bytes4[] memory selectors;
///
/// selectors = new bytes4[](2);
/// selectors[0] = 0x12345678;
/// selectors[1] = 0x87654321;
/// _facets().push(Facet(_SAMPLE_MODULE, selectors));
///
/// _emitDiamondCutEvent();
/// ```
pub fn emit_diamond_constructor(registry: &FacetRegistry, names: &ConstantNames) -> String {
    let mut ctx = EmitContext::new(2);
    ctx.writeln("bytes4[] memory selectors;");

    for facet in registry.facets() {
        ctx.blank_line();
        ctx.writeln(&format!(
            "selectors = new bytes4[]({});",
            facet.selectors.len()
        ));
        for (i, selector) in facet.selectors.iter().enumerate() {
            ctx.writeln(&format!("selectors[{i}] = {selector};"));
        }
        ctx.writeln(&format!(
            "_facets().push(Facet({}, selectors));",
            names.get(facet.module)
        ));
    }

    ctx.blank_line();
    ctx.writeln("_emitDiamondCutEvent();");
    ctx.into_fragment()
}

const FACET_TYPES: &str = "\
struct Facet {
    address facetAddress;
    bytes4[] functionSelectors;
}

enum FacetCutAction {Add, Replace, Remove}
// Add=0, Replace=1, Remove=2

struct FacetCut {
    address facetAddress;
    FacetCutAction action;
    bytes4[] functionSelectors;
}
";

const FACET_SELECTORS_ACCESSOR: &str = "\
/// @notice Gets all the function selectors supported by a specific facet.
/// @param _facet The facet address.
/// @return facetFunctionSelectors_
function _facetFunctionSelectors(address _facet) internal view returns (bytes4[] memory facetFunctionSelectors_) {
    Facet[] storage facets = _facets();
    for (uint256 i = 0; i < facets.length; i++) {
        if (facets[i].facetAddress == _facet) {
            return facets[i].functionSelectors;
        }
    }
}
";

const FACET_ADDRESS_ACCESSOR: &str = "\
/// @notice Gets the facet that supports the given selector.
/// @dev If facet is not found return address(0).
/// @param _functionSelector The function selector.
/// @return facetAddress_ The facet address.
function _facetAddress(bytes4 _functionSelector) internal view returns (address facetAddress_) {
    Facet[] storage facets = _facets();
    for (uint256 i = 0; i < facets.length; i++) {
        for (uint256 j = 0; j < facets[i].functionSelectors.length; j++) {
            if (facets[i].functionSelectors[j] == _functionSelector) {
                return facets[i].facetAddress;
            }
        }
    }
}

event DiamondCut(FacetCut[] _diamondCut, address _init, bytes _calldata);
";

/// Registry types, storage accessor, loupe-style readers, the `DiamondCut`
/// event, and the helper that emits it once per deployment.
pub fn emit_diamond_compat(
    router_name: &str,
    registry: &FacetRegistry,
    names: &ConstantNames,
) -> String {
    let mut ctx = EmitContext::new(1);

    ctx.write_block(FACET_TYPES);
    ctx.blank_line();

    ctx.writeln("/// @notice Gets all facet addresses and their four byte function selectors.");
    ctx.writeln("/// @return facets_ Facet");
    ctx.writeln("function _facets() internal view returns (Facet[] storage facets_) {");
    ctx.indent();
    ctx.writeln(&format!("bytes32 s = keccak256(\"Router.{router_name}\");"));
    ctx.writeln("assembly {");
    ctx.indent();
    ctx.writeln("facets_.slot := s");
    ctx.dedent();
    ctx.writeln("}");
    ctx.dedent();
    ctx.writeln("}");
    ctx.blank_line();

    ctx.write_block(FACET_SELECTORS_ACCESSOR);
    ctx.blank_line();

    ctx.writeln("/// @notice Get all the facet addresses used by a diamond.");
    ctx.writeln("/// @return facetAddresses_");
    ctx.writeln("function _facetAddresses() internal pure returns (address[] memory facetAddresses_) {");
    ctx.indent();
    ctx.writeln(&format!("facetAddresses_ = new address[]({});", registry.len()));
    for (i, facet) in registry.facets().iter().enumerate() {
        ctx.writeln(&format!("facetAddresses_[{i}] = {};", names.get(facet.module)));
    }
    ctx.dedent();
    ctx.writeln("}");
    ctx.blank_line();

    ctx.write_block(FACET_ADDRESS_ACCESSOR);
    ctx.blank_line();

    ctx.writeln("/// @notice Emits the cut events that would be emitted if this was actually a diamond");
    ctx.writeln("function _emitDiamondCutEvent() internal returns (bool) {");
    ctx.indent();
    ctx.writeln(&format!("FacetCut[] memory cuts = new FacetCut[]({});", registry.len()));
    for (i, facet) in registry.facets().iter().enumerate() {
        let constant = names.get(facet.module);
        ctx.writeln(&format!(
            "cuts[{i}] = FacetCut({constant}, FacetCutAction.Add, _facetFunctionSelectors({constant}));"
        ));
    }
    ctx.writeln("emit DiamondCut(cuts, address(0), new bytes(0));");
    ctx.writeln("return true;");
    ctx.dedent();
    ctx.writeln("}");

    ctx.into_fragment()
}
