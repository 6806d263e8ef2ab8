//! Module address constants and the optional receive function.

use router_ir::{ModuleDescriptor, ModuleId};

use crate::{ConstantNames, EmitContext};

/// One `address private constant` line per module, in module order.
///
/// ```text
/// address private constant _SAMPLE_MODULE = 0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266;
/// ```
pub fn emit_modules(modules: &[ModuleDescriptor], names: &ConstantNames) -> String {
    let mut ctx = EmitContext::new(1);
    for (index, module) in modules.iter().enumerate() {
        ctx.writeln(&format!(
            "address private constant {} = {};",
            names.get(ModuleId::new(index)),
            module.address
        ));
    }
    ctx.into_fragment()
}

/// `receive() external payable {}` surrounded by blank lines, or nothing.
pub fn emit_receive(can_receive_plain_eth: bool) -> String {
    if can_receive_plain_eth {
        "\n    receive() external payable {}\n".to_string()
    } else {
        String::new()
    }
}
