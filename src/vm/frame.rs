use crate::value::CompiledFunction;

/// One in-progress function call: the function's code, the instruction
/// pointer within it, and the stack index its locals start at.
///
/// Locals (parameters first) live at `stack[base_pointer + index]`;
/// the callee value itself sits one slot below `base_pointer`.
#[derive(Debug, Clone)]
pub struct Frame {
    pub func: CompiledFunction,
    pub ip: usize,
    pub base_pointer: usize,
}

impl Frame {
    pub fn new(func: CompiledFunction, base_pointer: usize) -> Self {
        Frame {
            func,
            ip: 0,
            base_pointer,
        }
    }

    pub fn instructions(&self) -> &[u8] {
        &self.func.instructions
    }
}
