use serde::{Deserialize, Serialize};

/// Runtime value in the Tarn language.
///
/// Values are immutable after construction; equality is by tag and
/// payload. `Display` is the canonical inspection used by `print`, the
/// shells, and the VM's non-integer equality fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// 64-bit signed integer.
    Integer(i64),

    /// Boolean value.
    Boolean(bool),

    /// The absent value; also what uninitialised globals hold.
    Null,

    /// A function lowered to bytecode by the compiler.
    CompiledFunction(CompiledFunction),
}

/// Bytecode of a single function body plus the frame layout the VM
/// needs to call it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledFunction {
    pub instructions: Vec<u8>,
    /// Total local slots, parameters included.
    pub num_locals: usize,
    pub num_params: usize,
}

impl Value {
    /// Type name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::CompiledFunction(_) => "COMPILED_FUNCTION",
        }
    }

    /// `false` and `null` are the only non-truthy values.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
            Value::CompiledFunction(func) => write!(
                f,
                "compiled fn[params={} locals={}]",
                func.num_params, func.num_locals
            ),
        }
    }
}
