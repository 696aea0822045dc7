/// Errors the VM can halt with. Execution stops at the first failing
/// instruction; the machine stays inspectable but is not resumable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A push would exceed the fixed stack capacity.
    StackOverflow,
    DivisionByZero,
    /// Arithmetic on anything but two integers.
    UnsupportedOperands {
        left: &'static str,
        right: &'static str,
    },
    /// Ordering comparison on anything but two integers.
    ComparisonMismatch {
        operator: &'static str,
        left: &'static str,
        right: &'static str,
    },
    UnsupportedNegation { operand: &'static str },
    CallingNonFunction { callee: &'static str },
    UndefinedOpcode(u8),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::StackOverflow => write!(f, "stack overflow"),
            RuntimeError::DivisionByZero => write!(f, "division by zero"),
            RuntimeError::UnsupportedOperands { left, right } => {
                write!(f, "unsupported types for binary operation: {} {}", left, right)
            }
            RuntimeError::ComparisonMismatch {
                operator,
                left,
                right,
            } => write!(f, "{} requires integers, got {} {}", operator, left, right),
            RuntimeError::UnsupportedNegation { operand } => {
                write!(f, "unsupported negation operand: {}", operand)
            }
            RuntimeError::CallingNonFunction { callee } => {
                write!(f, "calling non-function: {}", callee)
            }
            RuntimeError::UndefinedOpcode(byte) => write!(f, "undefined opcode: {}", byte),
        }
    }
}

impl std::error::Error for RuntimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RuntimeError::StackOverflow.to_string(), "stack overflow");
        assert_eq!(RuntimeError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            RuntimeError::ComparisonMismatch {
                operator: ">",
                left: "INTEGER",
                right: "BOOLEAN",
            }
            .to_string(),
            "> requires integers, got INTEGER BOOLEAN"
        );
        assert_eq!(
            RuntimeError::CallingNonFunction { callee: "INTEGER" }.to_string(),
            "calling non-function: INTEGER"
        );
    }
}
