use serde::Serialize;

/// A parse error with source location.
///
/// `line` and `column` are 1-based and point at the offending token.
/// The parser records these alongside its plain string errors; the diag
/// driver serialises them as a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub msg: String,
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for Diagnostic {
    /// Formats as `line:column: message` for CLI-friendly output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.msg)
    }
}

impl std::error::Error for Diagnostic {}
