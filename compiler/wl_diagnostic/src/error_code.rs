use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Syntax errors (structural parser and expression shape)
/// - E2xxx: Arithmetic errors
/// - E3xxx: Execution stopped by the host
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Number literal with non-digit characters
    E0001,
    /// Integer literal does not fit in 64 bits
    E0002,
    /// Lexeme starts like an operator but is not one
    E0003,
    /// Lexeme cannot start any token
    E0004,
    /// Source text too large to address
    E0005,
    /// Identifier with characters outside `[A-Za-z0-9_]`
    E0006,

    // Syntax Errors (E1xxx)
    /// Required delimiter not found
    E1001,
    /// Empty expression
    E1002,
    /// Assignment without a target variable
    E1003,
    /// Token not allowed here
    E1004,
    /// Unbalanced parenthesis
    E1005,
    /// Operator with no operands
    E1006,
    /// Operand with no operator
    E1007,
    /// Closing brace without an open block
    E1008,

    // Arithmetic Errors (E2xxx)
    /// Division by zero
    E2001,
    /// Integer overflow
    E2002,

    // Host Errors (E3xxx)
    /// Execution interrupted
    E3001,
    /// Step limit exceeded
    E3002,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: [ErrorCode; 18] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E3001,
        ErrorCode::E3002,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an error code string like `"E2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
