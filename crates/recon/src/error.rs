use std::fmt;

#[derive(Debug)]
pub enum MergeError {
    /// Required header missing from an input table.
    MissingColumn { input: &'static str, column: &'static str },
    /// Poll email does not match the institutional netid pattern.
    IdentityFormat { line: u64, email: String },
    /// Answered count is not a non-negative integer.
    CountParse { line: u64, value: String },
    /// Malformed CSV record.
    Csv { input: &'static str, message: String },
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { input, column } => {
                write!(f, "{input}: missing column '{column}'")
            }
            Self::IdentityFormat { line, email } => {
                write!(f, "line {line}: cannot determine netid from email address: {email}")
            }
            Self::CountParse { line, value } => {
                write!(f, "line {line}: cannot parse answered count '{value}'")
            }
            Self::Csv { input, message } => write!(f, "{input}: {message}"),
        }
    }
}

impl std::error::Error for MergeError {}
