//! Domain Errors

/// Common result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors surfaced by the storage layer.
///
/// Decode failures never show up here; they degrade to defaults inside
/// the repositories. The only surfaced condition is an index-addressed
/// mutation that points past the end of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for list of {}", index, len)
            }
        }
    }
}

impl std::error::Error for DomainError {}
