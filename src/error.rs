use std::error::Error;
use std::fmt;

/// Custom error type for table construction failures.
///
/// A table with a zero dimension cannot exist, so this is the one condition
/// that fails loudly instead of degrading to an absent result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    ZeroRows,
    ZeroColumns,
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DimensionError::ZeroRows => write!(f, "a table requires at least one row"),
            DimensionError::ZeroColumns => write!(f, "a table requires at least one column"),
        }
    }
}

impl Error for DimensionError {}
