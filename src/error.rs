use std::fmt;

use crate::types::{Itemset, ItemsetLength};

pub type Result<T> = std::result::Result<T, AprioriError>;

/// Every failure the miner can surface. There is no local recovery: a failed
/// run produces no partial model.
#[derive(Debug)]
pub enum AprioriError {
    /// Missing data source or output target, or nonsensical size bounds.
    Configuration(String),
    /// A transaction token is not a valid item identifier.
    Parse {
        /// 1-based line number in the data source.
        line: usize,
        token: String,
    },
    /// A query was issued before any association map was mined or read.
    ModelNotLoaded,
    /// A remainder of a frequent itemset was absent from the table one size
    /// below it while ranking.
    InvariantViolation {
        remainder: Itemset,
        size: ItemsetLength,
    },
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for AprioriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AprioriError::Configuration(reason) => write!(f, "invalid configuration: {}", reason),
            AprioriError::Parse { line, token } => {
                write!(f, "line {}: {:?} is not a valid item identifier", line, token)
            }
            AprioriError::ModelNotLoaded => write!(f, "no association model loaded"),
            AprioriError::InvariantViolation { remainder, size } => write!(
                f,
                "remainder {:?} missing from the frequent {}-itemsets",
                remainder, size
            ),
            AprioriError::Io(err) => write!(f, "i/o error: {}", err),
            AprioriError::Serialization(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for AprioriError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AprioriError::Io(err) => Some(err),
            AprioriError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AprioriError {
    fn from(err: std::io::Error) -> Self {
        AprioriError::Io(err)
    }
}

impl From<serde_json::Error> for AprioriError {
    fn from(err: serde_json::Error) -> Self {
        AprioriError::Serialization(err)
    }
}
