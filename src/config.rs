use serde::{Deserialize, Serialize};

use crate::error::{AprioriError, Result};
use crate::types::ItemsetLength;

/// Knobs for one mining run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinerConfig {
    /// Minimum number of accepted transactions an itemset must occur in.
    pub support: u32,
    /// Shortest transaction considered, and smallest itemset ranked.
    pub min_set_size: ItemsetLength,
    /// Largest itemset explored and ranked.
    pub max_set_size: ItemsetLength,
}

impl MinerConfig {
    pub fn new(support: u32, min_set_size: ItemsetLength, max_set_size: ItemsetLength) -> Self {
        MinerConfig {
            support,
            min_set_size,
            max_set_size,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_set_size < 1 {
            return Err(AprioriError::Configuration(
                "min_set_size must be at least 1".to_string(),
            ));
        }
        if self.max_set_size < 1 {
            return Err(AprioriError::Configuration(
                "max_set_size must be at least 1".to_string(),
            ));
        }
        if self.min_set_size > self.max_set_size {
            return Err(AprioriError::Configuration(format!(
                "min_set_size {} exceeds max_set_size {}",
                self.min_set_size, self.max_set_size
            )));
        }
        Ok(())
    }
}
