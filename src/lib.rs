//! Frequent itemset mining with the level-wise Apriori algorithm, and
//! per-item association rankings derived from the frequent groups.
//!
//! ```
//! use apriori::{mine, MinerConfig};
//!
//! let data = "36 38 39\n36 38\n36 39\n";
//! let mined = mine(data.as_bytes(), &MinerConfig::new(2, 2, 3)).unwrap();
//! assert_eq!(mined.associations[&38], vec![vec![36]]);
//! ```

pub mod combi;
pub mod config;
pub mod error;
pub mod itemset;
pub mod itemsets;
pub mod model;
pub mod persist;
pub mod rules;
pub mod types;

pub use config::MinerConfig;
pub use error::{AprioriError, Result};
pub use model::{mine, Apriori, Mined, MiningSummary};
pub use types::{AssociationMap, FrequentItemsets, Item, Itemset, ItemsetCounts};
