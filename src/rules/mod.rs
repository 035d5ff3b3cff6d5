//! From frequent itemsets to per-item association rankings, and lookups over
//! a ranking.

pub mod rank;
pub mod search;
