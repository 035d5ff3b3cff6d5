use std::collections::{BTreeMap, HashMap};

pub type Item = i64;
pub type Itemset = Vec<Item>;

/// Size-(k-1) itemsets still alive for one accepted transaction.
pub type CandidatePool = Vec<Itemset>;

pub type ItemCounts = HashMap<Item, u32>;
pub type ItemsetCounts = HashMap<Itemset, u32>;

pub type ItemsetLength = usize;
pub type FrequentItemsets = HashMap<ItemsetLength, ItemsetCounts>;

/// Item => remainder itemsets, best confidence first.
pub type AssociationMap = BTreeMap<Item, Vec<Itemset>>;
