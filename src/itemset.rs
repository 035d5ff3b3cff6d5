use itertools::Itertools;
use std::collections::HashSet;

use crate::types::{Item, Itemset};

/// Sorted, duplicate-free form of a bag of items. Every itemset in the crate
/// goes through here so equal sets compare and hash equal.
pub fn canonical<I>(items: I) -> Itemset
where
    I: IntoIterator<Item = Item>,
{
    items.into_iter().sorted_unstable().dedup().collect()
}

/// `itemset` without `item`, still canonical.
pub fn remainder(itemset: &[Item], item: Item) -> Itemset {
    itemset.iter().copied().filter(|&x| x != item).collect()
}

pub fn is_covered_by(itemset: &[Item], items: &HashSet<Item>) -> bool {
    itemset.iter().all(|item| items.contains(item))
}

pub fn is_canonical(itemset: &[Item]) -> bool {
    itemset.windows(2).all(|pair| pair[0] < pair[1])
}
