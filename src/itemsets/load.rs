use std::collections::HashMap;
use std::io::BufRead;

use tracing::{debug, info};

use crate::{
    config::MinerConfig,
    error::{AprioriError, Result},
    itemset::canonical,
    types::{CandidatePool, Item, ItemCounts, Itemset, ItemsetCounts, ItemsetLength},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// Accepted transactions as size-1 candidate pools, plus the frequent
/// singletons counted over them.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTransactions {
    pub pools: Vec<CandidatePool>,
    pub singletons: ItemsetCounts,
    /// Number of transactions that passed the `min_set_size` filter.
    pub accepted: usize,
}

/// Turns one whitespace-separated record into a canonical itemset.
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_transaction(line: &str, line_no: usize) -> Result<Itemset> {
    let items = line
        .split_whitespace()
        .map(|token| {
            token.parse::<Item>().map_err(|_| AprioriError::Parse {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<Item>>>()?;
    Ok(canonical(items))
}

/// Reads one transaction per line from any buffered source.
pub fn load_transactions<R: BufRead>(reader: R, config: &MinerConfig) -> Result<LoadedTransactions> {
    let mut loader = Loader::new(config.min_set_size);
    for (index, line) in reader.lines().enumerate() {
        let items = parse_transaction(&line?, index + 1)?;
        loader.push(items);
    }
    Ok(loader.finish(config.support))
}

/// Same as [`load_transactions`] for rows that are already integers.
pub fn load_rows<I, T>(rows: I, config: &MinerConfig) -> LoadedTransactions
where
    I: IntoIterator<Item = T>,
    T: IntoIterator<Item = Item>,
{
    let mut loader = Loader::new(config.min_set_size);
    for row in rows {
        loader.push(canonical(row));
    }
    loader.finish(config.support)
}

struct Loader {
    min_set_size: ItemsetLength,
    pools: Vec<CandidatePool>,
    item_counts: ItemCounts,
    rejected: usize,
}

impl Loader {
    fn new(min_set_size: ItemsetLength) -> Self {
        Loader {
            min_set_size,
            pools: Vec::new(),
            item_counts: HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS),
            rejected: 0,
        }
    }

    /// `items` must already be canonical.
    fn push(&mut self, items: Itemset) {
        if items.len() < self.min_set_size {
            self.rejected += 1;
            return;
        }

        for &item in &items {
            *self.item_counts.entry(item).or_insert(0) += 1;
        }
        self.pools.push(items.into_iter().map(|item| vec![item]).collect());
    }

    fn finish(self, support: u32) -> LoadedTransactions {
        let Loader {
            pools,
            mut item_counts,
            rejected,
            ..
        } = self;
        let distinct = item_counts.len();

        // Prune
        item_counts.retain(|_, &mut support_count| support_count >= support);

        info!(
            accepted = pools.len(),
            rejected,
            distinct_items = distinct,
            frequent_items = item_counts.len(),
            "loaded transactions"
        );
        debug!(support, "pruned 1-itemsets");

        LoadedTransactions {
            accepted: pools.len(),
            pools,
            singletons: convert_to_itemset_counts(item_counts),
        }
    }
}

fn convert_to_itemset_counts(item_counts: ItemCounts) -> ItemsetCounts {
    item_counts.into_iter().map(|(k, v)| (vec![k], v)).collect()
}
