use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::{
    combi::join_step,
    config::MinerConfig,
    itemsets::load::LoadedTransactions,
    types::{CandidatePool, FrequentItemsets, Itemset, ItemsetCounts},
};

/// Support counts of one level, accumulated transaction by transaction.
///
/// Each transaction only ever adds one to each candidate it generated, so
/// counters built over disjoint sets of transactions combine with [`merge`].
///
/// [`merge`]: LevelCounter::merge
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LevelCounter {
    counts: ItemsetCounts,
}

impl LevelCounter {
    pub fn observe(&mut self, candidates: &[Itemset]) {
        for candidate in candidates {
            *self.counts.entry(candidate.to_owned()).or_insert(0) += 1;
        }
    }

    pub fn merge(self, other: LevelCounter) -> LevelCounter {
        let (mut larger, smaller) = if self.counts.len() >= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        for (itemset, count) in smaller.counts {
            *larger.counts.entry(itemset).or_insert(0) += count;
        }
        larger
    }

    /// Number of distinct candidates seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Keeps exactly the candidates with `count >= support`.
    pub fn prune(self, support: u32) -> ItemsetCounts {
        let mut counts = self.counts;
        counts.retain(|_, &mut support_count| support_count >= support);
        counts
    }
}

/// Level-wise Apriori over the loaded candidate pools.
///
/// The result holds one table per size that was counted, starting with the
/// size-0 table (the empty itemset, present in every accepted transaction)
/// and the pruned singletons.
pub fn generate_frequent_itemsets(
    loaded: LoadedTransactions,
    config: &MinerConfig,
) -> FrequentItemsets {
    let LoadedTransactions {
        mut pools,
        singletons,
        accepted,
    } = loaded;

    let mut all_frequent_itemsets: FrequentItemsets =
        HashMap::with_capacity(config.max_set_size + 1);
    let mut empty_itemset_counts = ItemsetCounts::with_capacity(1);
    empty_itemset_counts.insert(vec![], accepted as u32);
    all_frequent_itemsets.insert(0, empty_itemset_counts);
    all_frequent_itemsets.insert(1, singletons);

    let mut size = 2;
    // a frequent k-itemset needs at least k frequent (k-1)-itemsets to exist
    while size <= config.max_set_size
        && all_frequent_itemsets
            .get(&(size - 1))
            .map_or(0, |itemset_counts| itemset_counts.len())
            >= size
    {
        let counter = count_level(&mut pools, &all_frequent_itemsets[&(size - 1)]);
        let num_candidates = counter.len();
        let frequent_itemset_counts = counter.prune(config.support);

        info!(
            size,
            candidates = num_candidates,
            frequent = frequent_itemset_counts.len(),
            "counted itemsets"
        );

        // fewer than two candidates cannot join into anything larger
        pools.retain(|pool| pool.len() >= 2);
        debug!(size, live_transactions = pools.len(), "narrowed candidate pools");

        all_frequent_itemsets.insert(size, frequent_itemset_counts);
        size += 1;
    }

    all_frequent_itemsets
}

/// One level: narrow every pool to the previous level's survivors, join, and
/// count what each transaction generated.
fn count_level(pools: &mut [CandidatePool], prev_itemset_counts: &ItemsetCounts) -> LevelCounter {
    pools
        .par_iter_mut()
        .fold(LevelCounter::default, |mut counter, pool| {
            let surviving: Vec<Itemset> = pool
                .drain(..)
                .filter(|itemset| prev_itemset_counts.contains_key(itemset))
                .collect();
            *pool = join_step(surviving);
            counter.observe(pool);
            counter
        })
        .reduce(LevelCounter::default, LevelCounter::merge)
}
