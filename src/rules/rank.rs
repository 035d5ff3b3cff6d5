use itertools::Itertools;
use std::collections::HashMap;
use tracing::info;

use crate::{
    config::MinerConfig,
    error::{AprioriError, Result},
    itemset::remainder,
    types::{AssociationMap, FrequentItemsets, Item, Itemset},
};

pub type ConfidenceScores = HashMap<Item, HashMap<Itemset, f64>>;

/// For every frequent itemset `G` with a size in
/// `min_set_size..=max_set_size` and every `x` in `G`, scores the remainder
/// `R = G \ {x}` for `x` with `count(G) / count(R)`.
///
/// `count(R)` is read from the untruncated tables, so a remainder one size
/// below `min_set_size` is still found. A missing remainder means candidate
/// generation or pruning is broken and is reported as
/// [`AprioriError::InvariantViolation`].
pub fn confidence_scores(
    frequent: &FrequentItemsets,
    config: &MinerConfig,
) -> Result<ConfidenceScores> {
    let mut scores: ConfidenceScores = HashMap::new();

    for size in config.min_set_size.max(1)..=config.max_set_size {
        let itemset_counts = match frequent.get(&size) {
            Some(itemset_counts) => itemset_counts,
            None => continue,
        };
        let remainder_counts = frequent.get(&(size - 1));

        for (itemset, &count) in itemset_counts {
            for &item in itemset {
                let remainder = remainder(itemset, item);
                let remainder_count = remainder_counts
                    .and_then(|counts| counts.get(&remainder))
                    .copied()
                    .filter(|&remainder_count| remainder_count > 0)
                    .ok_or_else(|| AprioriError::InvariantViolation {
                        remainder: remainder.clone(),
                        size: size - 1,
                    })?;

                *scores
                    .entry(item)
                    .or_default()
                    .entry(remainder)
                    .or_insert(0.0) += f64::from(count) / f64::from(remainder_count);
            }
        }
    }

    Ok(scores)
}

/// Per item, its remainders ordered by descending confidence. Ties fall back
/// to ascending remainder so the output is reproducible.
pub fn rank_associations(
    frequent: &FrequentItemsets,
    config: &MinerConfig,
) -> Result<AssociationMap> {
    let scores = confidence_scores(frequent, config)?;

    let associations: AssociationMap = scores
        .into_iter()
        .map(|(item, remainders)| {
            let ranked = remainders
                .into_iter()
                .sorted_by(|(left, left_score), (right, right_score)| {
                    right_score
                        .total_cmp(left_score)
                        .then_with(|| left.cmp(right))
                })
                .map(|(remainder, _)| remainder)
                .collect();
            (item, ranked)
        })
        .collect();

    info!(
        items = associations.len(),
        groups = associations.values().map(Vec::len).sum::<usize>(),
        "ranked associations"
    );

    Ok(associations)
}
