use itertools::Itertools;

use crate::types::{Item, Itemset};

/// Join step of Apriori: every pair of size-(k-1) itemsets sharing all but
/// their last item yields one size-k candidate. Output is lexicographically
/// sorted and never holds the same candidate twice.
///
/// https://github.com/tommyod/Efficient-Apriori/blob/master/efficient_apriori/itemsets.py
pub fn join_step(mut itemsets: Vec<Itemset>) -> Vec<Itemset> {
    if itemsets.is_empty() {
        return vec![];
    }

    // pools arrive sorted from the previous level; this is a no-op pass then
    itemsets.sort_unstable();
    itemsets.dedup();

    let mut final_itemsets: Vec<Itemset> = Vec::new();
    let mut tail_items: Vec<Item> = Vec::with_capacity(itemsets.len());

    let mut i = 0;
    while i < itemsets.len() {
        let (&itemset_last, itemset_first) = match itemsets[i].split_last() {
            Some(split) => split,
            None => {
                i += 1;
                continue;
            }
        };

        tail_items.clear();
        tail_items.push(itemset_last);

        let mut j = i + 1;
        while j < itemsets.len() {
            match itemsets[j].split_last() {
                Some((&itemset_n_last, itemset_n_first)) if itemset_n_first == itemset_first => {
                    tail_items.push(itemset_n_last);
                    j += 1;
                }
                _ => break,
            }
        }

        for (&a, &b) in tail_items.iter().tuple_combinations() {
            let mut candidate = Vec::with_capacity(itemset_first.len() + 2);
            candidate.extend_from_slice(itemset_first);
            candidate.push(a);
            candidate.push(b);
            final_itemsets.push(candidate);
        }

        i = j;
    }

    final_itemsets
}
