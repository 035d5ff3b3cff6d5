//! End-to-end mining checked against a brute-force counter.

use apriori::{
    itemset::canonical,
    itemsets::{count::generate_frequent_itemsets, load::load_rows},
    mine,
    rules::rank::confidence_scores,
    FrequentItemsets, Item, ItemsetCounts, MinerConfig,
};
use itertools::Itertools;
use maplit::btreemap;
use proptest::prelude::*;
use std::collections::HashMap;

/// Counts every k-subset of every accepted row, then keeps `count >= support`.
fn reference_counts(rows: &[Vec<Item>], config: &MinerConfig) -> HashMap<usize, ItemsetCounts> {
    let accepted: Vec<Vec<Item>> = rows
        .iter()
        .map(|row| canonical(row.iter().copied()))
        .filter(|row| row.len() >= config.min_set_size)
        .collect();

    (1..=config.max_set_size)
        .map(|size| {
            let mut counts = ItemsetCounts::new();
            for row in &accepted {
                for itemset in row.iter().copied().combinations(size) {
                    *counts.entry(itemset).or_insert(0) += 1;
                }
            }
            counts.retain(|_, &mut count| count >= config.support);
            (size, counts)
        })
        .collect()
}

fn mine_rows(rows: &[Vec<Item>], config: &MinerConfig) -> FrequentItemsets {
    generate_frequent_itemsets(load_rows(rows.to_vec(), config), config)
}

fn to_text(rows: &[Vec<Item>]) -> String {
    rows.iter()
        .map(|row| row.iter().map(Item::to_string).join(" "))
        .join("\n")
}

fn assert_matches_reference(rows: &[Vec<Item>], config: &MinerConfig) {
    let frequent = mine_rows(rows, config);
    let empty = ItemsetCounts::new();
    for (size, expected) in reference_counts(rows, config) {
        assert_eq!(
            frequent.get(&size).unwrap_or(&empty),
            &expected,
            "size {}",
            size
        );
    }
}

#[test]
fn scenario_a_small_dense_dataset() {
    let rows = vec![
        vec![1, 2, 3],
        vec![1, 2],
        vec![1, 3],
        vec![2, 3],
        vec![1, 2, 3],
    ];
    let config = MinerConfig::new(2, 1, 2);

    assert_matches_reference(&rows, &config);

    let reference = reference_counts(&rows, &config);
    assert_eq!(reference[&1].len(), 3);
    assert_eq!(reference[&2].len(), 3);

    // singletons score count/accepted = 4/5, pairs score 3/4
    let mined = mine(to_text(&rows).as_bytes(), &config).unwrap();
    assert_eq!(
        mined.associations,
        btreemap! {
            1 => vec![vec![], vec![2], vec![3]],
            2 => vec![vec![], vec![1], vec![3]],
            3 => vec![vec![], vec![1], vec![2]],
        }
    );
}

#[test]
fn scenario_b_nothing_frequent_halts_after_level_one() {
    let rows = vec![vec![1, 2], vec![3, 4], vec![1, 3], vec![2, 4]];
    let config = MinerConfig::new(3, 2, 4);

    let mined = mine(to_text(&rows).as_bytes(), &config).unwrap();
    assert_eq!(mined.frequent.keys().copied().sorted().collect::<Vec<_>>(), vec![0, 1]);
    assert!(mined.frequent[&1].is_empty());
    assert!(mined.associations.is_empty());
}

#[test]
fn scenario_b_no_pair_survives() {
    let rows = vec![vec![1, 2], vec![1, 3], vec![2, 3]];
    let config = MinerConfig::new(2, 2, 3);

    let mined = mine(to_text(&rows).as_bytes(), &config).unwrap();
    assert_eq!(mined.frequent[&1].len(), 3);
    assert!(mined.frequent[&2].is_empty());
    assert!(!mined.frequent.contains_key(&3));
    assert!(mined.associations.is_empty());
}

#[test]
fn scenario_c_short_transactions_count_nowhere() {
    let rows = vec![vec![1, 2, 3], vec![1, 2, 3], vec![9], vec![4, 4]];
    let config = MinerConfig::new(1, 2, 3);

    let mined = mine(to_text(&rows).as_bytes(), &config).unwrap();
    assert_eq!(mined.accepted, 2);
    assert!(!mined.frequent[&1].contains_key(&vec![9]));
    assert!(!mined.frequent[&1].contains_key(&vec![4]));

    let without_short = mine("1 2 3\n1 2 3\n".as_bytes(), &config).unwrap();
    assert_eq!(mined, without_short);
}

#[test]
fn blank_lines_are_short_transactions() {
    let mined = mine("1 2\n\n1 2\n".as_bytes(), &MinerConfig::new(2, 1, 2)).unwrap();
    assert_eq!(mined.accepted, 2);
}

fn arb_rows() -> impl Strategy<Value = Vec<Vec<Item>>> {
    proptest::collection::vec(proptest::collection::vec(0i64..8, 0..6), 0..30)
}

fn arb_config() -> impl Strategy<Value = MinerConfig> {
    (1u32..4, 1usize..3, 0usize..3)
        .prop_map(|(support, min_set_size, extra)| {
            MinerConfig::new(support, min_set_size, min_set_size + extra)
        })
}

proptest! {
    #[test]
    fn mining_matches_brute_force(rows in arb_rows(), config in arb_config()) {
        let frequent = mine_rows(&rows, &config);
        let empty = ItemsetCounts::new();
        for (size, expected) in reference_counts(&rows, &config) {
            prop_assert_eq!(frequent.get(&size).unwrap_or(&empty), &expected);
        }
    }

    #[test]
    fn survivors_have_support_and_exact_size(rows in arb_rows(), config in arb_config()) {
        let frequent = mine_rows(&rows, &config);
        for (&size, itemset_counts) in frequent.iter().filter(|(&size, _)| size > 0) {
            for (itemset, &count) in itemset_counts {
                prop_assert!(count >= config.support);
                prop_assert_eq!(itemset.len(), size);
                prop_assert_eq!(&canonical(itemset.iter().copied()), itemset);
            }
        }
    }

    #[test]
    fn every_subset_of_a_frequent_itemset_is_frequent(rows in arb_rows(), config in arb_config()) {
        let frequent = mine_rows(&rows, &config);
        for (&size, itemset_counts) in frequent.iter().filter(|(&size, _)| size > 1) {
            for itemset in itemset_counts.keys() {
                for subset in itemset.iter().copied().combinations(size - 1) {
                    prop_assert!(frequent[&(size - 1)].contains_key(&subset));
                }
            }
        }
    }

    #[test]
    fn confidence_scores_are_positive_and_at_most_one(rows in arb_rows(), config in arb_config()) {
        let frequent = mine_rows(&rows, &config);
        let scores = confidence_scores(&frequent, &config).unwrap();
        for remainders in scores.values() {
            for &score in remainders.values() {
                prop_assert!(score.is_finite());
                prop_assert!(score > 0.0);
                prop_assert!(score <= 1.0);
            }
        }
    }
}
