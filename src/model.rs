use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    config::MinerConfig,
    error::{AprioriError, Result},
    itemsets::{count::generate_frequent_itemsets, load::load_transactions},
    persist,
    rules::{rank::rank_associations, search},
    types::{AssociationMap, FrequentItemsets, Item, Itemset, ItemsetLength},
};

/// Everything one mining run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Mined {
    /// Tables for every size that was counted, including size 0.
    pub frequent: FrequentItemsets,
    pub associations: AssociationMap,
    /// Transactions that passed the `min_set_size` filter.
    pub accepted: usize,
}

impl Mined {
    /// Number of frequent itemsets per size, for reporting.
    pub fn frequent_per_size(&self) -> BTreeMap<ItemsetLength, usize> {
        self.frequent
            .iter()
            .filter(|(&size, _)| size > 0)
            .map(|(&size, itemset_counts)| (size, itemset_counts.len()))
            .collect()
    }
}

/// Load, mine and rank in one pass over `reader`.
pub fn mine<R: BufRead>(reader: R, config: &MinerConfig) -> Result<Mined> {
    config.validate()?;

    let loaded = load_transactions(reader, config)?;
    let accepted = loaded.accepted;
    let frequent = generate_frequent_itemsets(loaded, config);
    let associations = rank_associations(&frequent, config)?;

    Ok(Mined {
        frequent,
        associations,
        accepted,
    })
}

/// Summary of a [`Apriori::find_frequent`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiningSummary {
    pub accepted: usize,
    pub frequent_per_size: BTreeMap<ItemsetLength, usize>,
    pub ranked_items: usize,
}

/// File-backed miner: reads transactions from `data`, writes the ranking to
/// `out`, and answers queries over whichever model it last mined or read.
#[derive(Debug, Default)]
pub struct Apriori {
    data: Option<PathBuf>,
    out: Option<PathBuf>,
    associations: Option<AssociationMap>,
}

impl Apriori {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data<P: Into<PathBuf>>(mut self, data: P) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, out: P) -> Self {
        self.out = Some(out.into());
        self
    }

    /// Mines the data file, persists the ranking to the output path and keeps
    /// it loaded for queries.
    pub fn find_frequent(&mut self, config: &MinerConfig) -> Result<MiningSummary> {
        let (data, out) = match (&self.data, &self.out) {
            (Some(data), Some(out)) => (data, out),
            _ => {
                return Err(AprioriError::Configuration(
                    "data or output path is not set".to_string(),
                ))
            }
        };
        config.validate()?;

        info!(
            data = %data.display(),
            support = config.support,
            min_set_size = config.min_set_size,
            max_set_size = config.max_set_size,
            "mining frequent itemsets"
        );
        let mined = mine(BufReader::new(File::open(data)?), config)?;
        persist::save_to_disk(out, &mined.associations)?;

        let summary = MiningSummary {
            accepted: mined.accepted,
            frequent_per_size: mined.frequent_per_size(),
            ranked_items: mined.associations.len(),
        };
        self.associations = Some(mined.associations);
        Ok(summary)
    }

    /// Replaces the loaded model with one persisted earlier.
    pub fn read_data<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.associations = Some(persist::load_from_disk(path.as_ref())?);
        Ok(())
    }

    pub fn associations(&self) -> Option<&AssociationMap> {
        self.associations.as_ref()
    }

    pub fn frequent_list_of(
        &self,
        wanted_items: &[Item],
        detected_items: &[Item],
    ) -> Result<BTreeMap<Item, Vec<Itemset>>> {
        let associations = self
            .associations
            .as_ref()
            .ok_or(AprioriError::ModelNotLoaded)?;
        Ok(search::frequent_list_of(
            associations,
            wanted_items,
            detected_items,
        ))
    }
}
