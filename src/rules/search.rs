use std::collections::{BTreeMap, HashSet};

use crate::{
    itemset::is_covered_by,
    types::{AssociationMap, Item, Itemset},
};

/// For each wanted item that has associations, the groups (in rank order)
/// whose members were all detected.
pub fn frequent_list_of(
    associations: &AssociationMap,
    wanted_items: &[Item],
    detected_items: &[Item],
) -> BTreeMap<Item, Vec<Itemset>> {
    let detected: HashSet<Item> = detected_items.iter().copied().collect();

    wanted_items
        .iter()
        .filter_map(|item| associations.get_key_value(item))
        .map(|(&item, groups)| {
            let plausible = groups
                .iter()
                .filter(|group| is_covered_by(group, &detected))
                .cloned()
                .collect();
            (item, plausible)
        })
        .collect()
}
