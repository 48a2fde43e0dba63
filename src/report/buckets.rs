use std::collections::{BTreeMap, HashMap};

use crate::common::money::Money;
use crate::domain::transaction::Transaction;

use super::{Point, Series};

pub(super) fn by_month(txs: &[Transaction]) -> Series {
    keyed(txs, |tx| tx.date.format("%Y-%m").to_string())
}

pub(super) fn by_year(txs: &[Transaction]) -> Series {
    keyed(txs, |tx| tx.date.format("%Y").to_string())
}

/// Buckets ordered ascending by key.
fn keyed<F>(txs: &[Transaction], key_for: F) -> Series
where
    F: Fn(&Transaction) -> String,
{
    let mut map: BTreeMap<String, Money> = BTreeMap::new();
    for tx in txs {
        *map.entry(key_for(tx)).or_insert_with(Money::zero) += tx.diff;
    }
    map.into_iter()
        .map(|(label, value)| Point { label, value })
        .collect()
}

/// Per-machine totals, best performers first. Ties keep the order the
/// machines first appeared in the history.
pub(super) fn by_machine(txs: &[Transaction]) -> Series {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, Money> = HashMap::new();
    for tx in txs {
        if !totals.contains_key(&tx.machine) {
            order.push(tx.machine.clone());
        }
        *totals.entry(tx.machine.clone()).or_insert_with(Money::zero) += tx.diff;
    }

    let mut series: Vec<Point> = order
        .into_iter()
        .map(|machine| Point {
            value: totals[&machine],
            label: machine,
        })
        .collect();
    // stable sort keeps first-seen order among equal totals
    series.sort_by(|a, b| b.value.cmp(&a.value));
    series
}
