use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::money::Money;
use crate::domain::transaction::TxId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

/// A generic income/expense record in the household ledger. Field names keep
/// the persisted layout of the original store (`type`, `mainCategory`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: EntryId,
    /// Back-reference to the session the entry mirrors. `None` for entries
    /// recorded by hand or loaded from blobs that predate the reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<TxId>,
    pub date: NaiveDate,
    pub amount: Money,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(rename = "mainCategory")]
    pub category: String,
    pub memo: String,
}

/// The general-purpose household ledger.
#[derive(Debug, Default, Clone)]
pub struct GeneralLedger {
    entries: Vec<LedgerEntry>,
    next_id: u64,
}

impl GeneralLedger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn from_entries(entries: Vec<LedgerEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id.0).max().unwrap_or(0) + 1;
        Self { entries, next_id }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_id(&self) -> EntryId {
        EntryId(self.next_id)
    }

    pub fn append(&mut self, entry: LedgerEntry) {
        self.next_id = self.next_id.max(entry.id.0 + 1);
        self.entries.push(entry);
    }

    /// Removes **every** entry satisfying the predicate and reports how many
    /// went. The mirror synchronizer depends on the remove-all semantics.
    pub fn remove_where<F>(&mut self, pred: F) -> usize
    where
        F: Fn(&LedgerEntry) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|entry| !pred(entry));
        before - self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, amount: i64) -> LedgerEntry {
        LedgerEntry {
            id: EntryId(id),
            source: None,
            date: "2024-01-01".parse().unwrap(),
            amount: Money::new(amount),
            kind: EntryKind::Expense,
            category: "Food".to_string(),
            memo: String::new(),
        }
    }

    #[test]
    fn remove_where_removes_every_match() {
        let mut ledger = GeneralLedger::new();
        ledger.append(entry(1, 500));
        ledger.append(entry(2, 500));
        ledger.append(entry(3, 900));

        let removed = ledger.remove_where(|e| e.amount == Money::new(500));
        assert_eq!(removed, 2);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entries()[0].id, EntryId(3));
    }

    #[test]
    fn remove_where_with_no_match_is_a_noop() {
        let mut ledger = GeneralLedger::new();
        ledger.append(entry(1, 500));

        let removed = ledger.remove_where(|e| e.amount == Money::new(9999));
        assert_eq!(removed, 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn id_counter_resumes_past_loaded_ids() {
        let ledger = GeneralLedger::from_entries(vec![entry(5, 100)]);
        assert_eq!(ledger.next_id(), EntryId(6));
    }

    #[test]
    fn serializes_with_legacy_field_names() {
        let json = serde_json::to_value(entry(1, 500)).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["mainCategory"], "Food");
        assert!(json.get("source").is_none());
    }

    #[test]
    fn deserializes_legacy_blob_without_source() {
        let json = r#"{
            "id": 3,
            "date": "2023-10-01",
            "amount": 1200,
            "type": "income",
            "mainCategory": "Salary",
            "memo": ""
        }"#;
        let e: LedgerEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.source, None);
        assert_eq!(e.kind, EntryKind::Income);
    }
}
