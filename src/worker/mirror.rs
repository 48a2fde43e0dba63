use crate::domain::ledger::{EntryId, EntryKind, LedgerEntry};
use crate::domain::transaction::Transaction;

/// Fixed category every mirrored entry is tagged with.
pub const SENTINEL_CATEGORY: &str = "Pachinko/Slot";

/// Memo text for a mirrored entry, e.g. `Hokuto no Ken (+1,000円)`. The
/// derivation is deterministic: the structural delete predicate rebuilds the
/// same string to recognize legacy mirrors.
pub fn memo_for(tx: &Transaction) -> String {
    format!("{} ({}円)", tx.machine, tx.diff.to_string_signed())
}

fn kind_for(tx: &Transaction) -> EntryKind {
    if tx.diff.is_negative() {
        EntryKind::Expense
    } else {
        EntryKind::Income
    }
}

/// Derives the household-ledger mirror of a session record. The amount is the
/// absolute profit/loss; the sign lives in `kind`.
pub fn entry_for(tx: &Transaction, id: EntryId) -> LedgerEntry {
    LedgerEntry {
        id,
        source: Some(tx.id),
        date: tx.date,
        amount: tx.diff.abs(),
        kind: kind_for(tx),
        category: SENTINEL_CATEGORY.to_string(),
        memo: memo_for(tx),
    }
}

/// Structural identity test used for entries that carry no back-reference:
/// every derived field must match exactly. Two sessions with the same date,
/// machine and diff are indistinguishable under this predicate.
pub fn matches(entry: &LedgerEntry, tx: &Transaction) -> bool {
    entry.category == SENTINEL_CATEGORY
        && entry.date == tx.date
        && entry.kind == kind_for(tx)
        && entry.amount == tx.diff.abs()
        && entry.memo == memo_for(tx)
}
