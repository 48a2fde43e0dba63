use crate::{
    domain::{ledger::GeneralLedger, transaction::Transaction},
    worker::mirror,
};

/// Removes the mirror of a deleted session record. Entries carrying a
/// back-reference are matched by it; only when none match does the structural
/// predicate run, covering entries recorded before back-references existed.
/// Zero removals is tolerated: the mirror may never have been created.
pub fn handle(ledger: &mut GeneralLedger, tx: &Transaction) -> usize {
    let removed = ledger.remove_where(|e| e.source == Some(tx.id));
    if removed > 0 {
        return removed;
    }

    ledger.remove_where(|e| e.source.is_none() && mirror::matches(e, tx))
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::{
        common::money::Money,
        domain::{
            ledger::{EntryId, GeneralLedger},
            transaction::{Genre, Transaction, TxId},
        },
        worker::mirror,
    };

    fn tx(id: u64, machine: &str, date: &str, investment: i64, ret: i64) -> Transaction {
        Transaction::new(
            TxId(id),
            date.parse().unwrap(),
            machine.to_string(),
            Genre::Pachinko,
            Money::new(investment),
            Money::new(ret),
        )
    }

    fn mirror_of(tx: &Transaction, entry_id: u64) -> crate::domain::ledger::LedgerEntry {
        mirror::entry_for(tx, EntryId(entry_id))
    }

    fn legacy_mirror_of(tx: &Transaction, entry_id: u64) -> crate::domain::ledger::LedgerEntry {
        let mut entry = mirror_of(tx, entry_id);
        entry.source = None;
        entry
    }

    #[test]
    fn delete_by_back_reference_removes_exactly_one() {
        let a = tx(1, "Eva", "2024-01-05", 1000, 2000);
        let b = tx(2, "Eva", "2024-01-05", 1000, 2000); // structural twin of a

        let mut ledger = GeneralLedger::new();
        ledger.append(mirror_of(&a, 1));
        ledger.append(mirror_of(&b, 2));

        let removed = handle(&mut ledger, &a);
        assert_eq!(removed, 1);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entries()[0].source, Some(TxId(2)));
    }

    #[test]
    fn legacy_delete_falls_back_to_structural_match() {
        let a = tx(0, "Eva", "2024-01-05", 1000, 2000);

        let mut ledger = GeneralLedger::new();
        ledger.append(legacy_mirror_of(&a, 1));

        let removed = handle(&mut ledger, &a);
        assert_eq!(removed, 1);
        assert!(ledger.is_empty());
    }

    #[test]
    fn legacy_structural_twins_are_both_removed() {
        // the documented over-deletion of the field-matching design
        let a = tx(0, "Eva", "2024-01-05", 1000, 2000);
        let twin = tx(0, "Eva", "2024-01-05", 3000, 4000); // same diff, date, machine

        let mut ledger = GeneralLedger::new();
        ledger.append(legacy_mirror_of(&a, 1));
        ledger.append(legacy_mirror_of(&twin, 2));

        let removed = handle(&mut ledger, &a);
        assert_eq!(removed, 2);
        assert!(ledger.is_empty());
    }

    #[test]
    fn structural_fallback_spares_back_referenced_entries() {
        let legacy = tx(0, "Eva", "2024-01-05", 1000, 2000);
        let linked = tx(7, "Eva", "2024-01-05", 1000, 2000);

        let mut ledger = GeneralLedger::new();
        ledger.append(mirror_of(&linked, 1));

        // no legacy mirror exists; the linked twin must survive
        let removed = handle(&mut ledger, &legacy);
        assert_eq!(removed, 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn zero_matches_is_tolerated() {
        let a = tx(1, "Eva", "2024-01-05", 1000, 2000);
        let mut ledger = GeneralLedger::new();

        let removed = handle(&mut ledger, &a);
        assert_eq!(removed, 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn unrelated_entries_survive_deletion() {
        let a = tx(1, "Eva", "2024-01-05", 1000, 2000);
        let other = tx(2, "Juggler", "2024-01-06", 500, 0);

        let mut ledger = GeneralLedger::new();
        ledger.append(mirror_of(&a, 1));
        ledger.append(mirror_of(&other, 2));

        handle(&mut ledger, &a);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entries()[0].source, Some(TxId(2)));
    }
}
