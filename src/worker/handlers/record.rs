use crate::{
    domain::{category::CategoryBook, ledger::GeneralLedger, transaction::Transaction},
    worker::mirror,
};

pub fn handle(ledger: &mut GeneralLedger, categories: &mut CategoryBook, tx: &Transaction) {
    let id = ledger.next_id();
    ledger.append(mirror::entry_for(tx, id));

    // the sentinel category may be missing on first use or after an external
    // category wipe
    categories.ensure_expense(mirror::SENTINEL_CATEGORY);
}
