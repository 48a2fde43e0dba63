use crate::domain::transaction::Transaction;

/// Represents a history mutation that is sent to the worker so the general
/// ledger mirror can be kept in step.
#[derive(Debug)]
pub enum LedgerEvent {
    Recorded { tx: Transaction },
    Deleted { tx: Transaction },
}
