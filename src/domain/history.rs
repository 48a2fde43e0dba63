use crate::common::error::AppError;
use crate::domain::transaction::{Transaction, TxId};

/// The primary session history: a dumb ordered collection. Store order is
/// insertion order, not date order.
#[derive(Debug, Default, Clone)]
pub struct History {
    items: Vec<Transaction>,
    next_id: u64,
}

impl History {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds the ledger from a stored collection. The id counter resumes
    /// past the largest id seen, so ids never decrease within a session.
    pub fn from_items(items: Vec<Transaction>) -> Self {
        let next_id = items.iter().map(|tx| tx.id.0).max().unwrap_or(0) + 1;
        Self { items, next_id }
    }

    pub fn items(&self) -> &[Transaction] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reserves the id the next appended transaction will receive.
    pub fn next_id(&self) -> TxId {
        TxId(self.next_id)
    }

    pub fn append(&mut self, tx: Transaction) {
        self.next_id = self.next_id.max(tx.id.0 + 1);
        self.items.push(tx);
    }

    pub fn remove(&mut self, index: usize) -> Result<Transaction, AppError> {
        if index >= self.items.len() {
            return Err(AppError::IndexOutOfRange(index));
        }
        Ok(self.items.remove(index))
    }
}
