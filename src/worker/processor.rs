use crate::{
    common::event::LedgerEvent,
    domain::{category::CategoryBook, ledger::GeneralLedger},
    worker::handlers::{delete, record},
};

/// Applies history mutations to the household mirror. Pure in-memory
/// transform; persistence and rollback belong to the session layer.
#[derive(Debug, Default)]
pub struct Processor {}

impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(
        &mut self,
        ledger: &mut GeneralLedger,
        categories: &mut CategoryBook,
        event: &LedgerEvent,
    ) {
        match event {
            LedgerEvent::Recorded { tx } => {
                record::handle(ledger, categories, tx);
            }
            LedgerEvent::Deleted { tx } => {
                delete::handle(ledger, tx);
            }
        }
    }
}
