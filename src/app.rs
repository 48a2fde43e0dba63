use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::{
    common::{
        clock::{Clock, SystemClock},
        error::AppError,
        event::LedgerEvent,
        money::Money,
    },
    domain::{
        category::CategoryBook,
        history::History,
        ledger::{GeneralLedger, LedgerEntry},
        transaction::{Genre, Transaction, TxId},
    },
    report::{self, DisplayMode, RangeSelector, ReportKind, Series},
    store::{self, CATEGORIES_KEY, HISTORY_KEY, LEDGER_KEY, MACHINES_KEY, Store},
    worker::processor::Processor,
};

/// Resolves a raw machine-name input to its display name. Alias resolution
/// and normalization live outside this crate; the default implementation
/// only trims.
pub trait NameResolver {
    fn resolve(&self, raw: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughResolver;

impl NameResolver for PassthroughResolver {
    fn resolve(&self, raw: &str) -> String {
        raw.trim().to_string()
    }
}

/// Form input for recording a session.
#[derive(Debug, Clone)]
pub struct RecordInput {
    pub date: NaiveDate,
    pub machine: String,
    pub genre: Genre,
    pub investment: Money,
    pub return_amount: Money,
}

// machine records are owned by the naming collaborator; only the name is read
#[derive(Debug, Clone, Default, serde::Deserialize)]
struct MachineRecord {
    name: String,
}

/// Snapshot of the mutable collections, taken before a mutating operation so
/// a failed store write can be rolled back.
struct Checkpoint {
    history: History,
    ledger: GeneralLedger,
    categories: CategoryBook,
}

/// A single-writer editing session over one blob store.
///
/// Collections are loaded once at open and written back after every mutating
/// operation. All reads go through the in-memory state, so a session is the
/// consistency boundary: an operation either commits on both ledgers or is
/// rolled back on both.
pub struct Session<S: Store> {
    store: S,
    clock: Box<dyn Clock>,
    resolver: Box<dyn NameResolver>,
    history: History,
    ledger: GeneralLedger,
    categories: CategoryBook,
    machines: Vec<String>,
    processor: Processor,
}

impl<S: Store> Session<S> {
    pub fn open(store: S) -> Result<Self, AppError> {
        Self::open_with(store, Box::new(SystemClock), Box::new(PassthroughResolver))
    }

    pub fn open_with(
        store: S,
        clock: Box<dyn Clock>,
        resolver: Box<dyn NameResolver>,
    ) -> Result<Self, AppError> {
        let history = History::from_items(store::load(&store, HISTORY_KEY)?);
        let ledger = GeneralLedger::from_entries(store::load(&store, LEDGER_KEY)?);
        let mut categories: CategoryBook = store::load(&store, CATEGORIES_KEY)?;
        categories.seed_defaults();
        let machines: Vec<MachineRecord> = store::load(&store, MACHINES_KEY)?;

        debug!(
            transactions = history.len(),
            entries = ledger.len(),
            "session opened"
        );
        Ok(Self {
            store,
            clock,
            resolver,
            history,
            ledger,
            categories,
            machines: machines.into_iter().map(|m| m.name).collect(),
            processor: Processor::new(),
        })
    }

    pub fn items(&self) -> &[Transaction] {
        self.history.items()
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        self.ledger.entries()
    }

    pub fn categories(&self) -> &CategoryBook {
        &self.categories
    }

    /// Display names from the collaborator-owned machine list.
    pub fn machine_names(&self) -> &[String] {
        &self.machines
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Records a session and its household mirror. Both collections are
    /// persisted before the call returns; on a store failure neither side
    /// is committed.
    pub fn record(&mut self, input: RecordInput) -> Result<TxId, AppError> {
        let machine = self.resolver.resolve(&input.machine);
        if machine.is_empty() {
            return Err(AppError::MissingField("machine"));
        }
        if input.investment.is_negative() {
            return Err(AppError::InvalidAmount(format!(
                "investment {}",
                input.investment
            )));
        }
        if input.return_amount.is_negative() {
            return Err(AppError::InvalidAmount(format!(
                "return {}",
                input.return_amount
            )));
        }

        let checkpoint = self.checkpoint();
        let id = self.history.next_id();
        let tx = Transaction::new(
            id,
            input.date,
            machine,
            input.genre,
            input.investment,
            input.return_amount,
        );
        self.history.append(tx.clone());
        self.processor.process(
            &mut self.ledger,
            &mut self.categories,
            &LedgerEvent::Recorded { tx },
        );
        self.commit(checkpoint)?;

        info!(id = id.0, "session recorded");
        Ok(id)
    }

    /// Deletes the session at `index` along with its mirror entry.
    pub fn delete(&mut self, index: usize) -> Result<Transaction, AppError> {
        let tx = self.take(index)?;
        info!(id = tx.id.0, "session deleted");
        Ok(tx)
    }

    /// Edit-extraction: removes the session (mirror included) and returns it
    /// so the form can re-submit an amended copy as a new record.
    pub fn extract(&mut self, index: usize) -> Result<Transaction, AppError> {
        let tx = self.take(index)?;
        info!(id = tx.id.0, "session extracted for edit");
        Ok(tx)
    }

    fn take(&mut self, index: usize) -> Result<Transaction, AppError> {
        let checkpoint = self.checkpoint();
        let tx = self.history.remove(index)?;
        self.processor.process(
            &mut self.ledger,
            &mut self.categories,
            &LedgerEvent::Deleted { tx: tx.clone() },
        );
        self.commit(checkpoint)?;
        Ok(tx)
    }

    /// Computes a report series against the current history snapshot.
    pub fn report(&self, kind: ReportKind, range: RangeSelector, mode: DisplayMode) -> Series {
        report::compute(self.history.items(), kind, range, mode, self.clock.today())
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            history: self.history.clone(),
            ledger: self.ledger.clone(),
            categories: self.categories.clone(),
        }
    }

    fn commit(&mut self, checkpoint: Checkpoint) -> Result<(), AppError> {
        if let Err(err) = self.persist() {
            warn!(error = %err, "persist failed, rolling back");
            self.history = checkpoint.history;
            self.ledger = checkpoint.ledger;
            self.categories = checkpoint.categories;
            // rewrite the prior blobs so the store matches the restored
            // state again; if that also fails the store lags the session
            // until the next successful commit
            if let Err(restore_err) = self.persist() {
                warn!(error = %restore_err, "rollback write failed, store lags the session");
            }
            return Err(err);
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<(), AppError> {
        store::save(&mut self.store, HISTORY_KEY, self.history.items())?;
        store::save(&mut self.store, LEDGER_KEY, self.ledger.entries())?;
        store::save(&mut self.store, CATEGORIES_KEY, &self.categories)?;
        Ok(())
    }
}
