//! Report series computation. A stateless fold over the session history:
//! nothing here reads ambient state, the caller supplies the transaction
//! list and the reference date.

use chrono::NaiveDate;

use crate::common::money::Money;
use crate::domain::transaction::Transaction;

mod buckets;
mod daily;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Cumulative running total, one point per day or per data day.
    Daily,
    /// Sum of diffs per `YYYY-MM` bucket.
    Monthly,
    /// Sum of diffs per `YYYY` bucket.
    Yearly,
    /// Sum of diffs per machine, best performers first.
    ByMachine,
}

/// Lookback window for the daily report. Two deliberately distinct policies:
/// `Days` subtracts a fixed day count, `Months`/`Years` subtract calendar
/// units (which can land on a different day-of-month than a day count would).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSelector {
    All,
    Days(u32),
    Months(u32),
    Years(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// One point per calendar day in the window, zero-delta days included.
    AllDays,
    /// Points only on days that have at least one transaction.
    OnlyData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub label: String,
    pub value: Money,
}

pub type Series = Vec<Point>;

/// Computes the report series for a chart. `today` is the caller's clock
/// truncated to day granularity; range and display mode only affect the
/// daily report.
pub fn compute(
    txs: &[Transaction],
    kind: ReportKind,
    range: RangeSelector,
    mode: DisplayMode,
    today: NaiveDate,
) -> Series {
    match kind {
        ReportKind::Daily => daily::cumulative(txs, range, mode, today),
        ReportKind::Monthly => buckets::by_month(txs),
        ReportKind::Yearly => buckets::by_year(txs),
        ReportKind::ByMachine => buckets::by_machine(txs),
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use crate::domain::transaction::{Genre, TxId};

    /// Builds a transaction where only date, machine and diff matter.
    pub fn tx(date: &str, machine: &str, diff: i64) -> Transaction {
        let (investment, ret) = if diff >= 0 { (0, diff) } else { (-diff, 0) };
        Transaction::new(
            TxId(0),
            date.parse().unwrap(),
            machine.to_string(),
            Genre::Pachislot,
            Money::new(investment),
            Money::new(ret),
        )
    }

    pub fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }
}
