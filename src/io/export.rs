use std::io::Write;

use crate::domain::transaction::Transaction;
use crate::report::Series;

#[derive(serde::Serialize)]
/// Internal CSV output row for a session record, matching the history layout.
///
/// Headers written (in this order): `date,machine,genre,investment,return,diff`.
/// Monetary fields are plain yen integers.
struct HistoryRow<'a> {
    date: String,
    machine: &'a str,
    genre: &'static str,
    investment: i64,
    #[serde(rename = "return")]
    return_amount: i64,
    diff: i64,
}

/// Writes the session history to a CSV writer, in store order.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use pachi_ledger::common::money::Money;
/// use pachi_ledger::domain::transaction::{Genre, Transaction, TxId};
/// use pachi_ledger::io::export::write_history;
///
/// let txs = vec![Transaction::new(
///     TxId(1),
///     "2024-01-05".parse().unwrap(),
///     "Juggler".to_string(),
///     Genre::Pachislot,
///     Money::new(10000),
///     Money::new(12500),
/// )];
///
/// let mut out = Vec::new();
/// write_history(&mut out, &txs).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("date,machine,genre,investment,return,diff\n"));
/// assert!(s.contains("2024-01-05,Juggler,pachislot,10000,12500,2500"));
/// ```
pub fn write_history<W: Write>(writer: W, txs: &[Transaction]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for tx in txs {
        let row = HistoryRow {
            date: tx.date.format("%Y-%m-%d").to_string(),
            machine: &tx.machine,
            genre: tx.genre.as_str(),
            investment: tx.investment.as_i64(),
            return_amount: tx.return_amount.as_i64(),
            diff: tx.diff.as_i64(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[derive(serde::Serialize)]
struct SeriesRow<'a> {
    label: &'a str,
    value: i64,
}

/// Writes a computed report series to a CSV writer with `label,value` headers.
pub fn write_series<W: Write>(writer: W, series: &Series) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for point in series {
        wtr.serialize(SeriesRow {
            label: &point.label,
            value: point.value.as_i64(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
