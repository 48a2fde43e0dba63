use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::money::Money;

/// Identifier assigned to a transaction by the history ledger. Serialized so
/// mirror entries can carry a back-reference across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Pachinko,
    Pachislot,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Pachinko => "pachinko",
            Genre::Pachislot => "pachislot",
        }
    }
}

/// A single recorded gambling session. `diff` is computed once at
/// construction and stored; aggregation reads it directly and never
/// recomputes it from the investment/return pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    // legacy blobs predate ids; they load as 0 and stay unlinked
    #[serde(default)]
    pub id: TxId,
    pub date: NaiveDate,
    pub machine: String,
    pub genre: Genre,
    pub investment: Money,
    #[serde(rename = "return")]
    pub return_amount: Money,
    pub diff: Money,
}

impl Transaction {
    pub fn new(
        id: TxId,
        date: NaiveDate,
        machine: String,
        genre: Genre,
        investment: Money,
        return_amount: Money,
    ) -> Self {
        Self {
            id,
            date,
            machine,
            genre,
            investment,
            return_amount,
            diff: return_amount - investment,
        }
    }
}
