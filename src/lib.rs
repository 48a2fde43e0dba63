//! Session tracker for pachinko/pachislot results with a mirrored household
//! ledger and chart-ready report series.
//!
//! The crate is UI-agnostic: collections live behind a whole-blob [`store`],
//! the [`app::Session`] facade owns the load/save lifecycle and keeps the two
//! ledgers consistent under insert and delete, and [`report`] turns the flat
//! history into windowed, grouped, cumulative series.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod report;
pub mod store;
pub mod worker;
