use std::collections::BTreeMap;

use chrono::{Days, Months, NaiveDate};

use crate::common::money::Money;
use crate::domain::transaction::Transaction;

use super::{DisplayMode, Point, RangeSelector, Series};

/// Cumulative profit/loss over the selected window.
///
/// The running total starts at the sum of every diff dated strictly before
/// the window, so a trimmed window still shows the true cumulative position.
pub(super) fn cumulative(
    txs: &[Transaction],
    range: RangeSelector,
    mode: DisplayMode,
    today: NaiveDate,
) -> Series {
    let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for tx in txs {
        *by_date.entry(tx.date).or_insert_with(Money::zero) += tx.diff;
    }

    let first = by_date.keys().next().copied().unwrap_or(today);
    let start = start_date(range, first, today);

    let mut total: Money = by_date
        .range(..start)
        .map(|(_, delta)| *delta)
        .sum();

    let mut series = Vec::new();
    match mode {
        DisplayMode::AllDays => {
            for day in start.iter_days() {
                if day > today {
                    break;
                }
                total += by_date.get(&day).copied().unwrap_or_else(Money::zero);
                series.push(point(day, total));
            }
        }
        DisplayMode::OnlyData => {
            for (day, delta) in by_date.range(start..=today) {
                total += *delta;
                series.push(point(*day, total));
            }
        }
    }
    series
}

fn point(day: NaiveDate, value: Money) -> Point {
    Point {
        label: day.format("%Y-%m-%d").to_string(),
        value,
    }
}

fn start_date(range: RangeSelector, first: NaiveDate, today: NaiveDate) -> NaiveDate {
    match range {
        RangeSelector::All => first,
        // day-count policy: an n-day window ends today inclusive
        RangeSelector::Days(n) => today
            .checked_sub_days(Days::new(u64::from(n.saturating_sub(1))))
            .unwrap_or(NaiveDate::MIN),
        // calendar-unit policy: month arithmetic clamps the day-of-month
        RangeSelector::Months(m) => today
            .checked_sub_months(Months::new(m))
            .unwrap_or(NaiveDate::MIN),
        RangeSelector::Years(y) => today
            .checked_sub_months(Months::new(y.saturating_mul(12)))
            .unwrap_or(NaiveDate::MIN),
    }
}
