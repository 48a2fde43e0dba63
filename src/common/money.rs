use bigdecimal::BigDecimal;
use bigdecimal::*;
use num_format::{Locale, ToFormattedString};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// A struct representing a monetary value in whole yen.
///
/// # Why Use Money? It is a Value Object.
/// Using `Money` as a wrapper around `i64` provides type safety and prevents confusion
/// with other numeric values. Session amounts (investment, return) are non-negative,
/// but a profit/loss difference may be negative, so the full signed range is kept.
/// Storing yen as an integer avoids floating-point precision issues in sums.
///
/// # Examples
/// ```
/// use pachi_ledger::common::money::Money;
///
/// let amount = Money::new(1000); // 1,000 yen
/// assert_eq!(amount.as_i64(), 1000);
/// assert_eq!(amount.to_string_grouped(), "1,000");
/// assert_eq!(amount.to_string_signed(), "+1,000");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Digit-grouped rendering without a sign for positive values, e.g. `1,000`.
    pub fn to_string_grouped(&self) -> String {
        if self.0 < 0 {
            format!("-{}", self.0.unsigned_abs().to_formatted_string(&Locale::en))
        } else {
            self.0.to_formatted_string(&Locale::en)
        }
    }

    /// Digit-grouped rendering with an explicit sign for zero and wins, e.g.
    /// `+1,000` / `-1,000` / `+0`. Used by the mirror memo derivation.
    pub fn to_string_signed(&self) -> String {
        if self.0 >= 0 {
            format!("+{}", self.to_string_grouped())
        } else {
            self.to_string_grouped()
        }
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Round to whole yen
        let value: i64 = bd
            .round(0)
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_grouped())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(Money::zero(), Money(0));
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(Money(12345).as_i64(), 12345);
        assert_eq!(Money::zero().as_i64(), 0);
        assert_eq!(Money(-999).as_i64(), -999);
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Money::from_str("1000").unwrap(), Money(1000));
        assert_eq!(Money::from_str("  20000 ").unwrap(), Money(20000));
        assert_eq!(Money::from_str("-1500").unwrap(), Money(-1500));
    }

    #[test]
    fn test_from_str_rounds_to_whole_yen() {
        assert_eq!(Money::from_str("999.6").unwrap(), Money(1000));
        assert_eq!(Money::from_str("0.4").unwrap(), Money(0));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("abc").is_err());
    }

    #[test]
    fn test_grouped_display() {
        assert_eq!(Money(0).to_string_grouped(), "0");
        assert_eq!(Money(999).to_string_grouped(), "999");
        assert_eq!(Money(1000).to_string_grouped(), "1,000");
        assert_eq!(Money(1234567).to_string_grouped(), "1,234,567");
        assert_eq!(Money(-20500).to_string_grouped(), "-20,500");
    }

    #[test]
    fn test_signed_display() {
        assert_eq!(Money(1000).to_string_signed(), "+1,000");
        assert_eq!(Money(0).to_string_signed(), "+0");
        assert_eq!(Money(-1000).to_string_signed(), "-1,000");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money(10000).to_string(), "10,000");
        assert_eq!(Money(500).to_string(), "500");
    }

    #[test]
    fn test_abs() {
        assert_eq!(Money(-1000).abs(), Money(1000));
        assert_eq!(Money(1000).abs(), Money(1000));
        assert_eq!(Money::zero().abs(), Money::zero());
    }

    #[test]
    fn test_add() {
        assert_eq!(Money(10000) + Money(5000), Money(15000));
        assert_eq!(Money::zero() + Money(100), Money(100));
    }

    #[test]
    fn test_sub() {
        assert_eq!(Money(15000) - Money(5000), Money(10000));
        assert_eq!(Money(1000) - Money(3000), Money(-2000));
    }

    #[test]
    fn test_add_assign() {
        let mut m = Money(10000);
        m += Money(5000);
        assert_eq!(m, Money(15000));
    }

    #[test]
    fn test_sub_assign() {
        let mut m = Money(15000);
        m -= Money(5000);
        assert_eq!(m, Money(10000));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money(100), Money(-300), Money(50)].into_iter().sum();
        assert_eq!(total, Money(-150));
    }

    #[test]
    fn test_ordering() {
        assert!(Money(10000) < Money(15000));
        assert!(Money(-100) < Money::zero());
        assert!(Money(10000) <= Money(10000));
    }

    #[test]
    fn test_serde_as_plain_integer() {
        let json = serde_json::to_string(&Money(-1500)).unwrap();
        assert_eq!(json, "-1500");
        let back: Money = serde_json::from_str("-1500").unwrap();
        assert_eq!(back, Money(-1500));
    }
}
