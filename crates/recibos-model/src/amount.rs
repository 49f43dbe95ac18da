use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};

/// Monetary amount. Displays with exactly two decimals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Value rounded half away from zero to cents.
    pub fn cents(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Sum of both amounts, or `None` when it does not fit in a `Decimal`.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Adds every amount, or `None` on overflow.
    pub fn checked_sum<I: IntoIterator<Item = Amount>>(amounts: I) -> Option<Amount> {
        amounts
            .into_iter()
            .try_fold(Amount::ZERO, Amount::checked_add)
    }

    /// Formats as `{currency}{value}` with two decimals, e.g. `$50.00`.
    pub fn display_with(&self, currency: &str) -> String {
        format!("{currency}{self}")
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.cents())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Amount::new(Decimal::new(50, 0)).to_string(), "50.00");
        assert_eq!(Amount::new(Decimal::new(105, 1)).to_string(), "10.50");
        assert_eq!(Amount::new(Decimal::new(12345, 3)).to_string(), "12.35");
        assert_eq!(Amount::ZERO.to_string(), "0.00");
    }

    #[test]
    fn display_with_currency() {
        let amount = Amount::new(Decimal::new(6000, 2));
        assert_eq!(amount.display_with("$"), "$60.00");
        assert_eq!(amount.display_with("Bs. "), "Bs. 60.00");
    }

    #[test]
    fn sums_amounts() {
        let total = Amount::checked_sum(
            [Decimal::new(5000, 2), Decimal::new(10, 0)]
                .into_iter()
                .map(Amount::new),
        );
        assert_eq!(total, Some(Amount::new(Decimal::new(60, 0))));
        assert_eq!(Amount::checked_sum([]), Some(Amount::ZERO));
    }

    #[test]
    fn overflowing_sum_is_none() {
        let half = Amount::new(Decimal::from_scientific("5e28").unwrap());
        assert_eq!(half.checked_add(half), None);
        assert_eq!(Amount::checked_sum([Amount::new(Decimal::MAX), half]), None);
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(Amount::new(Decimal::new(-2505, 3)).to_string(), "-2.51");
    }
}
