use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::domain::{is_reserved, transaction::Transaction, INCOME_ACCOUNT};

/// Transactions whose date falls inside `[start, end]`, bounds included,
/// in input order.
///
/// Dates compare as raw strings, which orders ISO `YYYY-MM-DD` values
/// chronologically. A malformed date still takes part in the comparison,
/// with no calendar meaning.
pub fn filter_by_date_range<'a>(
    txns: &'a [Transaction],
    start: &str,
    end: &str,
) -> Vec<&'a Transaction> {
    txns.iter()
        .filter(|txn| start <= txn.date.as_str() && txn.date.as_str() <= end)
        .collect()
}

/// Sum of the absolute amounts booked on the income account.
pub fn total_income(txns: &[Transaction]) -> Decimal {
    txns.iter()
        .filter(|txn| txn.account == INCOME_ACCOUNT)
        .map(|txn| txn.amount.abs())
        .sum()
}

/// Sum of the positive amounts booked outside the reserved accounts.
/// Negative amounts on expense accounts (refunds) do not reduce the total.
pub fn total_expenses(txns: &[Transaction]) -> Decimal {
    txns.iter()
        .filter(|txn| !is_reserved(&txn.account) && txn.amount > Decimal::ZERO)
        .map(|txn| txn.amount)
        .sum()
}

/// The first transaction holding the strictly largest amount outside the
/// reserved accounts.
///
/// Unlike [`total_expenses`] the candidate set keeps negative amounts;
/// they just never beat the zero-seeded maximum, so an account list whose
/// amounts are all non-positive yields `None`.
pub fn largest_expense(txns: &[Transaction]) -> Option<&Transaction> {
    let mut max = Decimal::ZERO;
    let mut largest = None;

    for txn in txns.iter().filter(|txn| !is_reserved(&txn.account)) {
        if txn.amount > max {
            max = txn.amount;
            largest = Some(txn);
        }
    }

    largest
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinancialStatus {
    Positive,
    Negative,
    Balanced,
}

/// Income, expenses and their difference over the whole ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_worth: Decimal,
}

impl Statistics {
    pub fn compute(txns: &[Transaction]) -> Self {
        let total_income = total_income(txns);
        let total_expenses = total_expenses(txns);

        Self {
            total_income,
            total_expenses,
            net_worth: total_income - total_expenses,
        }
    }

    pub fn status(&self) -> FinancialStatus {
        match self.net_worth.cmp(&Decimal::ZERO) {
            Ordering::Greater => FinancialStatus::Positive,
            Ordering::Less => FinancialStatus::Negative,
            Ordering::Equal => FinancialStatus::Balanced,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn txn(id: &str, date: &str, account: &str, amount: Decimal) -> Transaction {
        Transaction {
            id: id.into(),
            date: date.into(),
            account: account.into(),
            amount,
            comment: String::new(),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("1", "2024-01-05", "Revenu", dec!(1000)),
            txn("2", "2024-01-06", "Compte courant", dec!(-1000)),
            txn("3", "2024-01-10", "Loisirs", dec!(50)),
            txn("4", "2024-01-20", "Loisirs", dec!(-20)),
        ]
    }

    #[test]
    fn statistics_follow_the_reserved_account_rules() {
        let stats = Statistics::compute(&sample());

        assert_eq!(stats.total_income, dec!(1000));
        // The -20 refund is excluded by the positive-amount filter.
        assert_eq!(stats.total_expenses, dec!(50));
        assert_eq!(stats.net_worth, dec!(950));
        assert_eq!(stats.status(), FinancialStatus::Positive);
    }

    #[test]
    fn income_uses_absolute_amounts() {
        let txns = vec![
            txn("1", "2024-01-05", "Revenu", dec!(-800)),
            txn("2", "2024-01-25", "Revenu", dec!(200)),
        ];

        assert_eq!(total_income(&txns), dec!(1000));
    }

    #[test]
    fn status_at_exactly_zero_is_balanced() {
        let txns = vec![
            txn("1", "2024-01-05", "Revenu", dec!(50)),
            txn("2", "2024-01-10", "Loisirs", dec!(50)),
        ];
        let stats = Statistics::compute(&txns);

        assert_eq!(stats.net_worth, Decimal::ZERO);
        assert_eq!(stats.status(), FinancialStatus::Balanced);
    }

    #[test]
    fn largest_expense_scans_all_non_reserved_amounts() {
        let txns = sample();
        let largest = largest_expense(&txns).unwrap();

        assert_eq!(largest.id, "3");
        assert_eq!(largest.amount, dec!(50));
    }

    #[test]
    fn largest_expense_tie_goes_to_the_first_seen() {
        let txns = vec![
            txn("1", "2024-01-05", "Loisirs", dec!(50)),
            txn("2", "2024-01-06", "Courses", dec!(50)),
        ];

        assert_eq!(largest_expense(&txns).unwrap().id, "1");
    }

    #[test]
    fn largest_expense_is_none_without_positive_candidates() {
        let txns = vec![
            txn("1", "2024-01-05", "Revenu", dec!(5000)),
            txn("2", "2024-01-06", "Loisirs", dec!(-20)),
            txn("3", "2024-01-07", "Courses", Decimal::ZERO),
        ];

        assert!(largest_expense(&txns).is_none());
    }

    #[test]
    fn date_filter_bounds_are_inclusive() {
        let txns = sample();
        let filtered = filter_by_date_range(&txns, "2024-01-06", "2024-01-10");

        let ids: Vec<_> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn date_filter_with_equal_bounds_matches_that_day_only() {
        let txns = sample();
        let filtered = filter_by_date_range(&txns, "2024-01-10", "2024-01-10");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");
    }

    #[test]
    fn date_filter_may_come_back_empty() {
        let txns = sample();

        assert!(filter_by_date_range(&txns, "2025-01-01", "2025-12-31").is_empty());
    }
}
