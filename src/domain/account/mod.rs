use itertools::Itertools;
use rust_decimal::Decimal;

use super::{
    error::{Error, Result},
    transaction::Transaction,
};

/// A named account and the transactions booked against it.
///
/// Accounts are derived from the loaded transaction list and recomputed on
/// every load; they are never created on their own or persisted. Every
/// transaction held by an account has `account == name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub name: String,
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Sum of the account's transaction amounts, zero when the account has
    /// no transactions. No rounding; display formatting rounds.
    pub fn balance(&self) -> Decimal {
        self.transactions.iter().map(|txn| txn.amount).sum()
    }
}

/// Partition transactions into accounts keyed by their exact `Compte`
/// value.
///
/// Accounts come out in order of first appearance in the input, and each
/// account keeps its transactions in source order.
pub fn group_by_account(txns: &[Transaction]) -> Vec<Account> {
    txns.iter()
        .map(|txn| txn.account.as_str())
        .unique()
        .map(|name| Account {
            name: name.to_owned(),
            transactions: txns
                .iter()
                .filter(|txn| txn.account == name)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Look an account up by name, ignoring surrounding whitespace and case on
/// both sides.
pub fn find_account<'a>(accounts: &'a [Account], name: &str) -> Result<&'a Account> {
    let wanted = name.trim().to_lowercase();

    accounts
        .iter()
        .find(|account| account.name.trim().to_lowercase() == wanted)
        .ok_or_else(|| Error::AccountNotFound {
            name: name.trim().to_owned(),
        })
}
