use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

/// One ledger entry, read-only once loaded.
///
/// Field names follow the column headers of the source file, so the CSV
/// reader can map rows by header regardless of column order. The `id` is
/// not required to be unique and the date is kept as its raw `YYYY-MM-DD`
/// string; neither is validated beyond type coercion.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    #[serde(rename = "No txn")]
    pub id: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Compte")]
    pub account: String,
    #[serde(rename = "Montant")]
    pub amount: Decimal,
    #[serde(rename = "Commentaire")]
    pub comment: String,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction #{} | Date: {} | Compte: {} | Montant: {}",
            self.id, self.date, self.account, self.amount
        )?;

        if !self.comment.is_empty() {
            write!(f, " | Commentaire: {}", self.comment)?;
        }

        Ok(())
    }
}
