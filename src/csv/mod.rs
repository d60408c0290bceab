use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use crate::{
    domain::{account::Account, transaction::Transaction},
    error::{Error, Result},
};

/// Parse [`Transaction`]s from a reader.
///
/// Rows are mapped by header name (`No txn, Date, Compte, Montant,
/// Commentaire`), so column order does not matter. A row whose `Montant`
/// does not parse is an error; duplicate ids, unknown accounts and
/// malformed dates pass through untouched. Source order is kept, grouping
/// and tie-breaks depend on it.
pub fn read(reader: impl Read) -> Result<Vec<Transaction>> {
    let txns = csv::Reader::from_reader(reader)
        .into_deserialize()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(txns)
}

/// Load the transaction file at `path`.
///
/// Fails with [`Error::MissingFile`] when the path does not exist, with
/// [`Error::EmptyDataset`] when the file holds no data row, and with
/// [`Error::Csv`] on any malformed row. All three are terminal for the
/// calling program.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::MissingFile(path.to_owned()));
    }

    let txns = read(File::open(path)?)?;

    if txns.is_empty() {
        return Err(Error::EmptyDataset(path.to_owned()));
    }

    Ok(txns)
}

/// Write an account's entries in the historical export format: the header
/// line, then `id, date, compte, montant, commentaire` rows with a single
/// space after each comma, no quoting and no newline between rows.
///
/// The format predates this program and is kept byte-for-byte, so it is
/// not strict CSV: a comma inside a comment corrupts its row.
pub fn export_account(account: &Account, mut writer: impl Write) -> Result<()> {
    writeln!(writer, "No txn,Date,Compte,Montant,Commentaire")?;

    for txn in &account.transactions {
        write!(
            writer,
            "{}, {}, {}, {}, {}",
            txn.id, txn.date, txn.account, txn.amount, txn.comment
        )?;
    }

    writer.flush()?;
    Ok(())
}

pub fn export_to_path(account: &Account, path: impl AsRef<Path>) -> Result<()> {
    export_account(account, File::create(path)?)
}
