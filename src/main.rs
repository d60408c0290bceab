use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use grandlivre::{csv, domain::account::group_by_account, shell};

/// Système de gestion comptable personnel
#[derive(Parser)]
#[command(name = "grandlivre", version, about)]
struct Cli {
    /// Fichier CSV des transactions
    #[arg(default_value = "data.csv")]
    data: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Chargement des données...");
    let transactions = csv::load(&cli.data)?;
    let accounts = group_by_account(&transactions);
    println!(
        "✅ {} transactions chargées avec succès!",
        transactions.len()
    );

    shell::run(&transactions, &accounts)?;

    Ok(())
}
