use std::io::{self, BufRead, Write};

use crate::{
    csv,
    domain::{
        account::{find_account, Account},
        transaction::Transaction,
        CHECKING_ACCOUNT,
    },
    report::{self, FinancialStatus, Statistics},
};

/// One entry of the interactive menu. Keeping the command set in an enum
/// makes the dispatch exhaustive instead of a lookup in a table of
/// closures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Balance,
    AllTransactions,
    AccountTransactions,
    Summary,
    Statistics,
    Export,
    DateSearch,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Balance),
            "2" => Some(Self::AllTransactions),
            "3" => Some(Self::AccountTransactions),
            "4" => Some(Self::Summary),
            "5" => Some(Self::Statistics),
            "6" => Some(Self::Export),
            "7" => Some(Self::DateSearch),
            "0" | "exit" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Menu loop: render, read a choice, dispatch, pause. Runs until the user
/// quits or stdin closes. Everything that goes wrong past this point is
/// reported and the loop keeps going; only the load phase may kill the
/// process.
pub fn run(txns: &[Transaction], accounts: &[Account]) -> io::Result<()> {
    loop {
        display_menu();

        let Some(line) = prompt("\nVotre choix: ")? else {
            return Ok(());
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Quit) => {
                println!("\nMerci d'avoir utilisé le système de gestion comptable!");
                println!("\nAu revoir!");
                return Ok(());
            }
            Some(choice) => dispatch(choice, txns, accounts)?,
            None => println!("❌ Choix invalide! Veuillez sélectionner une option valide."),
        }

        if prompt("\nAppuyez sur Entrée pour continuer...")?.is_none() {
            return Ok(());
        }
    }
}

fn dispatch(choice: MenuChoice, txns: &[Transaction], accounts: &[Account]) -> io::Result<()> {
    match choice {
        MenuChoice::Balance => handle_balance(accounts),
        MenuChoice::AllTransactions => {
            handle_all_transactions(txns);
            Ok(())
        }
        MenuChoice::AccountTransactions => handle_account_transactions(accounts),
        MenuChoice::Summary => {
            handle_summary(accounts);
            Ok(())
        }
        MenuChoice::Statistics => {
            handle_statistics(txns, accounts);
            Ok(())
        }
        MenuChoice::Export => handle_export(accounts),
        MenuChoice::DateSearch => handle_date_search(txns),
        MenuChoice::Quit => unreachable!("quit is handled by the loop"),
    }
}

fn display_menu() {
    let line = "=".repeat(50);
    println!("\n{line}");
    println!("SYSTÈME DE GESTION COMPTABLE PERSONNEL");
    println!("{line}");
    println!("1. Afficher le solde d'un compte");
    println!("2. Afficher toutes les transactions");
    println!("3. Afficher les transactions d'un compte");
    println!("4. Afficher le résumé de tous les comptes");
    println!("5. Afficher les statistiques");
    println!("6. Exporter les écritures d'un compte");
    println!("7. Rechercher par période");
    println!("0. Quitter");
    println!("{line}");
}

/// Print `message`, then read one trimmed line. `None` means stdin closed.
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_owned()))
}

fn list_accounts(accounts: &[Account], bullet: &str) {
    println!("Comptes disponibles:");
    for account in accounts {
        println!("{bullet}{}", account.name);
    }
}

fn print_balance(account: &Account) {
    println!(
        "\nSolde du compte '{}': {:.2}$",
        account.name,
        account.balance()
    );
}

fn handle_balance(accounts: &[Account]) -> io::Result<()> {
    println!("\n--- Consultation de solde ---");
    list_accounts(accounts, "  - ");

    let Some(name) = prompt("\nEntrez le nom du compte: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        println!("Nom de compte invalide!");
        return Ok(());
    }

    match find_account(accounts, &name) {
        Ok(account) => print_balance(account),
        Err(err) => {
            println!("{err}!");
            println!("Vérifiez l'orthographe ou choisissez un compte dans la liste.");
        }
    }

    Ok(())
}

fn handle_all_transactions(txns: &[Transaction]) {
    println!("\n=== TOUTES LES TRANSACTIONS ===");
    for txn in txns {
        println!("{txn}");
    }
}

fn handle_account_transactions(accounts: &[Account]) -> io::Result<()> {
    println!("\n--- Transactions d'un compte ---");
    list_accounts(accounts, "  - ");

    let Some(name) = prompt("\nEntrez le nom du compte: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        return Ok(());
    }

    match find_account(accounts, &name) {
        Ok(account) => {
            println!("\n=== TRANSACTIONS POUR LE COMPTE '{}' ===", account.name);
            if account.transactions.is_empty() {
                println!(
                    "Aucune transaction trouvée pour le compte '{}'",
                    account.name
                );
            } else {
                for txn in &account.transactions {
                    println!("{txn}");
                }
            }
        }
        Err(err) => println!("{err}"),
    }

    Ok(())
}

fn handle_summary(accounts: &[Account]) {
    println!("\n=== RÉSUMÉ DES COMPTES ===");
    for account in accounts {
        print_balance(account);
    }
}

fn handle_statistics(txns: &[Transaction], accounts: &[Account]) {
    println!("\n=== STATISTIQUES FINANCIÈRES ===");

    let stats = Statistics::compute(txns);
    println!("Revenus totaux: {:.2}$", stats.total_income);
    println!("Dépenses totales: {:.2}$", stats.total_expenses);
    println!("Situation nette: {:.2}$", stats.net_worth);

    match stats.status() {
        FinancialStatus::Positive => println!("📈 Situation financière positive"),
        FinancialStatus::Negative => println!("📉 Situation financière négative"),
        FinancialStatus::Balanced => println!("⚖️  Situation financière équilibrée"),
    }

    if let Some(expense) = report::largest_expense(txns) {
        println!(
            "\nPlus grosse dépense: {:.2}$ ({})",
            expense.amount, expense.account
        );
        if !expense.comment.is_empty() {
            println!("Commentaire: {}", expense.comment);
        }
    }

    if let Ok(checking) = find_account(accounts, CHECKING_ACCOUNT) {
        print_balance(checking);
    }
}

fn handle_export(accounts: &[Account]) -> io::Result<()> {
    println!("\n--- Exportation ---");
    list_accounts(accounts, "- ");

    let Some(name) = prompt("\nEntrez le nom du compte à exporter: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        println!("Nom de compte invalide!");
        return Ok(());
    }

    let account = match find_account(accounts, &name) {
        Ok(account) => account,
        Err(err) => {
            println!("{err}!");
            println!("Vérifiez l'orthographe ou choisissez un compte dans la liste.");
            return Ok(());
        }
    };

    let Some(filename) = prompt("Nom du fichier de sortie (ex: export.csv): ")? else {
        return Ok(());
    };
    let filename = if filename.is_empty() {
        format!("export_{}.csv", account.name.replace(' ', "_").to_lowercase())
    } else {
        filename
    };

    match csv::export_to_path(account, &filename) {
        Ok(()) => println!("Écritures exportées vers {filename}"),
        Err(err) => println!("Échec de l'exportation vers {filename}: {err}"),
    }

    Ok(())
}

fn handle_date_search(txns: &[Transaction]) -> io::Result<()> {
    println!("\n--- Recherche par période ---");

    let Some(start) = prompt("Date de début (YYYY-MM-DD): ")? else {
        return Ok(());
    };
    let Some(end) = prompt("Date de fin (YYYY-MM-DD): ")? else {
        return Ok(());
    };
    if start.is_empty() || end.is_empty() {
        println!("Dates invalides!");
        return Ok(());
    }

    let filtered = report::filter_by_date_range(txns, &start, &end);

    if filtered.is_empty() {
        println!("Aucune transaction trouvée entre {start} et {end}");
    } else {
        println!(
            "\n{} écriture(s) trouvée(s) entre {start} et {end}:",
            filtered.len()
        );
        for txn in filtered {
            println!("{txn}");
        }
    }

    Ok(())
}
