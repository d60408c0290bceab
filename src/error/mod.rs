use std::path::PathBuf;

use thiserror::Error;

/// Load-time errors. All of these are terminal: main reports them and the
/// process exits with a non-zero status.
#[derive(Debug, Error)]
pub enum Error {
    #[error("le fichier '{}' est introuvable", .0.display())]
    MissingFile(PathBuf),
    #[error("aucune donnée n'a pu être chargée depuis '{}'", .0.display())]
    EmptyDataset(PathBuf),
    #[error("impossible de lire le fichier de transactions")]
    Io(#[from] std::io::Error),
    #[error("impossible de convertir les lignes CSV en transactions")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
