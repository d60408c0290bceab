use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Compte '{name}' introuvable")]
    AccountNotFound { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
