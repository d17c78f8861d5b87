use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open directory: {0}")]
    OpenDir(String),

    #[error("Failed to configure terminal: {0}")]
    Terminal(String),

    #[error("Failed to open history file: {0}")]
    History(String),
}
