use crate::input::InputError;
use lmpdump::core::io::dump::DumpError;
use lmpdump::core::models::snapshot::SnapshotError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("Failed to open input file '{path}': {source}", path = path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse input '{path}': {source}", path = path.display())]
    InputParsing {
        path: PathBuf,
        #[source]
        source: InputError,
    },

    #[error("Failed to write {variant} dump to '{path}': {source}", path = path.display())]
    DumpWrite {
        variant: &'static str,
        path: PathBuf,
        #[source]
        source: DumpError,
    },

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
