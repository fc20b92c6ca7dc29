use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{} file not found", .0.display())]
    FileNotFound(PathBuf),
    #[error("could not read costs file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("could not parse CSV rows to cost records: {0}")]
    CsvError(#[from] csv::Error),
    #[error("could not write report: {0}")]
    ReportError(#[source] std::io::Error),
    #[error("could not write summary CSV: {0}")]
    ExportError(#[source] std::io::Error),
    #[error(transparent)]
    BusinessError(#[from] crate::domain::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
