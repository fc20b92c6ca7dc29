use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not convert cost {value:?} to a number on line {line}")]
    InvalidCost { line: u64, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
