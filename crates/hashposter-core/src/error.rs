use thiserror::Error;

/// Parameter validation failures. All are raised before any drawing begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PosterError {
    #[error("--size must be >= {min}")]
    SizeTooSmall { size: i64, min: u32 },

    #[error("--cells must be >= {min}")]
    TooFewCells { cells: i64, min: u32 },

    #[error("--{flag} is out of range: {value}")]
    OutOfRange { flag: &'static str, value: i64 },
}
