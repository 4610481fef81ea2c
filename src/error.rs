use thiserror::Error;

#[derive(Error, Debug)]
/// Batch error
pub enum BatchError {
    /// The count argument could not be parsed as an integer.
    #[error("invalid count '{0}': expected a positive integer")]
    InvalidArgument(String),

    /// The count argument parsed but is not positive.
    #[error("count must be at least 1, got {0}")]
    InvalidCount(i64),

    #[error("ItemReader from: {0}")]
    ItemReader(String),

    #[error("ItemWriter from: {0}")]
    ItemWriter(String),
}
