use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("index out of bounds: {index}/{len}")]
    OutOfBounds { index: usize, len: usize },
}
