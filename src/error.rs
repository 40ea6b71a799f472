//! Error type for the state toggle

use thiserror_no_std::Error;

#[derive(Error, Debug)]
pub enum ToggleError {
    #[error("at most {max} segments are supported")]
    TooManySegments { max: usize },
    #[error("segment title longer than {max} bytes")]
    TitleTooLong { max: usize },
    #[error("segment index {index} out of range for {len} segments")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid attribute blob: {0}")]
    InvalidAttributes(postcard::Error),
}
