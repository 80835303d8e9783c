use std::fmt;

/// An error that occurred during validation of a test case id.
#[derive(Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    InvalidId(String),
}

impl ::std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidId(ref id) => write!(f, "Invalid test case id: {}", id),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidId(ref id) => write!(f, "InvalidId({:?})", id),
        }
    }
}
