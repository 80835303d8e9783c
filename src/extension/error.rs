use crate::reporter;
use crate::testcase;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    MissingBinding(String),
    CountMismatch { expected: usize, actual: usize },
    InvalidIdentifier(String),
    NoRunState(String),
    OverflowBinding { test: String, bound: usize },
    ReportEmission(reporter::error::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingBinding(suite) => {
                write!(f, "Test cases binding is required on suite '{}'", suite)
            }
            Error::CountMismatch { expected, actual } => {
                write!(f, "Expected {} ids but found {}", expected, actual)
            }
            Error::InvalidIdentifier(id) => write!(f, "Invalid test case id: {}", id),
            Error::NoRunState(test) => {
                write!(f, "No recording state available for test '{}'", test)
            }
            Error::OverflowBinding { test, bound } => write!(
                f,
                "No id available for test '{}', all {} bound ids are consumed",
                test, bound
            ),
            Error::ReportEmission(cause) => write!(f, "Failed to write report: {}", cause),
        }
    }
}

impl ::std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReportEmission(cause) => Some(cause),
            _ => None,
        }
    }
}

impl From<testcase::error::Error> for Error {
    fn from(error: testcase::error::Error) -> Self {
        match error {
            testcase::error::Error::InvalidId(id) => Error::InvalidIdentifier(id),
        }
    }
}

impl From<reporter::error::Error> for Error {
    fn from(error: reporter::error::Error) -> Self {
        Error::ReportEmission(error)
    }
}
