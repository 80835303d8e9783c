use crate::testcase::error::Error;
use core::str::FromStr;
use lazy_static::*;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref ID_REGEX: Regex =
        Regex::new(r"^[A-Z][A-Z0-9]+-[0-9]+$").expect("Regex compilation error");
}

/// An opaque ticket-tracker reference such as `ABC-123`. Construction goes
/// through [`FromStr`] only, so a held value is always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestCaseId(String);

impl TestCaseId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TestCaseId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if ID_REGEX.is_match(s) {
            Ok(TestCaseId(s.to_owned()))
        } else {
            Err(Error::InvalidId(s.to_owned()))
        }
    }
}

impl fmt::Display for TestCaseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}
