pub mod error;
pub mod html;
pub mod model;

use crate::reporter::error::Error;
use crate::reporter::model::TestCaseResult;

/// Sink for the outcomes accumulated over one suite execution. Called once,
/// at teardown, with a non-empty list in execution order.
pub trait Reporter {
    fn emit(&self, results: &[TestCaseResult]) -> Result<(), Error>;
}
