use crate::extension::context::{SuiteContext, TestContext};
use crate::extension::error::Error;
use std::fmt::Display;

pub type CallbackResult = Result<(), Error>;

/// The lifecycle surface a host runner drives. The host guarantees that
/// `before_all` happens before any per-test callback and that `after_all`
/// happens after all of them; per-test callbacks are delivered only for
/// tests that reached a terminal outcome.
pub trait SuiteLifecycle {
    fn before_all(&self, ctx: &SuiteContext) -> CallbackResult;
    fn test_successful(&self, ctx: &TestContext) -> CallbackResult;
    fn test_failed(&self, ctx: &TestContext, cause: &dyn Display) -> CallbackResult;
    fn after_all(&self, ctx: &SuiteContext) -> CallbackResult;
}
