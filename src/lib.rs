#[macro_use]
extern crate log;

pub mod configuration;
pub mod extension;
pub mod reporter;
pub mod testcase;

pub use crate::extension::binding::TestCases;
pub use crate::extension::context::{Namespace, SuiteContext, TestContext};
pub use crate::extension::error::Error;
pub use crate::extension::hooks::{CallbackResult, SuiteLifecycle};
pub use crate::extension::TestCasesExtension;
pub use crate::reporter::model::{Status, TestCaseResult};
pub use crate::reporter::Reporter;
pub use crate::testcase::id::TestCaseId;

#[macro_export]
macro_rules! lock {
    ($name: expr) => {
        match $name.lock() {
            Ok(locked) => locked,
            Err(e) => panic!("{:#?}", e),
        }
    };
}
