pub mod binding;
pub mod context;
pub mod error;
pub mod hooks;
pub mod store;

use crate::configuration::settings::Settings;
use crate::extension::context::{Namespace, SuiteContext, TestContext};
use crate::extension::error::Error;
use crate::extension::hooks::{CallbackResult, SuiteLifecycle};
use crate::extension::store::keys;
use crate::lock;
use crate::reporter::html::HtmlReporter;
use crate::reporter::model::{Status, TestCaseResult};
use crate::reporter::Reporter;
use crate::testcase::id::TestCaseId;
use std::any::type_name;
use std::fmt::Display;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Binds the [`TestCases`](crate::extension::binding::TestCases) sequence of
/// a suite to its test executions. Ids are validated eagerly when the suite
/// starts; every terminal outcome consumes the next id in declaration order;
/// the collected outcomes are handed to the [`Reporter`] at teardown.
///
/// Skipped tests deliver no terminal callback, so they consume no id: the id
/// at position `k` belongs to the `k`-th *executed* test, while the setup
/// count check still covers every *declared* test.
pub struct TestCasesExtension {
    reporter: Box<dyn Reporter>,
}

impl TestCasesExtension {
    pub fn new() -> Self {
        let settings = match Settings::from_environment() {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Cannot read settings from environment, using defaults: {}", e);
                Settings::default()
            }
        };
        Self::with_reporter(Box::new(HtmlReporter::new(settings.report)))
    }

    pub fn with_reporter(reporter: Box<dyn Reporter>) -> Self {
        Self { reporter }
    }

    fn namespace(&self, ctx: &SuiteContext) -> Namespace {
        Namespace::create(vec![type_name::<Self>(), ctx.name()])
    }

    fn record(&self, ctx: &TestContext, status: Status) -> CallbackResult {
        let store = ctx.store(&self.namespace(ctx.suite()));
        let ids = store
            .get::<Vec<TestCaseId>>(keys::IDS)
            .ok_or_else(|| Error::NoRunState(ctx.display_name().to_owned()))?;
        let index = store
            .get::<AtomicUsize>(keys::INDEX)
            .ok_or_else(|| Error::NoRunState(ctx.display_name().to_owned()))?;
        let results = store
            .get::<Mutex<Vec<TestCaseResult>>>(keys::RESULTS)
            .ok_or_else(|| Error::NoRunState(ctx.display_name().to_owned()))?;
        let consumed = index.fetch_add(1, Ordering::SeqCst);
        if consumed >= ids.len() {
            return Err(Error::OverflowBinding {
                test: ctx.display_name().to_owned(),
                bound: ids.len(),
            });
        }
        let id = ids[consumed].clone();
        trace!("Test '{}' {} as {}", ctx.display_name(), status, id);
        lock!(results).push(TestCaseResult::new(id, ctx.display_name(), status));
        Ok(())
    }
}

impl Default for TestCasesExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteLifecycle for TestCasesExtension {
    fn before_all(&self, ctx: &SuiteContext) -> CallbackResult {
        let binding = match ctx.test_cases() {
            Some(binding) => binding,
            None => return Err(Error::MissingBinding(ctx.name().to_owned())),
        };
        let declared = ctx.test_count();
        if binding.len() != declared {
            return Err(Error::CountMismatch {
                expected: declared,
                actual: binding.len(),
            });
        }
        let mut ids = Vec::with_capacity(binding.len());
        for raw in binding.ids() {
            ids.push(raw.parse::<TestCaseId>()?);
        }
        debug!("Bound {} test case ids to suite '{}'", ids.len(), ctx.name());
        let store = ctx.store(&self.namespace(ctx));
        store.put(keys::IDS, ids);
        store.put(keys::INDEX, AtomicUsize::new(0));
        store.put(keys::RESULTS, Mutex::new(Vec::<TestCaseResult>::new()));
        Ok(())
    }

    fn test_successful(&self, ctx: &TestContext) -> CallbackResult {
        self.record(ctx, Status::Passed)
    }

    fn test_failed(&self, ctx: &TestContext, cause: &dyn Display) -> CallbackResult {
        trace!("Test '{}' failed: {}", ctx.display_name(), cause);
        self.record(ctx, Status::Failed)
    }

    fn after_all(&self, ctx: &SuiteContext) -> CallbackResult {
        let store = ctx.store(&self.namespace(ctx));
        let results = match store.get::<Mutex<Vec<TestCaseResult>>>(keys::RESULTS) {
            Some(results) => results,
            None => return Ok(()),
        };
        let results = lock!(results);
        if results.is_empty() {
            debug!("No outcomes recorded for suite '{}'", ctx.name());
            return Ok(());
        }
        self.reporter.emit(results.as_slice())?;
        Ok(())
    }
}
