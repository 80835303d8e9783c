use crate::extension::binding::TestCases;
use crate::extension::store::Store;
use crate::lock;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Key for a scratch-store area. Extensions create their own namespace so
/// state held for one suite never collides with another consumer or another
/// concurrently executing suite.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    parts: Vec<String>,
}

impl Namespace {
    pub fn create<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }
}

/// One suite execution as the host runner presents it: the suite name, the
/// declared test methods, the optional [`TestCases`] binding and a scratch
/// area handed out per [`Namespace`].
pub struct SuiteContext {
    name: String,
    tests: Vec<String>,
    test_cases: Option<TestCases>,
    stores: Mutex<HashMap<Namespace, Arc<Store>>>,
}

impl SuiteContext {
    pub fn new<N, I, S>(name: N, tests: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tests: tests.into_iter().map(Into::into).collect(),
            test_cases: None,
            stores: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_test_cases(mut self, test_cases: TestCases) -> Self {
        self.test_cases = Some(test_cases);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test_names(&self) -> &[String] {
        &self.tests
    }

    pub fn test_count(&self) -> usize {
        self.tests.len()
    }

    pub fn test_cases(&self) -> Option<&TestCases> {
        self.test_cases.as_ref()
    }

    pub fn store(&self, namespace: &Namespace) -> Arc<Store> {
        let mut stores = lock!(self.stores);
        stores
            .entry(namespace.clone())
            .or_insert_with(|| Arc::new(Store::new()))
            .clone()
    }

    /// Derives the per-test view the host passes to terminal callbacks.
    pub fn test<N>(&self, display_name: N) -> TestContext
    where
        N: Into<String>,
    {
        TestContext {
            suite: self,
            display_name: display_name.into(),
        }
    }
}

pub struct TestContext<'a> {
    suite: &'a SuiteContext,
    display_name: String,
}

impl<'a> TestContext<'a> {
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn suite(&self) -> &SuiteContext {
        self.suite
    }

    pub fn store(&self, namespace: &Namespace) -> Arc<Store> {
        self.suite.store(namespace)
    }
}

#[cfg(test)]
mod test {
    use super::{Namespace, SuiteContext};
    use crate::test_cases;
    use std::sync::Arc;

    fn context() -> SuiteContext {
        SuiteContext::new("ExampleSuite", vec!["a", "b"])
    }

    #[test]
    fn test_same_namespace_yields_same_store() {
        let ctx = context();
        let namespace = Namespace::create(vec!["ext", "ExampleSuite"]);

        let first = ctx.store(&namespace);
        let second = ctx.store(&namespace);

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_distinct_namespaces_are_isolated() {
        let ctx = context();
        let first = ctx.store(&Namespace::create(vec!["ext", "SuiteA"]));
        let second = ctx.store(&Namespace::create(vec!["ext", "SuiteB"]));

        first.put("key", 1usize);

        assert!(second.get::<usize>("key").is_none());
    }

    #[test]
    fn test_test_context_exposes_display_name() {
        let ctx = context();
        let test = ctx.test("a should work");

        assert_eq!(test.display_name(), "a should work");
        assert_eq!(test.suite().name(), "ExampleSuite");
    }

    #[test]
    fn test_binding_is_absent_until_attached() {
        let ctx = context();
        assert!(ctx.test_cases().is_none());

        let ctx = ctx.with_test_cases(test_cases!["AB-1", "AB-2"]);
        assert_eq!(ctx.test_cases().unwrap().len(), 2);
    }

    #[test]
    fn test_declared_methods_are_counted() {
        let ctx = context();

        assert_eq!(ctx.test_count(), 2);
        assert_eq!(ctx.test_names(), &["a", "b"]);
    }
}
