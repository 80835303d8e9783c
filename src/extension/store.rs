use crate::lock;
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub mod keys {
    pub const IDS: &'static str = "ids";
    pub const INDEX: &'static str = "index";
    pub const RESULTS: &'static str = "results";
}

type Entry = Arc<dyn Any + Send + Sync>;

/// Typed key/value scratch area scoped to one suite execution. A lookup
/// succeeds only when the key is present and holds the requested type.
#[derive(Default)]
pub struct Store {
    values: Mutex<HashMap<String, Entry>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
        }
    }

    pub fn put<T>(&self, key: &str, value: T)
    where
        T: Any + Send + Sync,
    {
        lock!(self.values).insert(key.to_owned(), Arc::new(value));
    }

    pub fn get<T>(&self, key: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        lock!(self.values)
            .get(key)
            .cloned()
            .and_then(|entry| entry.downcast::<T>().ok())
    }
}
