//! Environment sources the loader reads raw strings from.
//!
//! Invariants:
//! - Sources are read-only; nothing in this crate writes to the process environment.
//! - A plain map is always substitutable for the real environment.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A read-only key-value view of raw environment strings.
pub trait VarSource {
    fn var(&self, key: &str) -> Option<String>;
}

impl<T: VarSource + ?Sized> VarSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<S: BuildHasher> VarSource for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl VarSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> VarSource for [(K, V)] {
    fn var(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref().to_string())
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> VarSource for [(K, V); N] {
    fn var(&self, key: &str) -> Option<String> {
        self.as_slice().var(key)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> VarSource for Vec<(K, V)> {
    fn var(&self, key: &str) -> Option<String> {
        self.as_slice().var(key)
    }
}

/// The real process environment. Values that are not valid Unicode are
/// treated as absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A primary source with a fallback consulted only for keys the primary lacks.
#[derive(Debug, Clone)]
pub struct Overlay<P, F> {
    primary: P,
    fallback: F,
}

impl<P: VarSource, F: VarSource> Overlay<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: VarSource, F: VarSource> VarSource for Overlay<P, F> {
    fn var(&self, key: &str) -> Option<String> {
        self.primary.var(key).or_else(|| self.fallback.var(key))
    }
}
