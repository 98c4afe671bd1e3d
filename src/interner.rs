use log::trace;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::RwLock;
use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

static INTERNER: Lazy<RwLock<StringInterner<DefaultBackend>>> =
    Lazy::new(|| RwLock::new(StringInterner::default()));

/// A symbol name stored once in the process-wide interner.
///
/// Two names compare equal exactly when their ids do, so symbol equality
/// never touches the string data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InternedName(DefaultSymbol);

impl InternedName {
    pub fn new(name: &str) -> Self {
        // A poisoned lock still holds a consistent table: interning only appends.
        let mut interner = INTERNER.write().unwrap_or_else(|e| e.into_inner());
        let before = interner.len();
        let id = interner.get_or_intern(name);
        if interner.len() > before {
            trace!("interned symbol `{name}` ({} names)", interner.len());
        }
        InternedName(id)
    }

    /// Run `f` against the interned string without allocating.
    pub fn with_str<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        let interner = INTERNER.read().unwrap_or_else(|e| e.into_inner());
        f(interner.resolve(self.0).unwrap_or_default())
    }

    pub fn resolve(&self) -> String {
        self.with_str(str::to_string)
    }
}

impl fmt::Display for InternedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| write!(f, "{s}"))
    }
}
