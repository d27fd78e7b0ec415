// equate-value - Symbol type with an optional global registry
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Symbols are unique primitive values with an optional description.
//!
//! # Identity
//!
//! Every call to [`Symbol::new`] produces a symbol that is distinct from all
//! others, even when the descriptions match. Two symbols are equal only when
//! they share the same underlying allocation, so equality and hashing are
//! pointer operations.
//!
//! # Registry
//!
//! [`Symbol::for_key`] looks the key up in a process-wide registry and
//! returns the same symbol for the same key on every call. Registered
//! symbols are never deallocated; the registry keeps a strong reference to
//! each of them for the lifetime of the program.
//!
//! The registry is protected by a `Mutex`, so registration is thread-safe.
//! Comparison and hashing never take the lock.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// A unique symbol.
#[derive(Clone)]
pub struct Symbol {
    inner: Arc<SymbolInner>,
}

#[derive(Debug)]
struct SymbolInner {
    description: Option<Arc<str>>,
    registered: bool,
}

/// Global symbol registry
static SYMBOL_REGISTRY: OnceLock<Mutex<SymbolRegistry>> = OnceLock::new();

struct SymbolRegistry {
    /// Map from registry key to registered symbol
    symbols: HashMap<Arc<str>, Arc<SymbolInner>>,
}

impl SymbolRegistry {
    fn new() -> Self {
        SymbolRegistry {
            symbols: HashMap::new(),
        }
    }

    fn register(&mut self, key: &str) -> Arc<SymbolInner> {
        if let Some(existing) = self.symbols.get(key) {
            return Arc::clone(existing);
        }
        let key: Arc<str> = Arc::from(key);
        let inner = Arc::new(SymbolInner {
            description: Some(Arc::clone(&key)),
            registered: true,
        });
        self.symbols.insert(key, Arc::clone(&inner));
        inner
    }
}

fn get_registry() -> &'static Mutex<SymbolRegistry> {
    SYMBOL_REGISTRY.get_or_init(|| Mutex::new(SymbolRegistry::new()))
}

impl Symbol {
    /// Create a fresh symbol with a description.
    pub fn new(description: &str) -> Self {
        Symbol {
            inner: Arc::new(SymbolInner {
                description: Some(Arc::from(description)),
                registered: false,
            }),
        }
    }

    /// Create a fresh symbol without a description.
    pub fn anonymous() -> Self {
        Symbol {
            inner: Arc::new(SymbolInner {
                description: None,
                registered: false,
            }),
        }
    }

    /// Return the registered symbol for `key`, creating it on first use.
    pub fn for_key(key: &str) -> Self {
        // A poisoned registry still holds consistent data: inserts are atomic.
        let inner = get_registry()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .register(key);
        Symbol { inner }
    }

    /// Get the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// Check if this symbol came from the global registry.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.inner.registered
    }

    /// Address of the shared allocation, used as the identity hash.
    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================
