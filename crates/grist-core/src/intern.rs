//! String interning for attribute keys and audio tags.

use crate::id::Symbol;
use indexmap::IndexSet;

/// Interns strings into stable [`Symbol`] handles.
///
/// Backed by an insertion-ordered set; a symbol is the index of its text
/// in interning order. Symbols from one interner are only meaningful to
/// that interner.
#[derive(Debug, Default)]
pub struct Interner {
    strings: IndexSet<Box<str>>,
}

impl Interner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning the symbol minted on first sight.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(index) = self.strings.get_index_of(text) {
            return Symbol::new(index as u32);
        }
        let (index, _) = self.strings.insert_full(text.into());
        Symbol::new(index as u32)
    }

    /// The text behind `symbol`, or `None` for a symbol this interner
    /// did not mint.
    pub fn resolve(&self, symbol: Symbol) -> Option<&str> {
        self.strings.get_index(symbol.index()).map(|s| &**s)
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns `true` if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
