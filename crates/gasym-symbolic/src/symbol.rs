//! Named scalar unknowns.

use std::fmt;
use std::sync::Arc;

/// A named scalar unknown, e.g. `Aox` or `Ex`.
///
/// Symbols compare by name; the name order drives term order in printed
/// polynomials.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

/// Build several symbols from a whitespace-separated list of names.
pub fn symbols(names: &str) -> Vec<Symbol> {
    names.split_whitespace().map(Symbol::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_split() {
        let s = symbols("a b  c");
        assert_eq!(s.len(), 3);
        assert_eq!(s[2].name(), "c");
    }

    #[test]
    fn test_symbol_order_is_by_name() {
        assert!(Symbol::new("Aox") < Symbol::new("As"));
        assert!(Symbol::new("As") < Symbol::new("Box"));
    }
}
