//! Checks that every variable mentioned in a free-text fragment is declared.
//!
//! This is a purely lexical scan: any run shaped like `[a-zA-Z][a-zA-Z0-9]*`
//! counts as a variable reference, wherever it occurs in the fragment.

use regex::Regex;

use crate::lexer::is_reserved;
use crate::symbols::SymbolTable;

const IDENTIFIER_PATTERN: &str = r"[a-zA-Z][a-zA-Z0-9]*";

/// Finds identifier-shaped runs in expressions and conditions.
#[derive(Debug, Clone)]
pub struct ReferenceChecker {
    identifier: Regex,
}

impl ReferenceChecker {
    pub fn new() -> Self {
        Self {
            identifier: Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is valid"),
        }
    }

    /// Identifier-shaped runs in `text` that are not reserved words.
    pub fn references<'s, 't: 's>(&'s self, text: &'t str) -> impl Iterator<Item = &'t str> + 's {
        self.identifier
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|name| !is_reserved(name))
    }

    /// The first referenced name missing from `symbols`, if any.
    pub fn first_undeclared<'t>(&self, text: &'t str, symbols: &SymbolTable) -> Option<&'t str> {
        self.references(text).find(|name| !symbols.contains(name))
    }

    /// True iff every referenced name is declared.
    pub fn all_declared(&self, text: &str, symbols: &SymbolTable) -> bool {
        self.first_undeclared(text, symbols).is_none()
    }
}

impl Default for ReferenceChecker {
    fn default() -> Self {
        Self::new()
    }
}
