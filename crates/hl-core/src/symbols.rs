//! Symbol table mapping declared variables to their types.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The two declarable variable types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    Integer,
    Double,
}

impl TypeName {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "integer" => Some(TypeName::Integer),
            "double" => Some(TypeName::Double),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Integer => "integer",
            TypeName::Double => "double",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`SymbolTable::declare`] when the name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyDeclared {
    pub existing: TypeName,
}

/// Declared variables. Entries are only ever added.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    entries: HashMap<String, TypeName>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Declare `name`, refusing to overwrite an existing entry.
    pub fn declare(&mut self, name: &str, ty: TypeName) -> Result<(), AlreadyDeclared> {
        if let Some(&existing) = self.entries.get(name) {
            return Err(AlreadyDeclared { existing });
        }
        self.entries.insert(name.to_string(), ty);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<TypeName> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_and_lookup() {
        let mut table = SymbolTable::new();
        assert!(table.is_empty());
        table.declare("v", TypeName::Integer).unwrap();
        assert_eq!(table.get("v"), Some(TypeName::Integer));
        assert!(table.contains("v"));
        assert!(!table.contains("w"));
    }

    #[test]
    fn test_redeclare_keeps_original_type() {
        let mut table = SymbolTable::new();
        table.declare("v", TypeName::Integer).unwrap();
        let err = table.declare("v", TypeName::Double).unwrap_err();
        assert_eq!(err.existing, TypeName::Integer);
        assert_eq!(table.get("v"), Some(TypeName::Integer));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_type_keywords_are_case_sensitive() {
        assert_eq!(TypeName::from_keyword("double"), Some(TypeName::Double));
        assert_eq!(TypeName::from_keyword("Double"), None);
        assert_eq!(TypeName::Integer.to_string(), "integer");
    }
}
