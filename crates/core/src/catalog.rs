//! Catalog module - the fixed set of token types
//!
//! A catalog is supplied once at board construction and never changes for
//! the session. Types are stored sorted by name, so a [`TokenId`] (the index
//! into that order) compares exactly like the type name does. The name order
//! is the canonical comparison used both for matching and for excluding
//! adjacent duplicates during initial generation.

use match_grid_types::{SetupError, TokenId, MAX_TOKEN_TYPES};

/// An immutable token kind, identified by its unique name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenType {
    name: String,
}

impl TokenType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A validated, non-empty, duplicate-free set of token types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    types: Vec<TokenType>,
}

impl Catalog {
    /// Build a catalog from the given types.
    ///
    /// The types are sorted by name; [`TokenId`]s index into that order.
    /// Fails on an empty set, a duplicate name, or more than
    /// [`MAX_TOKEN_TYPES`] entries.
    pub fn new(mut types: Vec<TokenType>) -> Result<Self, SetupError> {
        if types.is_empty() {
            return Err(SetupError::EmptyCatalog);
        }
        if types.len() > MAX_TOKEN_TYPES {
            return Err(SetupError::TooManyTypes { count: types.len() });
        }

        types.sort();
        for pair in types.windows(2) {
            if pair[0].name == pair[1].name {
                return Err(SetupError::DuplicateType {
                    name: pair[0].name.clone(),
                });
            }
        }

        Ok(Self { types })
    }

    /// Convenience constructor from plain names.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, SetupError> {
        Self::new(names.iter().map(|n| TokenType::new(n.as_ref())).collect())
    }

    /// Number of types in the catalog (always >= 1).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The type behind an id, if the id belongs to this catalog.
    pub fn get(&self, id: TokenId) -> Option<&TokenType> {
        self.types.get(id.index())
    }

    /// Look up the id of a type by name.
    pub fn id_of(&self, name: &str) -> Option<TokenId> {
        self.types
            .iter()
            .position(|t| t.name == name)
            .map(|i| TokenId::new(i as u8))
    }

    /// All ids in catalog (name) order.
    pub fn ids(&self) -> impl Iterator<Item = TokenId> + '_ {
        (0..self.types.len()).map(|i| TokenId::new(i as u8))
    }

    /// All types in catalog (name) order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenType> {
        self.types.iter()
    }
}
