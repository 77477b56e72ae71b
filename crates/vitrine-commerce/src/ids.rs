//! Newtype ID for type-safe product identifiers.
//!
//! Using a newtype prevents accidentally mixing product ids up with other
//! integers (quantities, review counts).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
///
/// Catalog ids are assigned once, when the demo data is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a new ID.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner integer value.
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
