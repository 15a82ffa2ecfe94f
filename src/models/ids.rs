//! Strongly-typed identifier for contacts
//!
//! Identifiers are positive integers handed out by the repository in
//! increasing order. Zero is never a valid identifier, so "absent" is
//! expressed with `Option<ContactId>` rather than a sentinel value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// The first identifier a fresh repository hands out
    pub const FIRST: ContactId = ContactId(1);

    /// Create an identifier from a raw value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The identifier after this one, or `None` once the space is exhausted
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}
