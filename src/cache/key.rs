//! Cache Key Module
//!
//! Composite (company, customer) key, compared case-insensitively.

use std::fmt;

use crate::error::{CacheError, Result};

// == Cache Key ==
/// Lookup key for a per-customer collection.
///
/// Both parts are stored trimmed and lower-cased, so `("ABC", "100")`,
/// `(" abc ", "100")` and `("abc", "100")` hash and compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    company: String,
    customer: String,
}

impl CacheKey {
    // == Constructor ==
    /// Builds a key from trimmed, lower-cased parts, rejecting empty or
    /// whitespace-only ones.
    pub fn new(company: &str, customer: &str) -> Result<Self> {
        let (company, customer) = (company.trim(), customer.trim());
        if company.is_empty() {
            return Err(CacheError::invalid("company must not be empty"));
        }
        if customer.is_empty() {
            return Err(CacheError::invalid("customer must not be empty"));
        }

        Ok(Self {
            company: company.to_lowercase(),
            customer: customer.to_lowercase(),
        })
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.company, self.customer)
    }
}
