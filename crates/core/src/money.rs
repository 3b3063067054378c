//! Whole-won currency amounts.
//!
//! Korean won has no minor unit in practice, so amounts are plain `u64`
//! won values. This module carries the display conventions the order
//! document needs: digit grouping for the numeric total cell.

use serde::{Deserialize, Serialize};

/// A non-negative amount in whole Korean won.
///
/// Value object: compared by value, immutable once constructed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Won(pub u64);

impl Won {
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> u64 {
        self.0
    }

    /// Thousands-grouped decimal form, e.g. `1234567` → `"1,234,567"`.
    pub fn grouped(self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        let offset = digits.len() % 3;
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - offset) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

impl core::fmt::Display for Won {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.grouped())
    }
}

impl From<u64> for Won {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}
