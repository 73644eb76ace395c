//! Monotonic request tokens for discarding out-of-order responses
use serde::{Deserialize, Serialize};

/// Identifies one issued request. Only the latest token is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SearchToken(u64);

impl SearchToken {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchTokens {
    latest: u64,
}

impl SearchTokens {
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Issue a new token, superseding every earlier one.
    pub const fn issue(&mut self) -> SearchToken {
        self.latest = self.latest.wrapping_add(1);
        SearchToken(self.latest)
    }

    #[must_use]
    pub const fn is_current(&self, token: SearchToken) -> bool {
        token.0 == self.latest
    }

    #[must_use]
    pub const fn latest(&self) -> Option<SearchToken> {
        if self.latest == 0 {
            None
        } else {
            Some(SearchToken(self.latest))
        }
    }
}
