use serde::{Deserialize, Serialize};

use crate::types::AccountId;

/// Ledger configuration, fixed at construction.
///
/// The owner is the single privileged identity allowed to declare
/// defaults, complete investments, and distribute returns. It is held
/// per ledger instance rather than as process-global state so that
/// independent ledgers can run with different owners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub owner: AccountId,
}

impl LedgerConfig {
    pub fn new(owner: AccountId) -> Self {
        Self { owner }
    }

    /// exact-equality owner check used by every privileged operation
    pub fn is_owner(&self, caller: &AccountId) -> bool {
        &self.owner == caller
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_is_exact_equality() {
        let config = LedgerConfig::new(AccountId::new("owner-1"));

        assert!(config.is_owner(&AccountId::new("owner-1")));
        assert!(!config.is_owner(&AccountId::new("owner-2")));
        assert!(!config.is_owner(&AccountId::new("Owner-1")));
    }
}
