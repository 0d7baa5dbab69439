use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// unique identifier for an investment
pub type InvestmentId = Uuid;

/// unique identifier for a distribution, supplied by the caller
pub type DistributionId = Uuid;

/// verified business identifier, consumed opaquely as a foreign reference
pub type BusinessId = Uuid;

/// block height supplied by the host environment; opaque, trusted,
/// non-decreasing
pub type BlockHeight = u64;

/// ledger-wide repayment sequence number
pub type SequenceNumber = u64;

/// Authenticated caller principal.
///
/// The host environment authenticates callers before they reach the
/// ledger; this value is trusted completely and compared only for
/// exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        AccountId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        AccountId(id.to_string())
    }
}

/// loan status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// obligation open, repayments accepted
    Active,
    /// total repaid reached the principal; terminal
    Repaid,
    /// declared defaulted by the owner; terminal
    Defaulted,
}

impl LoanStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, LoanStatus::Active)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }
}

/// investment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentStatus {
    /// participation open, distributions accepted
    Active,
    /// closed out by the owner; terminal
    Completed,
    /// declared defaulted by the owner; terminal
    Defaulted,
}

impl InvestmentStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, InvestmentStatus::Active)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }
}
