pub mod amount;
pub mod config;
pub mod errors;
pub mod events;
pub mod investments;
pub mod loans;
pub mod store;
pub mod types;

// re-export key types
pub use amount::{Amount, Bps};
pub use config::LedgerConfig;
pub use errors::{LedgerError, Result};
pub use events::{EventStore, LedgerEvent};
pub use investments::{Distribution, Investment, InvestmentLedger};
pub use loans::{Loan, LoanLedger, Repayment};
pub use store::{SequenceCounter, Table};
pub use types::{
    AccountId, BlockHeight, BusinessId, DistributionId, InvestmentId, InvestmentStatus, LoanId,
    LoanStatus, SequenceNumber,
};

// re-export external dependencies that users will need
pub use uuid::Uuid;
