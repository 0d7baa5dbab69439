use serde::{Deserialize, Serialize};

use crate::amount::{Amount, Bps};
use crate::types::{
    AccountId, BlockHeight, DistributionId, InvestmentId, InvestmentStatus, LoanId, LoanStatus,
    SequenceNumber,
};

/// all events emitted by the ledgers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerEvent {
    LoanCreated {
        loan_id: LoanId,
        borrower: AccountId,
        principal: Amount,
        interest_rate_bps: Bps,
        start_height: BlockHeight,
        end_height: BlockHeight,
    },
    RepaymentRecorded {
        loan_id: LoanId,
        sequence: SequenceNumber,
        amount: Amount,
        payer: AccountId,
        total_repaid: Amount,
        height: BlockHeight,
    },
    LoanStatusChanged {
        loan_id: LoanId,
        old_status: LoanStatus,
        new_status: LoanStatus,
    },
    InvestmentCreated {
        investment_id: InvestmentId,
        loan_id: LoanId,
        investor: AccountId,
        principal: Amount,
        share_bps: Bps,
    },
    ReturnsDistributed {
        distribution_id: DistributionId,
        investment_id: InvestmentId,
        amount: Amount,
        recipient: AccountId,
        total_distributed: Amount,
        height: BlockHeight,
    },
    InvestmentStatusChanged {
        investment_id: InvestmentId,
        old_status: InvestmentStatus,
        new_status: InvestmentStatus,
    },
}

/// Event store for collecting events during operations.
///
/// Events are emitted only after an operation has fully validated and
/// applied its mutation; ledger logic never reads them back.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<LedgerEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }

    /// drain accumulated events, leaving the store empty
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
