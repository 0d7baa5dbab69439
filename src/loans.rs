use serde::{Deserialize, Serialize};

use crate::amount::{Amount, Bps};
use crate::config::LedgerConfig;
use crate::errors::{LedgerError, Result};
use crate::events::{EventStore, LedgerEvent};
use crate::store::{SequenceCounter, Table};
use crate::types::{AccountId, BlockHeight, BusinessId, LoanId, LoanStatus, SequenceNumber};

/// a loan obligation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: LoanId,
    pub business_id: BusinessId,
    pub principal: Amount,
    pub interest_rate_bps: Bps,
    pub term_length_blocks: u64,
    pub start_height: BlockHeight,
    pub end_height: BlockHeight,
    /// monotonically non-decreasing; may exceed the principal
    pub total_repaid: Amount,
    pub status: LoanStatus,
    pub borrower: AccountId,
}

impl Loan {
    /// contractual total due: principal plus simple interest,
    /// floor(principal * rate_bps / 10_000)
    pub fn total_due(&self) -> u128 {
        self.principal.as_u128() + self.interest_rate_bps.of(self.principal)
    }

    /// signed balance still owed; negative once overpaid, never clamped
    pub fn remaining_amount(&self) -> i128 {
        self.total_due() as i128 - self.total_repaid.as_i128()
    }
}

/// one repayment entry in the append-only log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repayment {
    pub loan_id: LoanId,
    pub sequence: SequenceNumber,
    pub amount: Amount,
    pub recorded_at_height: BlockHeight,
    pub payer: AccountId,
}

/// The loan side of the ledger: obligations plus their append-only
/// repayment log.
///
/// Every operation validates fully before touching any record, so a
/// failed call has zero observable side effects. That includes the
/// repayment sequence counter, which advances exactly once per
/// successful repayment.
#[derive(Debug)]
pub struct LoanLedger {
    config: LedgerConfig,
    loans: Table<LoanId, Loan>,
    repayments: Table<(LoanId, SequenceNumber), Repayment>,
    sequence: SequenceCounter,
    pub events: EventStore,
}

impl LoanLedger {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            loans: Table::new(),
            repayments: Table::new(),
            sequence: SequenceCounter::new(),
            events: EventStore::new(),
        }
    }

    /// record a new loan obligation
    ///
    /// Any non-negative interest rate is accepted; there is no upper
    /// bound on the rate.
    pub fn create_loan(
        &mut self,
        loan_id: LoanId,
        business_id: BusinessId,
        principal: Amount,
        interest_rate_bps: Bps,
        term_length_blocks: u64,
        caller: &AccountId,
        current_height: BlockHeight,
    ) -> Result<()> {
        if principal.is_zero() {
            return Err(LedgerError::invalid_input("loan principal must be positive"));
        }
        if term_length_blocks == 0 {
            return Err(LedgerError::invalid_input("term length must be positive"));
        }
        if self.loans.contains(&loan_id) {
            return Err(LedgerError::invalid_input(format!(
                "loan {loan_id} already exists"
            )));
        }
        let end_height = current_height
            .checked_add(term_length_blocks)
            .ok_or(LedgerError::ArithmeticOverflow {
                context: "loan end height",
            })?;

        let loan = Loan {
            loan_id,
            business_id,
            principal,
            interest_rate_bps,
            term_length_blocks,
            start_height: current_height,
            end_height,
            total_repaid: Amount::ZERO,
            status: LoanStatus::Active,
            borrower: caller.clone(),
        };
        self.events.emit(LedgerEvent::LoanCreated {
            loan_id,
            borrower: caller.clone(),
            principal,
            interest_rate_bps,
            start_height: current_height,
            end_height,
        });
        self.loans.upsert(loan_id, loan);
        Ok(())
    }

    /// Record a repayment against an active loan. Any caller may repay.
    ///
    /// Appends one entry keyed by the next ledger-wide sequence number
    /// and returns that number. When the accumulated total first
    /// reaches the principal the loan transitions to Repaid; repayments
    /// are never capped, so the total may overshoot.
    pub fn make_repayment(
        &mut self,
        loan_id: LoanId,
        amount: Amount,
        caller: &AccountId,
        current_height: BlockHeight,
    ) -> Result<SequenceNumber> {
        let loan = self
            .loans
            .get_mut(&loan_id)
            .ok_or_else(|| LedgerError::not_found("loan", loan_id))?;
        if !loan.status.is_active() {
            return Err(LedgerError::LoanNotActive {
                status: loan.status,
            });
        }
        if amount.is_zero() {
            return Err(LedgerError::invalid_input(
                "repayment amount must be positive",
            ));
        }
        let new_total =
            loan.total_repaid
                .checked_add(amount)
                .ok_or(LedgerError::ArithmeticOverflow {
                    context: "loan total repaid",
                })?;

        // all checks passed; mutate
        let sequence = self.sequence.next_value();
        loan.total_repaid = new_total;
        self.events.emit(LedgerEvent::RepaymentRecorded {
            loan_id,
            sequence,
            amount,
            payer: caller.clone(),
            total_repaid: new_total,
            height: current_height,
        });
        if loan.total_repaid >= loan.principal {
            loan.status = LoanStatus::Repaid;
            self.events.emit(LedgerEvent::LoanStatusChanged {
                loan_id,
                old_status: LoanStatus::Active,
                new_status: LoanStatus::Repaid,
            });
        }
        self.repayments.upsert(
            (loan_id, sequence),
            Repayment {
                loan_id,
                sequence,
                amount,
                recorded_at_height: current_height,
                payer: caller.clone(),
            },
        );
        Ok(sequence)
    }

    /// declare an active loan defaulted; owner only
    pub fn mark_defaulted(&mut self, loan_id: LoanId, caller: &AccountId) -> Result<()> {
        // existence is checked before authorization
        let loan = self
            .loans
            .get_mut(&loan_id)
            .ok_or_else(|| LedgerError::not_found("loan", loan_id))?;
        if !self.config.is_owner(caller) {
            return Err(LedgerError::Unauthorized);
        }
        if !loan.status.is_active() {
            return Err(LedgerError::LoanNotActive {
                status: loan.status,
            });
        }

        loan.status = LoanStatus::Defaulted;
        self.events.emit(LedgerEvent::LoanStatusChanged {
            loan_id,
            old_status: LoanStatus::Active,
            new_status: LoanStatus::Defaulted,
        });
        Ok(())
    }

    pub fn loan(&self, loan_id: LoanId) -> Result<&Loan> {
        self.loans
            .get(&loan_id)
            .ok_or_else(|| LedgerError::not_found("loan", loan_id))
    }

    pub fn repayment(&self, loan_id: LoanId, sequence: SequenceNumber) -> Result<&Repayment> {
        self.repayments
            .get(&(loan_id, sequence))
            .ok_or_else(|| LedgerError::not_found("repayment", format!("{loan_id}#{sequence}")))
    }

    /// signed balance still owed on a loan; negative once overpaid
    pub fn remaining_amount(&self, loan_id: LoanId) -> Result<i128> {
        Ok(self.loan(loan_id)?.remaining_amount())
    }

    /// most recently assigned repayment sequence number, 0 if none
    pub fn last_sequence(&self) -> SequenceNumber {
        self.sequence.current()
    }
}
