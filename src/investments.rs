use serde::{Deserialize, Serialize};

use crate::amount::{Amount, Bps};
use crate::config::LedgerConfig;
use crate::errors::{LedgerError, Result};
use crate::events::{EventStore, LedgerEvent};
use crate::store::Table;
use crate::types::{
    AccountId, BlockHeight, DistributionId, InvestmentId, InvestmentStatus, LoanId,
};

/// an investor's participation in a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub investment_id: InvestmentId,
    /// external reference; the investment ledger never resolves it
    pub loan_id: LoanId,
    pub investor: AccountId,
    pub principal: Amount,
    /// ownership share in (0, 10_000] basis points
    pub share_bps: Bps,
    /// monotonically non-decreasing; never capped
    pub total_distributed: Amount,
    pub status: InvestmentStatus,
}

impl Investment {
    /// Full contractual return: principal plus
    /// floor(principal * share_bps / 10_000).
    ///
    /// A static projection. It ignores what has already been
    /// distributed and the current status.
    pub fn expected_returns(&self) -> u128 {
        self.principal.as_u128() + self.share_bps.of(self.principal)
    }
}

/// one distribution entry in the append-only log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub distribution_id: DistributionId,
    pub investment_id: InvestmentId,
    pub amount: Amount,
    pub recorded_at_height: BlockHeight,
    /// the investment's investor at the time of distribution
    pub recipient: AccountId,
}

/// The investment side of the ledger: participations plus their
/// append-only distribution log.
///
/// Distributions and both closing transitions are owner-only; unlike a
/// loan, an investment never completes automatically no matter how much
/// has been distributed.
#[derive(Debug)]
pub struct InvestmentLedger {
    config: LedgerConfig,
    investments: Table<InvestmentId, Investment>,
    distributions: Table<DistributionId, Distribution>,
    pub events: EventStore,
}

impl InvestmentLedger {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            investments: Table::new(),
            distributions: Table::new(),
            events: EventStore::new(),
        }
    }

    /// record a new participation in a loan
    ///
    /// `loan_id` is accepted as-is; whether it names a live loan is the
    /// caller's concern.
    pub fn create_investment(
        &mut self,
        investment_id: InvestmentId,
        loan_id: LoanId,
        principal: Amount,
        share_bps: Bps,
        caller: &AccountId,
    ) -> Result<()> {
        if principal.is_zero() {
            return Err(LedgerError::invalid_input(
                "investment principal must be positive",
            ));
        }
        if !share_bps.is_valid_share() {
            return Err(LedgerError::invalid_input(format!(
                "share must be within (0, 10000] basis points, got {share_bps}"
            )));
        }
        if self.investments.contains(&investment_id) {
            return Err(LedgerError::invalid_input(format!(
                "investment {investment_id} already exists"
            )));
        }

        let investment = Investment {
            investment_id,
            loan_id,
            investor: caller.clone(),
            principal,
            share_bps,
            total_distributed: Amount::ZERO,
            status: InvestmentStatus::Active,
        };
        self.events.emit(LedgerEvent::InvestmentCreated {
            investment_id,
            loan_id,
            investor: caller.clone(),
            principal,
            share_bps,
        });
        self.investments.upsert(investment_id, investment);
        Ok(())
    }

    /// Pay returns out to the investor; owner only.
    ///
    /// Appends one distribution addressed to the investment's investor
    /// and accumulates the total. The status never changes here;
    /// completion is always a separate explicit call.
    pub fn distribute_returns(
        &mut self,
        distribution_id: DistributionId,
        investment_id: InvestmentId,
        amount: Amount,
        caller: &AccountId,
        current_height: BlockHeight,
    ) -> Result<()> {
        // existence is checked before authorization
        let investment = self
            .investments
            .get_mut(&investment_id)
            .ok_or_else(|| LedgerError::not_found("investment", investment_id))?;
        if !self.config.is_owner(caller) {
            return Err(LedgerError::Unauthorized);
        }
        if !investment.status.is_active() {
            return Err(LedgerError::InvestmentNotActive {
                status: investment.status,
            });
        }
        if amount.is_zero() {
            return Err(LedgerError::invalid_input(
                "distribution amount must be positive",
            ));
        }
        if self.distributions.contains(&distribution_id) {
            return Err(LedgerError::invalid_input(format!(
                "distribution {distribution_id} already exists"
            )));
        }
        let new_total = investment.total_distributed.checked_add(amount).ok_or(
            LedgerError::ArithmeticOverflow {
                context: "investment total distributed",
            },
        )?;

        // all checks passed; mutate
        investment.total_distributed = new_total;
        let recipient = investment.investor.clone();
        self.events.emit(LedgerEvent::ReturnsDistributed {
            distribution_id,
            investment_id,
            amount,
            recipient: recipient.clone(),
            total_distributed: new_total,
            height: current_height,
        });
        self.distributions.upsert(
            distribution_id,
            Distribution {
                distribution_id,
                investment_id,
                amount,
                recorded_at_height: current_height,
                recipient,
            },
        );
        Ok(())
    }

    /// close out an active investment; owner only
    pub fn mark_completed(&mut self, investment_id: InvestmentId, caller: &AccountId) -> Result<()> {
        self.close(investment_id, caller, InvestmentStatus::Completed)
    }

    /// declare an active investment defaulted; owner only
    pub fn mark_defaulted(&mut self, investment_id: InvestmentId, caller: &AccountId) -> Result<()> {
        self.close(investment_id, caller, InvestmentStatus::Defaulted)
    }

    // both closing transitions share the same check order
    fn close(
        &mut self,
        investment_id: InvestmentId,
        caller: &AccountId,
        next: InvestmentStatus,
    ) -> Result<()> {
        let investment = self
            .investments
            .get_mut(&investment_id)
            .ok_or_else(|| LedgerError::not_found("investment", investment_id))?;
        if !self.config.is_owner(caller) {
            return Err(LedgerError::Unauthorized);
        }
        if !investment.status.is_active() {
            return Err(LedgerError::InvestmentNotActive {
                status: investment.status,
            });
        }

        investment.status = next;
        self.events.emit(LedgerEvent::InvestmentStatusChanged {
            investment_id,
            old_status: InvestmentStatus::Active,
            new_status: next,
        });
        Ok(())
    }

    pub fn investment(&self, investment_id: InvestmentId) -> Result<&Investment> {
        self.investments
            .get(&investment_id)
            .ok_or_else(|| LedgerError::not_found("investment", investment_id))
    }

    pub fn distribution(&self, distribution_id: DistributionId) -> Result<&Distribution> {
        self.distributions
            .get(&distribution_id)
            .ok_or_else(|| LedgerError::not_found("distribution", distribution_id))
    }

    /// full expected return for an investment, regardless of progress
    pub fn expected_returns(&self, investment_id: InvestmentId) -> Result<u128> {
        Ok(self.investment(investment_id)?.expected_returns())
    }
}
