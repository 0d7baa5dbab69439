//! Investor participation flow: create an investment against a loan,
//! distribute returns as the owner, and close it out explicitly.

use lending_ledger_rs::{
    AccountId, Amount, Bps, InvestmentLedger, LedgerConfig, LoanLedger, Uuid,
};

fn main() -> lending_ledger_rs::Result<()> {
    let owner = AccountId::new("platform-owner");
    let borrower = AccountId::new("acme-bakery");
    let investor = AccountId::new("investor-7");

    let mut loans = LoanLedger::new(LedgerConfig::new(owner.clone()));
    let mut investments = InvestmentLedger::new(LedgerConfig::new(owner.clone()));

    let loan_id = Uuid::new_v4();
    loans.create_loan(
        loan_id,
        Uuid::new_v4(),
        Amount::new(100_000),
        Bps::new(500),
        5_000,
        &borrower,
        1_000,
    )?;

    // the caller carries the loan id across; the investment ledger
    // stores it without resolving it
    let investment_id = Uuid::new_v4();
    investments.create_investment(
        investment_id,
        loan_id,
        Amount::new(50_000),
        Bps::new(2_000),
        &investor,
    )?;
    println!(
        "expected returns: {}",
        investments.expected_returns(investment_id)?
    );

    investments.distribute_returns(
        Uuid::new_v4(),
        investment_id,
        Amount::new(30_000),
        &owner,
        2_000,
    )?;
    investments.distribute_returns(
        Uuid::new_v4(),
        investment_id,
        Amount::new(30_000),
        &owner,
        3_000,
    )?;
    let investment = investments.investment(investment_id)?;
    println!(
        "distributed {} -> status {:?}",
        investment.total_distributed, investment.status
    );

    // fully paid out, but completion is always an explicit call
    investments.mark_completed(investment_id, &owner)?;
    println!(
        "final status: {:?}",
        investments.investment(investment_id)?.status
    );
    Ok(())
}
