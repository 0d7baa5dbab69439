//! Minimal walkthrough of the loan ledger: create an obligation, record
//! repayments, and watch the automatic transition to Repaid.

use lending_ledger_rs::{AccountId, Amount, Bps, LedgerConfig, LoanLedger, Uuid};

fn main() -> lending_ledger_rs::Result<()> {
    let owner = AccountId::new("platform-owner");
    let borrower = AccountId::new("acme-bakery");
    let mut ledger = LoanLedger::new(LedgerConfig::new(owner));

    // 100_000 at 5% simple interest over 5_000 blocks
    let loan_id = Uuid::new_v4();
    ledger.create_loan(
        loan_id,
        Uuid::new_v4(),
        Amount::new(100_000),
        Bps::new(500),
        5_000,
        &borrower,
        1_000,
    )?;
    println!("created loan {loan_id}");
    println!("remaining: {}", ledger.remaining_amount(loan_id)?);

    let sequence = ledger.make_repayment(loan_id, Amount::new(50_000), &borrower, 1_200)?;
    println!(
        "repayment #{sequence} recorded, remaining: {}",
        ledger.remaining_amount(loan_id)?
    );

    ledger.make_repayment(loan_id, Amount::new(55_000), &borrower, 1_400)?;
    let loan = ledger.loan(loan_id)?;
    println!(
        "total repaid {} -> status {:?}, remaining {}",
        loan.total_repaid,
        loan.status,
        ledger.remaining_amount(loan_id)?
    );

    for event in ledger.events.take_events() {
        println!("event: {event:?}");
    }
    Ok(())
}
