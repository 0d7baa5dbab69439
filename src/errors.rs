use thiserror::Error;

use crate::types::{InvestmentStatus, LoanStatus};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unauthorized: caller is not the configured owner")]
    Unauthorized,

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("loan not active: current status is {status:?}")]
    LoanNotActive { status: LoanStatus },

    #[error("investment not active: current status is {status:?}")]
    InvestmentNotActive { status: InvestmentStatus },

    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow { context: &'static str },
}

impl LedgerError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        LedgerError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        LedgerError::InvalidInput {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
