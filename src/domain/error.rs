use crate::domain::StakingAction;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Balance data not available yet: missing {0}")]
    MissingBalanceData(&'static str),

    #[error("Invalid amount format: {0:?}")]
    InvalidAmountFormat(String),

    #[error("{}", insufficient_balance_message(.action))]
    InsufficientBalance { action: StakingAction },

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Amount overflows 256 bits")]
    AmountOverflow,

    #[error("Cannot {event} while {from:?}")]
    InvalidTransition {
        from: crate::domain::StakingActionState,
        event: &'static str,
    },

    #[error("Unknown validator: {0}")]
    UnknownValidator(String),

    #[error("Configuration failed with: {0}")]
    Config(String),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Submission failed with: {0}")]
    Submission(String),
}

fn insufficient_balance_message(action: &StakingAction) -> &'static str {
    match action {
        StakingAction::Stake => "Insufficient available balance to stake this amount",
        StakingAction::Unstake => "Staked balance with this validator is lower than the amount",
    }
}
