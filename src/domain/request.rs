use serde::Deserialize;

use crate::domain::{Amount, RawBalanceSnapshot, StakingAction};

/// A staking position the main account holds with one validator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorPosition {
    pub account_id: String,
    #[serde(default)]
    pub staked: Amount,
}

/// Chain state a batch of staking requests is validated against.
#[derive(Debug, Clone, Deserialize)]
pub struct StakingContext {
    pub balance: RawBalanceSnapshot,
    #[serde(default)]
    pub validators: Vec<ValidatorPosition>,
}

impl StakingContext {
    pub fn position(&self, validator: &str) -> Option<&ValidatorPosition> {
        self.validators.iter().find(|v| v.account_id == validator)
    }
}

/// A user-entered stake or unstake against a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakingRequest {
    pub action: StakingAction,
    pub validator: String,
    pub amount: String,
}

impl core::fmt::Display for StakingRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{},validator={},amount={}",
            self.action, self.validator, self.amount
        )
    }
}
