use crate::config::{self, AssetConfig};
use crate::domain::{Amount, StakingAction, ValidationVerdict};

/// Validates an entry with the default dust tolerance for `decimals`.
pub fn validate(
    entry: &str,
    available_balance: Amount,
    action: StakingAction,
    position_staked: Amount,
    decimals: u32,
) -> ValidationVerdict {
    StakeAmountValidator::new(decimals, config::default_dust_tolerance(decimals)).validate(
        entry,
        available_balance,
        action,
        position_staked,
    )
}

#[derive(Debug, Clone, Copy)]
pub struct StakeAmountValidator {
    decimals: u32,
    dust_tolerance: Amount,
}

impl From<&AssetConfig> for StakeAmountValidator {
    fn from(config: &AssetConfig) -> Self {
        Self::new(config.decimals, config.dust_tolerance)
    }
}

impl StakeAmountValidator {
    pub fn new(decimals: u32, dust_tolerance: Amount) -> Self {
        Self {
            decimals,
            dust_tolerance,
        }
    }

    /// Checks `entry` against the balance the action draws from.
    ///
    /// Stake draws from `available_balance` and may overshoot it by the dust
    /// tolerance. Unstake draws from `position_staked` with no tolerance.
    pub fn validate(
        &self,
        entry: &str,
        available_balance: Amount,
        action: StakingAction,
        position_staked: Amount,
    ) -> ValidationVerdict {
        let parsed = Amount::parse_decimal(entry, self.decimals).ok();

        let has_sufficient_source_balance = match (parsed, action) {
            (None, _) => false,
            (Some(amount), StakingAction::Stake) => {
                amount <= available_balance.saturating_add(self.dust_tolerance)
            }
            (Some(amount), StakingAction::Unstake) => amount <= position_staked,
        };

        let is_decimal_format_valid = parsed.is_some();
        let is_action_allowed = is_decimal_format_valid
            && parsed.is_some_and(|amount| !amount.is_zero())
            && has_sufficient_source_balance;

        tracing::debug!(
            %action,
            entry,
            is_decimal_format_valid,
            has_sufficient_source_balance,
            is_action_allowed,
            "validated staking amount"
        );

        ValidationVerdict {
            entry: entry.to_string(),
            action,
            parsed_amount_minimal_units: parsed,
            is_decimal_format_valid,
            has_sufficient_source_balance,
            is_action_allowed,
        }
    }
}
