use crate::domain::{Amount, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StakingAction {
    Stake,
    Unstake,
}

impl core::fmt::Display for StakingAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StakingAction::Stake => write!(f, "stake"),
            StakingAction::Unstake => write!(f, "unstake"),
        }
    }
}

/// Outcome of checking one user-entered amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    pub entry: String,
    pub action: StakingAction,
    pub parsed_amount_minimal_units: Option<Amount>,
    pub is_decimal_format_valid: bool,
    pub has_sufficient_source_balance: bool,
    pub is_action_allowed: bool,
}

impl ValidationVerdict {
    /// Allowed and the caller is not waiting on a pending operation.
    pub fn permits(&self, pending: bool) -> bool {
        self.is_action_allowed && !pending
    }

    /// The amount to hand to transaction construction, only when allowed.
    pub fn amount_for_submission(&self) -> Option<Amount> {
        self.parsed_amount_minimal_units
            .filter(|_| self.is_action_allowed)
    }

    /// Why the action is refused, in display priority order.
    pub fn rejection(&self) -> Option<Error> {
        match self.parsed_amount_minimal_units {
            None => Some(Error::InvalidAmountFormat(self.entry.clone())),
            Some(amount) if amount.is_zero() => Some(Error::ZeroAmount),
            Some(_) if !self.has_sufficient_source_balance => {
                Some(Error::InsufficientBalance {
                    action: self.action,
                })
            }
            Some(_) => None,
        }
    }
}
