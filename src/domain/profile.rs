use serde::Serialize;

use crate::domain::Amount;

/// Display-ready balance breakdown for the active account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBalance {
    pub wallet_balance: WalletBalance,
    pub lockup_id: Option<String>,
    pub lockup_balance: Option<LockupBalance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub wallet_balance: Amount,
    pub reserved_for_storage: Amount,
    pub in_staking_pools: StakingPoolsBalance,
    pub available: Amount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingPoolsBalance {
    pub sum: Amount,
    pub staked: Amount,
    pub pending_release: Amount,
    pub available_for_withdraw: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockupBalance {
    pub lockup_balance: Amount,
    pub reserved_for_storage: Amount,
    pub in_staking_pools: StakingPoolsBalance,
    pub locked: Amount,
    pub unlocked: UnlockedBalance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockedBalance {
    pub sum: Amount,
    pub available_to_transfer: Amount,
}

impl ProfileBalance {
    pub fn lockup_id_exists(&self) -> bool {
        self.lockup_balance.is_some()
    }

    pub fn available_to_stake(&self) -> Amount {
        self.wallet_balance.available
    }

    /// Staked across main account and lockup pools.
    pub fn total_staked(&self) -> Amount {
        let lockup = self
            .lockup_balance
            .as_ref()
            .map(|lockup| lockup.in_staking_pools.sum)
            .unwrap_or_default();
        self.wallet_balance.in_staking_pools.sum.saturating_add(lockup)
    }

    pub fn total_locked(&self) -> Amount {
        self.lockup_balance
            .as_ref()
            .map(|lockup| lockup.locked)
            .unwrap_or_default()
    }
}
