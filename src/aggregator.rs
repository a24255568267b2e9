use crate::config;
use crate::domain::{
    Amount, Error, LockupBalance, ProfileBalance, RawBalanceSnapshot, StakingPoolsBalance,
    StakingTotals, UnlockedBalance, WalletBalance,
};

/// Builds a [`ProfileBalance`] with the native lockup storage reserve.
pub fn aggregate(snapshot: &RawBalanceSnapshot) -> Result<ProfileBalance, Error> {
    BalanceAggregator::default().aggregate(snapshot)
}

#[derive(Debug, Clone)]
pub struct BalanceAggregator {
    lockup_min_balance: Amount,
}

impl Default for BalanceAggregator {
    fn default() -> Self {
        Self::new(config::AssetConfig::default().lockup_min_balance)
    }
}

impl BalanceAggregator {
    pub fn new(lockup_min_balance: Amount) -> Self {
        Self { lockup_min_balance }
    }

    /// Relabels the pre-aggregated chain figures into the display breakdown.
    ///
    /// `Err(MissingBalanceData)` means the snapshot is still loading and must not
    /// be rendered as a zero balance.
    pub fn aggregate(&self, snapshot: &RawBalanceSnapshot) -> Result<ProfileBalance, Error> {
        let total_available = required(snapshot.account.total_available, "account.totalAvailable")?;
        let staked_main = required(snapshot.staked_balance_main_account, "stakedBalanceMainAccount")?;
        let balance_available = required(snapshot.balance_available, "balanceAvailable")?;
        let state_staked = required(snapshot.state_staked, "stateStaked")?;

        let wallet_balance = WalletBalance {
            wallet_balance: Amount::sum([staked_main, balance_available, state_staked])?,
            reserved_for_storage: state_staked,
            in_staking_pools: StakingPoolsBalance {
                sum: staked_main,
                staked: required(snapshot.account.total_staked, "account.totalStaked")?,
                pending_release: required(snapshot.account.total_pending, "account.totalPending")?,
                available_for_withdraw: total_available,
            },
            available: balance_available,
        };

        let lockup_balance = if snapshot.lockup_id_exists {
            Some(self.lockup_balance(snapshot)?)
        } else {
            None
        };

        tracing::debug!(
            wallet_balance = %wallet_balance.wallet_balance,
            lockup = lockup_balance.is_some(),
            "aggregated profile balance"
        );

        Ok(ProfileBalance {
            wallet_balance,
            lockup_id: snapshot.lockup_account_id.clone(),
            lockup_balance,
        })
    }

    fn lockup_balance(&self, snapshot: &RawBalanceSnapshot) -> Result<LockupBalance, Error> {
        let pools: &StakingTotals = snapshot
            .lockup_account
            .as_ref()
            .ok_or(Error::MissingBalanceData("lockupAccount"))?;

        Ok(LockupBalance {
            lockup_balance: required(snapshot.total_balance, "totalBalance")?,
            reserved_for_storage: self.lockup_min_balance,
            in_staking_pools: StakingPoolsBalance {
                sum: required(snapshot.staked_balance_lockup, "stakedBalanceLockup")?,
                staked: required(pools.total_staked, "lockupAccount.totalStaked")?,
                pending_release: required(pools.total_pending, "lockupAccount.totalPending")?,
                available_for_withdraw: required(
                    pools.total_available,
                    "lockupAccount.totalAvailable",
                )?,
            },
            locked: required(snapshot.locked_amount, "lockedAmount")?,
            unlocked: UnlockedBalance {
                sum: required(snapshot.owners_balance, "ownersBalance")?,
                available_to_transfer: required(
                    snapshot.liquid_owners_balance,
                    "liquidOwnersBalance",
                )?,
            },
        })
    }
}

fn required(value: Option<Amount>, field: &'static str) -> Result<Amount, Error> {
    value.ok_or(Error::MissingBalanceData(field))
}
