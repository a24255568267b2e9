use serde::Deserialize;

use crate::domain::Amount;

/// Balance figures as returned by the chain-query layer.
///
/// Everything is optional on the wire: a snapshot that is still loading simply
/// lacks fields, and the aggregator decides which ones it needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBalanceSnapshot {
    #[serde(default)]
    pub account: StakingTotals,
    pub balance_available: Option<Amount>,
    pub state_staked: Option<Amount>,
    pub staked_balance_main_account: Option<Amount>,
    #[serde(default)]
    pub lockup_id_exists: bool,

    pub lockup_account_id: Option<String>,
    pub total_balance: Option<Amount>,
    pub locked_amount: Option<Amount>,
    pub liquid_owners_balance: Option<Amount>,
    pub owners_balance: Option<Amount>,
    pub staked_balance_lockup: Option<Amount>,
    pub lockup_account: Option<StakingTotals>,
}

/// Pre-aggregated staking pool figures for one account.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingTotals {
    pub total_available: Option<Amount>,
    pub total_pending: Option<Amount>,
    pub total_staked: Option<Amount>,
}
