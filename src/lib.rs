//! Balance aggregation and staking amount validation for a proof-of-stake wallet.
//!
//! [`aggregator`] turns raw chain balance figures into a [`ProfileBalance`];
//! [`validator`] checks user-entered amounts against it before a stake or
//! unstake is allowed to proceed.

pub mod aggregator;
pub mod config;
pub mod display;
pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod output_repository;
pub mod submitter;
pub mod validator;

pub use aggregator::{BalanceAggregator, aggregate};
pub use domain::{
    Amount, Error, ProfileBalance, RawBalanceSnapshot, Result, StakingAction, StakingActionState,
    StakingFlow, ValidationVerdict,
};
pub use validator::{StakeAmountValidator, validate};
