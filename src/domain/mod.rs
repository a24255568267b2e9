pub mod amount;
pub mod error;
pub mod flow;
pub mod profile;
pub mod request;
pub mod snapshot;
pub mod staking;
pub mod traits;

pub use amount::{Amount, U256, is_decimal_string};
pub use error::{Error, Result};
pub use flow::{StakingActionState, StakingFlow};
pub use profile::{LockupBalance, ProfileBalance, StakingPoolsBalance, UnlockedBalance, WalletBalance};
pub use request::{StakingContext, StakingRequest, ValidatorPosition};
pub use snapshot::{RawBalanceSnapshot, StakingTotals};
pub use staking::{StakingAction, ValidationVerdict};
pub use traits::{DeadLetterQueue, StakeSubmitter, StakingRequestStream, VerdictOutput};
