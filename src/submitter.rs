use crate::domain::{Amount, Error, StakeSubmitter, StakingRequest};

/// Logs the transaction it would build instead of sending it.
#[derive(Default, Debug)]
pub struct DryRunSubmitter {}

impl StakeSubmitter for DryRunSubmitter {
    fn submit(&mut self, request: &StakingRequest, amount: Amount) -> Result<(), Error> {
        tracing::info!(
            action = %request.action,
            validator = %request.validator,
            %amount,
            "dry run: would submit staking transaction"
        );
        Ok(())
    }
}
