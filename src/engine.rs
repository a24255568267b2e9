use crate::aggregator::BalanceAggregator;
use crate::config::AssetConfig;
use crate::domain::{
    Amount, Error, ProfileBalance, StakingContext, StakingFlow, StakingRequest, ValidationVerdict,
    traits::{DeadLetterQueue, StakeSubmitter, StakingRequestStream, VerdictOutput},
};
use crate::validator::StakeAmountValidator;

use futures::StreamExt;

/// Validates a stream of staking requests against one balance snapshot.
///
/// Each request is checked on its own against the snapshot; an allowed request
/// does not reduce the balance seen by the next one.
#[derive(Debug)]
pub struct Engine<I, O, D, S>
where
    I: StakingRequestStream,
    O: VerdictOutput,
    D: DeadLetterQueue,
    S: StakeSubmitter,
{
    ingestion: I,
    output: O,
    dlq: D,
    submitter: S,
    config: AssetConfig,
}

impl<I, O, D, S> Engine<I, O, D, S>
where
    I: StakingRequestStream,
    O: VerdictOutput,
    D: DeadLetterQueue,
    S: StakeSubmitter,
{
    pub fn new(ingestion: I, output: O, dlq: D, submitter: S, config: AssetConfig) -> Self {
        Self {
            ingestion,
            output,
            dlq,
            submitter,
            config,
        }
    }

    /// Fails only when the snapshot is incomplete; per-request errors go to the DLQ.
    pub async fn process(&mut self, context: &StakingContext) -> Result<(), Error> {
        let profile =
            BalanceAggregator::new(self.config.lockup_min_balance).aggregate(&context.balance)?;
        self.output.report_profile(&profile);

        let validator = StakeAmountValidator::from(&self.config);
        let mut requests = self.ingestion.stream();

        while let Some(request) = requests.next().await {
            match request {
                Ok(request) => {
                    if let Err(e) = self.apply_request(&request, &profile, context, &validator) {
                        self.dlq.report(&e);
                    }
                }
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_request(
        &mut self,
        request: &StakingRequest,
        profile: &ProfileBalance,
        context: &StakingContext,
        validator: &StakeAmountValidator,
    ) -> Result<(), Error> {
        let position = context
            .position(&request.validator)
            .ok_or_else(|| Error::UnknownValidator(request.validator.clone()))?;

        let verdict = validator.validate(
            &request.amount,
            profile.available_to_stake(),
            request.action,
            position.staked,
        );
        self.output.report_verdict(request, &verdict);

        match verdict.amount_for_submission() {
            Some(amount) => self.submit(request, &verdict, amount),
            None => {
                if let Some(reason) = verdict.rejection() {
                    tracing::info!(request = %request, %reason, "staking request rejected");
                }
                Ok(())
            }
        }
    }

    fn submit(
        &mut self,
        request: &StakingRequest,
        verdict: &ValidationVerdict,
        amount: Amount,
    ) -> Result<(), Error> {
        let mut flow = StakingFlow::new(request.action);
        flow.request_confirm(verdict, false)?;
        flow.confirm_submission(false)?;

        match self.submitter.submit(request, amount) {
            Ok(()) => {
                flow.submission_succeeded()?;
                tracing::info!(request = %request, %amount, "staking request submitted");
                Ok(())
            }
            Err(e) => {
                flow.submission_failed()?;
                Err(e)
            }
        }
    }

    pub fn flush(&mut self) {
        self.output.flush();
    }
}
