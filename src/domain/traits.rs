use futures::Stream;

use crate::domain::{Amount, Error, ProfileBalance, StakingRequest, ValidationVerdict};

pub trait StakingRequestStream {
    type RequestStream: Stream<Item = Result<StakingRequest, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::RequestStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait VerdictOutput {
    fn report_profile(&mut self, profile: &ProfileBalance);

    fn report_verdict(&mut self, request: &StakingRequest, verdict: &ValidationVerdict);

    fn flush(&mut self);
}

/// Hands an allowed amount to the transaction layer.
pub trait StakeSubmitter {
    fn submit(&mut self, request: &StakingRequest, amount: Amount) -> Result<(), Error>;
}
