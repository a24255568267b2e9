use crate::domain::{Error, StakingAction, ValidationVerdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakingActionState {
    Editing,
    Confirming,
    Submitting,
    Succeeded,
}

/// One stake/unstake attempt, from amount entry to a submitted transaction.
///
/// `Succeeded` is terminal; a new attempt is a new `StakingFlow`. Every
/// transition that leaves `Editing` or `Confirming` takes the caller's
/// `pending` flag and refuses to move while it is set.
#[derive(Debug, Clone)]
pub struct StakingFlow {
    action: StakingAction,
    state: StakingActionState,
}

impl StakingFlow {
    pub fn new(action: StakingAction) -> Self {
        Self {
            action,
            state: StakingActionState::Editing,
        }
    }

    pub fn action(&self) -> StakingAction {
        self.action
    }

    pub fn state(&self) -> StakingActionState {
        self.state
    }

    pub fn request_confirm(
        &mut self,
        verdict: &ValidationVerdict,
        pending: bool,
    ) -> Result<StakingActionState, Error> {
        match self.state {
            StakingActionState::Editing if verdict.permits(pending) => {
                self.transition(StakingActionState::Confirming)
            }
            _ => Err(self.invalid("request confirmation")),
        }
    }

    pub fn cancel(&mut self, pending: bool) -> Result<StakingActionState, Error> {
        match self.state {
            StakingActionState::Confirming if !pending => {
                self.transition(StakingActionState::Editing)
            }
            _ => Err(self.invalid("cancel")),
        }
    }

    pub fn confirm_submission(&mut self, pending: bool) -> Result<StakingActionState, Error> {
        match self.state {
            StakingActionState::Confirming if !pending => {
                self.transition(StakingActionState::Submitting)
            }
            _ => Err(self.invalid("submit")),
        }
    }

    pub fn submission_succeeded(&mut self) -> Result<StakingActionState, Error> {
        match self.state {
            StakingActionState::Submitting => self.transition(StakingActionState::Succeeded),
            _ => Err(self.invalid("complete submission")),
        }
    }

    /// Back to the confirm step; the verdict still holds since the entry is unchanged.
    pub fn submission_failed(&mut self) -> Result<StakingActionState, Error> {
        match self.state {
            StakingActionState::Submitting => self.transition(StakingActionState::Confirming),
            _ => Err(self.invalid("fail submission")),
        }
    }

    /// Keyboard confirm: opens confirmation from `Editing`, submits from `Confirming`.
    pub fn confirm_key(
        &mut self,
        verdict: &ValidationVerdict,
        pending: bool,
    ) -> Result<StakingActionState, Error> {
        match self.state {
            StakingActionState::Editing => self.request_confirm(verdict, pending),
            StakingActionState::Confirming if verdict.permits(pending) => {
                self.confirm_submission(pending)
            }
            _ => Err(self.invalid("confirm by key")),
        }
    }

    fn transition(&mut self, next: StakingActionState) -> Result<StakingActionState, Error> {
        tracing::debug!(action = %self.action, from = ?self.state, to = ?next, "staking flow transition");
        self.state = next;
        Ok(next)
    }

    fn invalid(&self, event: &'static str) -> Error {
        Error::InvalidTransition {
            from: self.state,
            event,
        }
    }
}
