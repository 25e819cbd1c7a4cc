use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("a plan needs at least one action")]
    Empty,

    #[error("plan is exhausted: every action has completed")]
    Exhausted,
}

pub type PlanResult<T> = Result<T, PlanError>;
