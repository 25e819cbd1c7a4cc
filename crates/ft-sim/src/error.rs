use ft_core::TargetId;
use ft_plan::PlanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("no live agent with identity {0}")]
    UnknownTarget(TargetId),

    #[error("plan error: {0}")]
    Plan(#[from] PlanError),

    #[error("simulation configuration error: {0}")]
    Config(String),
}

pub type SimResult<T> = Result<T, SimError>;
