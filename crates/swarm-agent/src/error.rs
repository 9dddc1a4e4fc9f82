use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("trajectory has {got} samples, horizon is {expected}")]
    TrajectoryLength { expected: usize, got: usize },
}

pub type AgentResult<T> = Result<T, AgentError>;
