use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("solver configuration error: {0}")]
    Config(String),
}

pub type SolverResult<T> = Result<T, SolverError>;
