use swarm_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario configuration error: {0}")]
    Config(String),

    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("scenario YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
