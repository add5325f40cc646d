use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid control input: {0}")]
    InvalidControl(String),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("State error: {0}")]
    StateError(String),
}
