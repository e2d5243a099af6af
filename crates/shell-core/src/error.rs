use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    #[error("invalid content url `{0}`: {1}")]
    InvalidUrl(String, String),
}
