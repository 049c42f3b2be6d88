/// Errors produced while building or driving a slider.
#[derive(Debug, thiserror::Error)]
pub enum SliderError {
    #[error("slider container not found for selector `{0}`")]
    ContainerNotFound(String),

    #[error("slide index {index} out of range ({len} slides)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid slider configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid slider options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("host environment error: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, SliderError>;
