use thiserror::Error;

pub type DescriptorResult<T> = Result<T, DescriptorError>;

#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("Malformed descriptor payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Descriptor error: {0}")]
    Generic(String),
}

impl From<String> for DescriptorError {
    fn from(s: String) -> Self {
        DescriptorError::Generic(s)
    }
}

impl From<&str> for DescriptorError {
    fn from(s: &str) -> Self {
        DescriptorError::Generic(s.to_string())
    }
}
