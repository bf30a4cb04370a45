use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Ollama API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model listing error: {0}")]
    ModelList(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image tensor: {0}")]
    ImageTensor(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn model_list(msg: impl Into<String>) -> Self {
        Self::ModelList(msg.into())
    }

    pub fn image_tensor(msg: impl Into<String>) -> Self {
        Self::ImageTensor(msg.into())
    }
}
