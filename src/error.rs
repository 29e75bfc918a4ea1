use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlexagonalError {
    #[error("could not load asset \"{file_name}\": {source}")]
    Asset {
        file_name: String,
        source: std::io::Error,
    },

    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AlexagonalError>;
