use thiserror::Error;

#[derive(Error, Debug)]
pub enum KineticError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Malformed Sample: expected {expected} landmarks, found {found}")]
    MalformedSample { expected: usize, found: usize },

    #[error("Landmark {index} out of range: {value}")]
    LandmarkOutOfRange { index: usize, value: f32 },

    #[error("Recording Error (line {line}): {reason}")]
    Recording { line: usize, reason: String },
}

pub type KinResult<T> = Result<T, KineticError>;
