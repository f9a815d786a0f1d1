use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmojifyError {
    #[error("failed to decode image: {0}")]
    DecodeError(String),

    #[error("image dimensions are zero")]
    ZeroDimensions,

    #[error("failed to encode image: {0}")]
    EncodeError(String),

    #[error("quality must be between 0.0 and 1.0, got {0}")]
    InvalidQuality(f32),

    #[error("scale factor must be finite and > 0, got {0}")]
    InvalidScaleFactor(f32),

    #[error("no face detector configured and no precomputed faces supplied")]
    NoDetector,

    #[error("no emoji set configured")]
    NoEmojiSet,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
