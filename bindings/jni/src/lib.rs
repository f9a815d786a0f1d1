uniffi::setup_scaffolding!();

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum EmojifyError {
    #[error("failed to decode image: {message}")]
    DecodeError { message: String },
    #[error("image dimensions are zero")]
    ZeroDimensions,
    #[error("failed to encode image: {message}")]
    EncodeError { message: String },
    #[error("invalid quality value")]
    InvalidQuality,
    #[error("invalid scale factor")]
    InvalidScaleFactor,
    #[error("no face detector configured")]
    NoDetector,
    #[error("no emoji set configured")]
    NoEmojiSet,
    #[error("i/o error: {message}")]
    Io { message: String },
}

impl From<emojify::EmojifyError> for EmojifyError {
    fn from(e: emojify::EmojifyError) -> Self {
        match e {
            emojify::EmojifyError::DecodeError(msg) => EmojifyError::DecodeError { message: msg },
            emojify::EmojifyError::ZeroDimensions => EmojifyError::ZeroDimensions,
            emojify::EmojifyError::EncodeError(msg) => EmojifyError::EncodeError { message: msg },
            emojify::EmojifyError::InvalidQuality(_) => EmojifyError::InvalidQuality,
            emojify::EmojifyError::InvalidScaleFactor(_) => EmojifyError::InvalidScaleFactor,
            emojify::EmojifyError::NoDetector => EmojifyError::NoDetector,
            emojify::EmojifyError::NoEmojiSet => EmojifyError::NoEmojiSet,
            emojify::EmojifyError::Io(e) => EmojifyError::Io {
                message: e.to_string(),
            },
        }
    }
}

#[derive(uniffi::Enum)]
pub enum Emoji {
    Smile,
    Frown,
    LeftWink,
    RightWink,
    LeftWinkFrown,
    RightWinkFrown,
    ClosedEyeSmile,
    ClosedEyeFrown,
}

impl From<emojify::Emoji> for Emoji {
    fn from(emoji: emojify::Emoji) -> Self {
        match emoji {
            emojify::Emoji::Smile => Emoji::Smile,
            emojify::Emoji::Frown => Emoji::Frown,
            emojify::Emoji::LeftWink => Emoji::LeftWink,
            emojify::Emoji::RightWink => Emoji::RightWink,
            emojify::Emoji::LeftWinkFrown => Emoji::LeftWinkFrown,
            emojify::Emoji::RightWinkFrown => Emoji::RightWinkFrown,
            emojify::Emoji::ClosedEyeSmile => Emoji::ClosedEyeSmile,
            emojify::Emoji::ClosedEyeFrown => Emoji::ClosedEyeFrown,
        }
    }
}

#[derive(uniffi::Enum)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl From<OutputFormat> for emojify::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => emojify::OutputFormat::Png,
            OutputFormat::Jpeg => emojify::OutputFormat::Jpeg,
        }
    }
}

impl From<emojify::OutputFormat> for OutputFormat {
    fn from(format: emojify::OutputFormat) -> Self {
        match format {
            emojify::OutputFormat::Png => OutputFormat::Png,
            emojify::OutputFormat::Jpeg => OutputFormat::Jpeg,
        }
    }
}

#[derive(Clone, uniffi::Record)]
pub struct DetectedFace {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub smiling_probability: f32,
    pub left_eye_open_probability: f32,
    pub right_eye_open_probability: f32,
}

impl From<DetectedFace> for emojify::DetectedFace {
    fn from(face: DetectedFace) -> Self {
        emojify::DetectedFace {
            x: face.x,
            y: face.y,
            width: face.width,
            height: face.height,
            smiling_probability: face.smiling_probability,
            left_eye_open_probability: face.left_eye_open_probability,
            right_eye_open_probability: face.right_eye_open_probability,
        }
    }
}

impl From<emojify::DetectedFace> for DetectedFace {
    fn from(face: emojify::DetectedFace) -> Self {
        DetectedFace {
            x: face.x,
            y: face.y,
            width: face.width,
            height: face.height,
            smiling_probability: face.smiling_probability,
            left_eye_open_probability: face.left_eye_open_probability,
            right_eye_open_probability: face.right_eye_open_probability,
        }
    }
}

#[derive(uniffi::Record)]
pub struct FaceAnnotation {
    pub face: DetectedFace,
    pub emoji: Emoji,
}

#[derive(uniffi::Record)]
pub struct EmojifiedPhoto {
    pub data: Vec<u8>,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
    pub original_size: u64,
    pub annotations: Vec<FaceAnnotation>,
}

fn convert_photo(result: emojify::EmojifiedPhoto) -> EmojifiedPhoto {
    EmojifiedPhoto {
        data: result.data,
        format: result.format.into(),
        width: result.width,
        height: result.height,
        original_size: result.original_size as u64,
        annotations: result
            .annotations
            .into_iter()
            .map(|a| FaceAnnotation {
                face: a.face.into(),
                emoji: a.emoji.into(),
            })
            .collect(),
    }
}

/// Emojify with full control over all parameters. The host runs its own face
/// detection and passes the detections down.
#[uniffi::export]
pub fn emojify(
    input: Vec<u8>,
    faces: Vec<DetectedFace>,
    format: OutputFormat,
    quality: f32,
    scale_factor: f32,
) -> Result<EmojifiedPhoto, EmojifyError> {
    let result = emojify::PhotoEmojifier::new(input)?
        .faces(faces.into_iter().map(Into::into).collect())
        .format(format.into())
        .quality(quality)
        .scale_factor(scale_factor)
        .emojify()?;

    Ok(convert_photo(result))
}

/// Emojify with default settings: PNG output, scale factor 0.9.
#[uniffi::export]
pub fn emojify_with_defaults(
    input: Vec<u8>,
    faces: Vec<DetectedFace>,
) -> Result<EmojifiedPhoto, EmojifyError> {
    let result = emojify::PhotoEmojifier::new(input)?
        .faces(faces.into_iter().map(Into::into).collect())
        .emojify()?;

    Ok(convert_photo(result))
}
