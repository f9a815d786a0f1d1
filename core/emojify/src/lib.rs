//! Face emojification: overlay expression-matched emoji onto detected faces.
//!
//! Face detection itself is a pluggable boundary — supply a [`FaceDetector`]
//! backend, or pass precomputed detections from a host-side vision SDK. The
//! crate owns the expression-to-emoji decision table and the compositing.
//!
//! # Example
//!
//! ```no_run
//! use emojify::{DetectedFace, PhotoEmojifier};
//!
//! let raw_bytes = std::fs::read("photo.jpg").unwrap();
//! let faces = vec![DetectedFace {
//!     x: 120.0,
//!     y: 80.0,
//!     width: 240.0,
//!     height: 240.0,
//!     smiling_probability: 0.92,
//!     left_eye_open_probability: 0.88,
//!     right_eye_open_probability: 0.12,
//! }];
//! let result = PhotoEmojifier::new(raw_bytes)
//!     .unwrap()
//!     .faces(faces)
//!     .emojify()
//!     .unwrap();
//! println!("emojified {} face(s)", result.annotations.len());
//! ```
#![warn(missing_docs)]

mod emoji_set;
mod error;
mod expression;
/// Face detection traits and data types.
pub mod face_detector;
mod overlay;
mod pipeline;
/// Saving results and managing camera-capture scratch files.
pub mod storage;

/// Emoji art lookup table.
pub use emoji_set::EmojiSet;
/// Error type returned by emojify operations.
pub use error::EmojifyError;
/// The eight expression categories.
pub use expression::Emoji;
/// Face detection trait, face record, and precomputed-face adapter.
pub use face_detector::{DetectedFace, FaceDetector, PrecomputedFaces};

/// Output image format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG encoding (lossless, keeps the alpha channel).
    #[default]
    Png,

    /// JPEG encoding (alpha flattened onto white).
    Jpeg,
}

impl OutputFormat {
    /// Conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

/// One detected face together with the emoji chosen for it.
#[derive(Debug, Clone)]
pub struct FaceAnnotation {
    /// The face as reported by the detector.
    pub face: DetectedFace,

    /// The emoji composited onto it.
    pub emoji: Emoji,
}

/// Result of a single emojify operation.
#[derive(Debug, Clone)]
pub struct EmojifiedPhoto {
    /// The encoded output image bytes.
    pub data: Vec<u8>,

    /// The output format used.
    pub format: OutputFormat,

    /// Width of the output image in pixels (always the input width).
    pub width: u32,

    /// Height of the output image in pixels (always the input height).
    pub height: u32,

    /// Size of the original input in bytes.
    pub original_size: usize,

    /// One entry per detected face, in detection order. Empty when no faces
    /// were found — the output is then the unchanged background.
    pub annotations: Vec<FaceAnnotation>,
}

/// Default emoji-to-face scale factor.
const DEFAULT_SCALE_FACTOR: f32 = 0.9;

/// Default JPEG quality.
const DEFAULT_QUALITY: f32 = 0.9;

/// Builder for emojifying photos.
///
/// Decodes the input image on construction, then composites one emoji per
/// detected face with configurable parameters.
pub struct PhotoEmojifier {
    input: Vec<u8>,
    scale_factor: f32,
    quality: f32,
    format: OutputFormat,
    emoji_set: Option<EmojiSet>,
    /// Detection backend. When `None`, the builder falls back to
    /// [`Self::faces`] input; with neither, `emojify` fails.
    detector: Option<Box<dyn FaceDetector>>,
}

impl PhotoEmojifier {
    /// Create a new emojifier from raw image bytes (JPEG, PNG, or WebP).
    pub fn new(input: Vec<u8>) -> Result<Self, EmojifyError> {
        // Validate that the input can be decoded
        pipeline::detect_format(&input)?;

        Ok(Self {
            input,
            scale_factor: DEFAULT_SCALE_FACTOR,
            quality: DEFAULT_QUALITY,
            format: OutputFormat::default(),
            emoji_set: None,
            detector: None,
        })
    }

    /// Set the emoji-to-face scale factor (default: 0.9).
    ///
    /// The emoji width is `face_width × scale_factor`; the factor is applied
    /// a second time to the height, matching the behavior the bundled art
    /// was tuned against.
    pub fn scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the JPEG quality from 0.0 (lowest) to 1.0 (highest).
    /// Default: 0.9. Ignored for PNG output.
    pub fn quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    /// Set the output format (default: `OutputFormat::Png`).
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Provide the emoji art to composite.
    ///
    /// Defaults to the bundled set when the `bundled-emoji` feature is
    /// enabled; required otherwise.
    pub fn emoji_set(mut self, set: EmojiSet) -> Self {
        self.emoji_set = Some(set);
        self
    }

    /// Provide a face detection backend.
    ///
    /// ```no_run
    /// use emojify::{DetectedFace, FaceDetector, PhotoEmojifier};
    /// use image::DynamicImage;
    ///
    /// struct MyDetector;
    /// impl FaceDetector for MyDetector {
    ///     fn detect(&self, image: &DynamicImage) -> Vec<DetectedFace> {
    ///         // Your detection logic here
    ///         vec![]
    ///     }
    /// }
    ///
    /// let bytes = std::fs::read("photo.jpg").unwrap();
    /// let result = PhotoEmojifier::new(bytes).unwrap()
    ///     .face_detector(Box::new(MyDetector))
    ///     .emojify().unwrap();
    /// ```
    pub fn face_detector(mut self, detector: Box<dyn FaceDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Provide precomputed detections from a host-side detector.
    ///
    /// Mutually exclusive with [`Self::face_detector`]; the last call wins.
    pub fn faces(mut self, faces: Vec<DetectedFace>) -> Self {
        self.detector = Some(Box::new(PrecomputedFaces::new(faces)));
        self
    }

    /// Run the pipeline with the configured settings.
    pub fn emojify(self) -> Result<EmojifiedPhoto, EmojifyError> {
        if self.quality < 0.0 || self.quality > 1.0 {
            return Err(EmojifyError::InvalidQuality(self.quality));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(EmojifyError::InvalidScaleFactor(self.scale_factor));
        }

        let detector = self.detector.ok_or(EmojifyError::NoDetector)?;
        let emoji_set = match self.emoji_set {
            Some(set) => set,
            #[cfg(feature = "bundled-emoji")]
            None => EmojiSet::bundled()?,
            #[cfg(not(feature = "bundled-emoji"))]
            None => return Err(EmojifyError::NoEmojiSet),
        };

        pipeline::emojify_pipeline(
            &self.input,
            detector.as_ref(),
            &emoji_set,
            self.scale_factor,
            &self.format,
            self.quality,
        )
    }
}
