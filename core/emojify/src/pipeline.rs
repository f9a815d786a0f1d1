use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageEncoder, RgbImage, RgbaImage};
use log::debug;

use crate::emoji_set::EmojiSet;
use crate::error::EmojifyError;
use crate::expression::Emoji;
use crate::face_detector::FaceDetector;
use crate::overlay::overlay_emoji;
use crate::{EmojifiedPhoto, FaceAnnotation, OutputFormat};

/// Decode input bytes into a `DynamicImage`.
pub(crate) fn decode_image(input: &[u8]) -> Result<DynamicImage, EmojifyError> {
    image::load_from_memory(input).map_err(|e| EmojifyError::DecodeError(e.to_string()))
}

/// Detect the input image format from the raw bytes.
pub(crate) fn detect_format(input: &[u8]) -> Result<image::ImageFormat, EmojifyError> {
    image::guess_format(input).map_err(|e| EmojifyError::DecodeError(e.to_string()))
}

/// Flatten alpha channel by compositing onto a white background.
pub(crate) fn flatten_alpha(rgba: &RgbaImage) -> RgbImage {
    let (width, height) = (rgba.width(), rgba.height());
    let mut rgb = RgbImage::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as f32 / 255.0;
        let inv_alpha = 1.0 - alpha;
        // Composite over white (255, 255, 255)
        let out_r = (r as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        let out_g = (g as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        let out_b = (b as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        rgb.put_pixel(x, y, image::Rgb([out_r, out_g, out_b]));
    }

    rgb
}

/// Encode the composited image to the requested format at the given quality.
pub(crate) fn encode_image(
    image: &RgbaImage,
    format: &OutputFormat,
    quality: f32,
) -> Result<Vec<u8>, EmojifyError> {
    let mut buffer = Vec::new();

    match format {
        OutputFormat::Png => {
            // Lossless, so a zero-face pass round-trips pixel-identical
            let encoder = PngEncoder::new(&mut buffer);
            encoder
                .write_image(
                    image.as_raw(),
                    image.width(),
                    image.height(),
                    image::ExtendedColorType::Rgba8,
                )
                .map_err(|e| EmojifyError::EncodeError(e.to_string()))?;
        }
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = flatten_alpha(image);
            let quality_percent = (quality * 100.0).round() as u8;
            let encoder = JpegEncoder::new_with_quality(&mut buffer, quality_percent);
            encoder
                .write_image(
                    rgb.as_raw(),
                    rgb.width(),
                    rgb.height(),
                    image::ExtendedColorType::Rgb8,
                )
                .map_err(|e| EmojifyError::EncodeError(e.to_string()))?;
        }
    }

    Ok(buffer)
}

/// Full pipeline: decode → detect → (classify + overlay per face) → encode.
///
/// Zero detected faces is not an error: the decoded background is re-encoded
/// unchanged and the result carries no annotations.
pub(crate) fn emojify_pipeline(
    input: &[u8],
    detector: &dyn FaceDetector,
    emoji_set: &EmojiSet,
    scale_factor: f32,
    format: &OutputFormat,
    quality: f32,
) -> Result<EmojifiedPhoto, EmojifyError> {
    let decoded = decode_image(input)?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(EmojifyError::ZeroDimensions);
    }

    let faces = detector.detect(&decoded);
    debug!("detected {} face(s)", faces.len());

    let mut result = decoded.to_rgba8();
    let mut annotations = Vec::with_capacity(faces.len());

    for face in faces {
        let emoji = Emoji::for_face(&face);
        result = overlay_emoji(&result, emoji_set.asset(emoji), &face, scale_factor);
        annotations.push(FaceAnnotation { face, emoji });
    }

    let data = encode_image(&result, format, quality)?;

    Ok(EmojifiedPhoto {
        data,
        format: format.clone(),
        width: result.width(),
        height: result.height(),
        original_size: input.len(),
        annotations,
    })
}
