use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::face_detector::DetectedFace;

/// Dimensions the emoji art is scaled to before compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScaledSize {
    pub width: u32,
    pub height: u32,
}

/// Top-left pixel position the scaled emoji is drawn at. May be negative
/// or extend past the background; out-of-bounds pixels are clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub x: i64,
    pub y: i64,
}

/// Size the emoji to the face: width follows the face width, height keeps
/// the asset's aspect ratio. The scale factor is applied to both the width
/// and, a second time, to the height — this matches the behavior the emoji
/// art was tuned against.
pub(crate) fn scaled_emoji_size(
    face: &DetectedFace,
    asset_width: u32,
    asset_height: u32,
    scale_factor: f32,
) -> ScaledSize {
    let width = (face.width as f64 * scale_factor as f64).round();
    let height =
        (asset_height as f64 * width / asset_width as f64 * scale_factor as f64).round();

    ScaledSize {
        width: width.max(0.0) as u32,
        height: height.max(0.0) as u32,
    }
}

/// Position the emoji centered horizontally on the face and biased above
/// the vertical center (one third of the emoji height below the face
/// center), so it lines up with eyes and mouth rather than the centroid.
pub(crate) fn emoji_placement(face: &DetectedFace, size: ScaledSize) -> Placement {
    let x = (face.x + face.width / 2.0) as i64 - (size.width / 2) as i64;
    let y = (face.y + face.height / 2.0) as i64 - (size.height / 3) as i64;
    Placement { x, y }
}

/// Composite one emoji onto a copy of the background. The inputs are never
/// mutated; the returned image always has the background's dimensions.
///
/// A face whose scaled emoji would round to zero pixels in either dimension
/// is skipped and the background is returned unchanged.
pub(crate) fn overlay_emoji(
    background: &RgbaImage,
    asset: &RgbaImage,
    face: &DetectedFace,
    scale_factor: f32,
) -> RgbaImage {
    let mut result = background.clone();

    if asset.width() == 0 || asset.height() == 0 {
        return result;
    }

    let size = scaled_emoji_size(face, asset.width(), asset.height(), scale_factor);
    if size.width == 0 || size.height == 0 {
        return result;
    }

    let scaled = imageops::resize(asset, size.width, size.height, FilterType::Lanczos3);
    let placement = emoji_placement(face, size);
    imageops::overlay(&mut result, &scaled, placement.x, placement.y);

    result
}
