use image::RgbaImage;

#[cfg(feature = "bundled-emoji")]
use crate::error::EmojifyError;
use crate::expression::Emoji;

/// Lookup table from emoji category to overlay art: one RGBA raster per
/// category.
pub struct EmojiSet {
    // Indexed by position in Emoji::ALL.
    assets: [RgbaImage; 8],
}

impl EmojiSet {
    /// Build a set from caller-supplied art, one image per category.
    pub fn new(mut asset_for: impl FnMut(Emoji) -> RgbaImage) -> Self {
        Self {
            assets: Emoji::ALL.map(&mut asset_for),
        }
    }

    /// The stock emoji art shipped with the crate.
    #[cfg(feature = "bundled-emoji")]
    pub fn bundled() -> Result<Self, EmojifyError> {
        let decode = |bytes: &[u8]| -> Result<RgbaImage, EmojifyError> {
            Ok(image::load_from_memory(bytes)
                .map_err(|e| EmojifyError::DecodeError(e.to_string()))?
                .to_rgba8())
        };

        Ok(Self {
            assets: [
                decode(include_bytes!("../assets/emoji/smile.png"))?,
                decode(include_bytes!("../assets/emoji/frown.png"))?,
                decode(include_bytes!("../assets/emoji/leftwink.png"))?,
                decode(include_bytes!("../assets/emoji/rightwink.png"))?,
                decode(include_bytes!("../assets/emoji/leftwinkfrown.png"))?,
                decode(include_bytes!("../assets/emoji/rightwinkfrown.png"))?,
                decode(include_bytes!("../assets/emoji/closed_smile.png"))?,
                decode(include_bytes!("../assets/emoji/closed_frown.png"))?,
            ],
        })
    }

    /// The overlay art for one category.
    pub fn asset(&self, emoji: Emoji) -> &RgbaImage {
        let index = match emoji {
            Emoji::Smile => 0,
            Emoji::Frown => 1,
            Emoji::LeftWink => 2,
            Emoji::RightWink => 3,
            Emoji::LeftWinkFrown => 4,
            Emoji::RightWinkFrown => 5,
            Emoji::ClosedEyeSmile => 6,
            Emoji::ClosedEyeFrown => 7,
        };
        &self.assets[index]
    }
}
