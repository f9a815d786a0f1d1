use emojify_jni::*;

fn make_test_png(width: u32, height: u32) -> Vec<u8> {
    use image::codecs::png::PngEncoder;
    use image::{ImageEncoder, RgbImage};

    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ]);
    }
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}

fn smiling_face() -> DetectedFace {
    DetectedFace {
        x: 50.0,
        y: 50.0,
        width: 100.0,
        height: 100.0,
        smiling_probability: 0.9,
        left_eye_open_probability: 0.9,
        right_eye_open_probability: 0.9,
    }
}

#[test]
fn emojify_with_defaults_works() {
    let png = make_test_png(300, 300);
    let result = emojify_with_defaults(png, vec![smiling_face()]).unwrap();
    assert!(!result.data.is_empty());
    assert_eq!(result.width, 300);
    assert_eq!(result.height, 300);
    assert_eq!(result.annotations.len(), 1);
    assert!(matches!(result.annotations[0].emoji, Emoji::Smile));
}

#[test]
fn emojify_with_all_parameters() {
    let png = make_test_png(300, 300);
    let result = emojify(
        png,
        vec![smiling_face()],
        OutputFormat::Jpeg,
        0.8,
        0.9,
    )
    .unwrap();
    assert!(!result.data.is_empty());
    assert_eq!(result.data[0], 0xFF);
    assert_eq!(result.data[1], 0xD8);
}

#[test]
fn emojify_with_no_faces_passes_through() {
    let png = make_test_png(200, 150);
    let result = emojify_with_defaults(png, vec![]).unwrap();
    assert!(result.annotations.is_empty());
    assert_eq!(result.width, 200);
    assert_eq!(result.height, 150);
}

#[test]
fn winking_face_maps_to_left_wink() {
    let png = make_test_png(300, 300);
    let face = DetectedFace {
        left_eye_open_probability: 0.1,
        ..smiling_face()
    };
    let result = emojify_with_defaults(png, vec![face]).unwrap();
    assert!(matches!(result.annotations[0].emoji, Emoji::LeftWink));
}

#[test]
fn invalid_quality_returns_error() {
    let png = make_test_png(100, 100);
    let result = emojify(png, vec![], OutputFormat::Png, 1.5, 0.9);
    assert!(matches!(result, Err(EmojifyError::InvalidQuality)));
}

#[test]
fn invalid_input_returns_error() {
    let result = emojify_with_defaults(b"not an image".to_vec(), vec![]);
    assert!(result.is_err());
}
