use image::DynamicImage;

/// A single face reported by a detection backend: bounding box plus
/// expression probabilities.
///
/// Coordinates are pixels with the origin at the image's top-left corner.
/// Probabilities are in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedFace {
    /// X coordinate of the top-left corner of the bounding box (pixels).
    pub x: f32,
    /// Y coordinate of the top-left corner of the bounding box (pixels).
    pub y: f32,
    /// Width of the bounding box (pixels).
    pub width: f32,
    /// Height of the bounding box (pixels).
    pub height: f32,
    /// Probability that the face is smiling.
    pub smiling_probability: f32,
    /// Probability that the left eye is open.
    pub left_eye_open_probability: f32,
    /// Probability that the right eye is open.
    pub right_eye_open_probability: f32,
}

/// Pluggable face detection backend.
///
/// Implement this trait to plug in a vision engine (a vendor mobile SDK,
/// ONNX, dlib, etc.) and pass it to [`crate::PhotoEmojifier::face_detector`].
/// A backend that holds a native detector handle should release it in its
/// `Drop` impl so the handle is freed on both success and error paths.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in the decoded image. Order of the returned faces is
    /// backend-defined; overlays are applied in this order.
    fn detect(&self, image: &DynamicImage) -> Vec<DetectedFace>;
}

/// Adapter for hosts that run face detection themselves and hand over the
/// results: implements [`FaceDetector`] over a fixed list of faces.
pub struct PrecomputedFaces {
    faces: Vec<DetectedFace>,
}

impl PrecomputedFaces {
    /// Wrap an already-detected face list.
    pub fn new(faces: Vec<DetectedFace>) -> Self {
        Self { faces }
    }
}

impl FaceDetector for PrecomputedFaces {
    fn detect(&self, _image: &DynamicImage) -> Vec<DetectedFace> {
        self.faces.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precomputed_faces_returns_given_list() {
        let face = DetectedFace {
            x: 10.0,
            y: 20.0,
            width: 50.0,
            height: 60.0,
            smiling_probability: 0.9,
            left_eye_open_probability: 0.8,
            right_eye_open_probability: 0.7,
        };
        let detector = PrecomputedFaces::new(vec![face.clone()]);
        let img = DynamicImage::new_rgba8(1, 1);
        assert_eq!(detector.detect(&img), vec![face]);
    }

    #[test]
    fn precomputed_faces_empty_list() {
        let detector = PrecomputedFaces::new(vec![]);
        let img = DynamicImage::new_rgba8(1, 1);
        assert!(detector.detect(&img).is_empty());
    }
}
