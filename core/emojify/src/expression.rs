use log::debug;

use crate::face_detector::DetectedFace;

/// A face counts as smiling above this probability (strict `>`).
const SMILING_PROB_THRESHOLD: f32 = 0.15;

/// An eye counts as closed below this open-probability (strict `<`).
const EYE_OPEN_PROB_THRESHOLD: f32 = 0.5;

/// The eight expression classes an overlay asset exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emoji {
    /// Smiling, both eyes open.
    Smile,
    /// Not smiling, both eyes open.
    Frown,
    /// Smiling, left eye closed.
    LeftWink,
    /// Smiling, right eye closed.
    RightWink,
    /// Not smiling, left eye closed.
    LeftWinkFrown,
    /// Not smiling, right eye closed.
    RightWinkFrown,
    /// Smiling, both eyes closed.
    ClosedEyeSmile,
    /// Not smiling, both eyes closed.
    ClosedEyeFrown,
}

impl Emoji {
    /// All categories, in asset-table order.
    pub const ALL: [Emoji; 8] = [
        Emoji::Smile,
        Emoji::Frown,
        Emoji::LeftWink,
        Emoji::RightWink,
        Emoji::LeftWinkFrown,
        Emoji::RightWinkFrown,
        Emoji::ClosedEyeSmile,
        Emoji::ClosedEyeFrown,
    ];

    /// Map a face's expression probabilities to an emoji category.
    ///
    /// Pure and total: every combination of probabilities yields exactly one
    /// category. Equality at a threshold falls on the "open" / "not smiling"
    /// side (comparisons are strict).
    pub fn for_face(face: &DetectedFace) -> Emoji {
        debug!("smiling probability: {}", face.smiling_probability);
        debug!(
            "left eye open probability: {}",
            face.left_eye_open_probability
        );
        debug!(
            "right eye open probability: {}",
            face.right_eye_open_probability
        );

        let smiling = face.smiling_probability > SMILING_PROB_THRESHOLD;
        let left_eye_closed = face.left_eye_open_probability < EYE_OPEN_PROB_THRESHOLD;
        let right_eye_closed = face.right_eye_open_probability < EYE_OPEN_PROB_THRESHOLD;

        let emoji = match (smiling, left_eye_closed, right_eye_closed) {
            (true, true, false) => Emoji::LeftWink,
            (true, false, true) => Emoji::RightWink,
            (true, true, true) => Emoji::ClosedEyeSmile,
            (true, false, false) => Emoji::Smile,
            (false, true, false) => Emoji::LeftWinkFrown,
            (false, false, true) => Emoji::RightWinkFrown,
            (false, true, true) => Emoji::ClosedEyeFrown,
            (false, false, false) => Emoji::Frown,
        };

        debug!("chose emoji: {emoji:?}");
        emoji
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(smiling: f32, left_eye: f32, right_eye: f32) -> DetectedFace {
        DetectedFace {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            smiling_probability: smiling,
            left_eye_open_probability: left_eye,
            right_eye_open_probability: right_eye,
        }
    }

    #[test]
    fn smiling_both_eyes_open() {
        assert_eq!(Emoji::for_face(&face(0.9, 0.9, 0.9)), Emoji::Smile);
    }

    #[test]
    fn smiling_left_eye_closed() {
        assert_eq!(Emoji::for_face(&face(0.9, 0.1, 0.9)), Emoji::LeftWink);
    }

    #[test]
    fn smiling_right_eye_closed() {
        assert_eq!(Emoji::for_face(&face(0.9, 0.9, 0.1)), Emoji::RightWink);
    }

    #[test]
    fn smiling_both_eyes_closed() {
        assert_eq!(Emoji::for_face(&face(0.9, 0.1, 0.1)), Emoji::ClosedEyeSmile);
    }

    #[test]
    fn frowning_both_eyes_open() {
        assert_eq!(Emoji::for_face(&face(0.05, 0.9, 0.9)), Emoji::Frown);
    }

    #[test]
    fn frowning_left_eye_closed() {
        assert_eq!(Emoji::for_face(&face(0.05, 0.1, 0.9)), Emoji::LeftWinkFrown);
    }

    #[test]
    fn frowning_right_eye_closed() {
        assert_eq!(
            Emoji::for_face(&face(0.05, 0.9, 0.1)),
            Emoji::RightWinkFrown
        );
    }

    #[test]
    fn frowning_both_eyes_closed() {
        assert_eq!(
            Emoji::for_face(&face(0.05, 0.1, 0.1)),
            Emoji::ClosedEyeFrown
        );
    }

    #[test]
    fn smiling_threshold_is_strict() {
        // Exactly at the threshold counts as not smiling
        assert_eq!(Emoji::for_face(&face(0.15, 0.9, 0.9)), Emoji::Frown);
        assert_eq!(Emoji::for_face(&face(0.150001, 0.9, 0.9)), Emoji::Smile);
    }

    #[test]
    fn eye_open_threshold_is_strict() {
        // Exactly at the threshold counts as open
        assert_eq!(Emoji::for_face(&face(0.9, 0.5, 0.5)), Emoji::Smile);
        assert_eq!(
            Emoji::for_face(&face(0.9, 0.499999, 0.499999)),
            Emoji::ClosedEyeSmile
        );
    }

    #[test]
    fn total_over_probability_grid() {
        // Every sampled triple maps to one of the eight categories and the
        // mapping is deterministic.
        let samples = [0.0, 0.1, 0.15, 0.3, 0.5, 0.7, 1.0];
        for &s in &samples {
            for &l in &samples {
                for &r in &samples {
                    let first = Emoji::for_face(&face(s, l, r));
                    let second = Emoji::for_face(&face(s, l, r));
                    assert_eq!(first, second);
                    assert!(Emoji::ALL.contains(&first));
                }
            }
        }
    }

    #[test]
    fn all_eight_categories_reachable() {
        let triples = [
            (0.9, 0.9, 0.9),
            (0.05, 0.9, 0.9),
            (0.9, 0.1, 0.9),
            (0.9, 0.9, 0.1),
            (0.05, 0.1, 0.9),
            (0.05, 0.9, 0.1),
            (0.9, 0.1, 0.1),
            (0.05, 0.1, 0.1),
        ];
        let mut seen: Vec<Emoji> = triples
            .iter()
            .map(|&(s, l, r)| Emoji::for_face(&face(s, l, r)))
            .collect();
        seen.sort_by_key(|e| format!("{e:?}"));
        seen.dedup();
        assert_eq!(seen.len(), 8);
    }
}
