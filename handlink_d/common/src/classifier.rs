//! Per-frame gesture classification. Deterministic, no history; debouncing
//! across frames is the [`crate::GestureDebouncer`]'s job.

use api::keypoint as kp;
use api::{GestureLabel, HandFrame};

use crate::geometry;

/// A fingertip within this fraction of the hand scale from the fingertip
/// centroid counts as closed.
pub const CLOSE_FACTOR: f32 = 0.2;

/// Tip-to-wrist distance must exceed this multiple of the MCP-to-wrist
/// distance for a finger to count as extended.
pub const EXTEND_FACTOR: f32 = 1.2;

/// Classify one hand frame.
///
/// The two coarsest shapes (fist, open hand) are checked before the partial
/// extensions so that they can never be mistaken for one of them.
pub fn classify(frame: &HandFrame) -> GestureLabel {
    if !frame.is_complete() {
        return GestureLabel::Unknown;
    }

    let wrist = frame.point(kp::WRIST);
    let tips = kp::FINGER_TIPS.map(|i| frame.point(i));

    // Hand scale: wrist to middle fingertip.
    let scale = wrist.distance(frame.point(kp::MIDDLE_TIP));
    let tip_centroid = geometry::centroid(&tips);
    let close_threshold = scale * CLOSE_FACTOR;
    let all_tips_close = tips
        .iter()
        .all(|tip| tip.distance(tip_centroid) < close_threshold);

    if all_tips_close {
        return GestureLabel::Default;
    }

    let extended: [bool; 5] = std::array::from_fn(|i| {
        geometry::finger_extended(
            wrist,
            frame.point(kp::FINGER_TIPS[i]),
            frame.point(kp::FINGER_MCPS[i]),
            EXTEND_FACTOR,
        )
    });
    let [thumb, index, middle, ring, pinky] = extended;

    if thumb && index && middle && ring && pinky {
        GestureLabel::Palette
    } else if thumb && index && middle && !ring && !pinky {
        GestureLabel::Emergency
    } else if thumb && !index && !middle && !ring && !pinky {
        // Orientation decides between the two thumb gestures.
        if frame.point(kp::THUMB_TIP).y < frame.point(kp::THUMB_MCP).y {
            GestureLabel::ThumbsUp
        } else {
            GestureLabel::ThumbsDown
        }
    } else {
        GestureLabel::Unknown
    }
}
