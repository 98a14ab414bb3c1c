//! Synthetic 21-point hands for driving the classifier in tests.
#![allow(dead_code)]

use common::keypoint as kp;
use common::HandFrame;
use glam::Vec2;

pub const WRIST: Vec2 = Vec2::new(320.0, 400.0);

// Unit directions from the wrist toward each fingertip, thumb..pinky.
const DIRS: [Vec2; 5] = [
    Vec2::new(-0.71, -0.71),
    Vec2::new(-0.32, -0.95),
    Vec2::new(0.0, -1.0),
    Vec2::new(0.32, -0.95),
    Vec2::new(0.55, -0.84),
];

const MCP_REACH: f32 = 60.0;
const CURLED_REACH: f32 = 65.0;
const EXTENDED_REACH: f32 = 150.0;

/// All fingers curled: every tip barely past its own MCP joint.
pub fn curled() -> HandFrame {
    let mut points = vec![WRIST; kp::COUNT];
    for (i, dir) in DIRS.iter().enumerate() {
        points[kp::FINGER_MCPS[i]] = WRIST + *dir * MCP_REACH;
        points[kp::FINGER_TIPS[i]] = WRIST + *dir * CURLED_REACH;
    }
    HandFrame { keypoints: points }
}

/// Extend the given fingers (0 = thumb .. 4 = pinky) to full reach.
pub fn with_extended(fingers: &[usize]) -> HandFrame {
    let mut frame = curled();
    for &i in fingers {
        frame.keypoints[kp::FINGER_TIPS[i]] = WRIST + DIRS[i] * EXTENDED_REACH;
    }
    frame
}

/// All five tips gathered in a tight cluster above the wrist.
pub fn fist() -> HandFrame {
    cluster_at(Vec2::new(320.0, 330.0))
}

/// Fist variant with the cluster at an arbitrary point.
pub fn cluster_at(center: Vec2) -> HandFrame {
    let mut frame = curled();
    let offsets = [
        Vec2::new(-4.0, -2.0),
        Vec2::new(-2.0, 2.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(2.0, -2.0),
        Vec2::new(4.0, 2.0),
    ];
    for (i, offset) in offsets.iter().enumerate() {
        frame.keypoints[kp::FINGER_TIPS[i]] = center + *offset;
    }
    frame
}

pub fn open_palm() -> HandFrame {
    with_extended(&[0, 1, 2, 3, 4])
}

pub fn three_finger() -> HandFrame {
    with_extended(&[0, 1, 2])
}

pub fn thumbs_up() -> HandFrame {
    with_extended(&[0])
}

/// Thumb extended downward, every other finger curled.
pub fn thumbs_down() -> HandFrame {
    let mut frame = curled();
    let dir = Vec2::new(-0.71, 0.71);
    frame.keypoints[kp::THUMB_MCP] = WRIST + dir * MCP_REACH;
    frame.keypoints[kp::THUMB_TIP] = WRIST + dir * EXTENDED_REACH;
    frame
}

/// Thumb and index tips pinched `separation` apart, centered on `center`.
/// The remaining fingers stay curled.
pub fn pinch_at(center: Vec2, separation: f32) -> HandFrame {
    let mut frame = curled();
    let half = separation / 2.0;
    frame.keypoints[kp::THUMB_TIP] = center + Vec2::new(-half, 0.0);
    frame.keypoints[kp::INDEX_TIP] = center + Vec2::new(half, 0.0);
    frame
}
