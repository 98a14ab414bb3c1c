//! Geometrically valid 21-point hands for each recognizable gesture, laid
//! out in the 640x480 frame the daemon expects by default.

use api::keypoint as kp;
use api::HandFrame;
use glam::Vec2;

const WRIST: Vec2 = Vec2::new(320.0, 400.0);

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

fn curled() -> HandFrame {
    let mut points = vec![WRIST; kp::COUNT];
    for (i, dir) in DIRS.iter().enumerate() {
        points[kp::FINGER_MCPS[i]] = WRIST + *dir * MCP_REACH;
        points[kp::FINGER_TIPS[i]] = WRIST + *dir * CURLED_REACH;
    }
    HandFrame { keypoints: points }
}

fn extend(frame: &mut HandFrame, fingers: &[usize]) {
    for &i in fingers {
        frame.keypoints[kp::FINGER_TIPS[i]] = WRIST + DIRS[i] * EXTENDED_REACH;
    }
}

/// All five tips gathered above the wrist.
pub fn fist() -> HandFrame {
    let mut frame = curled();
    let cluster = Vec2::new(320.0, 330.0);
    let offsets = [
        Vec2::new(-4.0, -2.0),
        Vec2::new(-2.0, 2.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(2.0, -2.0),
        Vec2::new(4.0, 2.0),
    ];
    for (i, offset) in offsets.iter().enumerate() {
        frame.keypoints[kp::FINGER_TIPS[i]] = cluster + *offset;
    }
    frame
}

pub fn open_palm() -> HandFrame {
    let mut frame = curled();
    extend(&mut frame, &[0, 1, 2, 3, 4]);
    frame
}

pub fn three_finger() -> HandFrame {
    let mut frame = curled();
    extend(&mut frame, &[0, 1, 2]);
    frame
}

pub fn thumbs_up() -> HandFrame {
    let mut frame = curled();
    extend(&mut frame, &[0]);
    frame
}

pub fn thumbs_down() -> HandFrame {
    let mut frame = curled();
    let dir = Vec2::new(-0.71, 0.71);
    frame.keypoints[kp::THUMB_MCP] = WRIST + dir * MCP_REACH;
    frame.keypoints[kp::THUMB_TIP] = WRIST + dir * EXTENDED_REACH;
    frame
}

/// Thumb and index pinched over the middle palette circle. Symmetric around
/// the frame center, so it targets the same circle whether or not the daemon
/// mirrors x.
pub fn pinch() -> HandFrame {
    let mut frame = curled();
    let center = Vec2::new(320.0, 100.0);
    frame.keypoints[kp::THUMB_TIP] = center + Vec2::new(-24.0, 0.0);
    frame.keypoints[kp::INDEX_TIP] = center + Vec2::new(24.0, 0.0);
    frame
}
