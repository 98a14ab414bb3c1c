use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical keypoint indices of the 21-point hand skeleton delivered by the
/// pose source. Index 0 is the wrist; each finger contributes four joints in
/// base-to-tip order.
pub mod keypoint {
    pub const WRIST: usize = 0;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_TIP: usize = 20;

    pub const COUNT: usize = 21;

    /// Thumb, index, middle, ring, pinky.
    pub const FINGER_TIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];
    pub const FINGER_MCPS: [usize; 5] = [THUMB_MCP, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];
}

/// One snapshot of a single tracked hand. Replaced wholesale on every pose
/// packet, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    pub keypoints: Vec<Vec2>,
}

impl HandFrame {
    /// A frame is usable for classification only when all 21 keypoints are
    /// present.
    pub fn is_complete(&self) -> bool {
        self.keypoints.len() >= keypoint::COUNT
    }

    pub fn point(&self, index: usize) -> Vec2 {
        self.keypoints[index]
    }
}

/// One datagram from the pose source: zero or more detected hands. Consumers
/// only ever look at the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PosePacket {
    pub hands: Vec<HandFrame>,
}

impl PosePacket {
    pub fn primary(&self) -> Option<&HandFrame> {
        self.hands.first()
    }
}

/// Closed set of recognizable hand shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureLabel {
    #[default]
    Unknown,
    /// Fist: all fingertips gathered at the palm.
    Default,
    /// Open hand, all five fingers extended.
    Palette,
    /// Thumb, index and middle extended.
    Emergency,
    ThumbsUp,
    ThumbsDown,
}

impl GestureLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureLabel::Unknown => "Unknown",
            GestureLabel::Default => "Default",
            GestureLabel::Palette => "Palette",
            GestureLabel::Emergency => "Emergency",
            GestureLabel::ThumbsUp => "ThumbsUp",
            GestureLabel::ThumbsDown => "ThumbsDown",
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete device-mode command carried on the outbound line. The wire
/// spelling matches what the microcontroller firmware expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeToken {
    Default,
    Pcint1,
    Pcint2,
    Pcint3,
}

impl ModeToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeToken::Default => "Default",
            ModeToken::Pcint1 => "PCINT1",
            ModeToken::Pcint2 => "PCINT2",
            ModeToken::Pcint3 => "PCINT3",
        }
    }
}

impl fmt::Display for ModeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three tunable signal channels exchanged with the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Yellow,
    Green,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Yellow, Channel::Green];

    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Yellow => 1,
            Channel::Green => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "Red",
            Channel::Yellow => "Yellow",
            Channel::Green => "Green",
        };
        f.write_str(name)
    }
}

/// Telemetry reported by the device: LED brightness, active mode and the
/// on/off state of the three LEDs. Updated only by successfully decoded
/// inbound lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub brightness: u32,
    pub mode: String,
    pub led_on: [bool; 3],
}
