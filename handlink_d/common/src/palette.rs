//! Palette calibration: while palette mode is active, a thumb-index pinch
//! held inside one of three target circles tunes that circle's channel. The
//! pinch distance maps linearly onto the channel range and must stay stable
//! for [`COMMIT_THRESHOLD_MS`] before the value commits. This is the same
//! debounce principle as gesture confirmation, but decoupled from it so
//! fine-grained calibration never requires releasing the palette gesture.

use api::Channel;
use glam::Vec2;

use crate::channels::{CHANNEL_MAX, CHANNEL_MIN};
use crate::geometry;

/// A mapped value must hold steady this long before it commits.
pub const COMMIT_THRESHOLD_MS: f32 = 750.0;

/// Absolute deviation from the reference value that still counts as stable.
pub const STABILITY_TOLERANCE: f32 = 100.0;

pub const REGION_RADIUS: f32 = 60.0;
pub const REGION_GAP: f32 = 40.0;
pub const REGION_ROW_Y: f32 = 100.0;

/// One calibration target circle, bound to a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteRegion {
    pub channel: Channel,
    pub center: Vec2,
    pub radius: f32,
}

impl PaletteRegion {
    pub fn contains(&self, point: Vec2) -> bool {
        geometry::inside_circle(point, self.center, self.radius)
    }
}

/// The three target circles, laid out in a centered row near the top of the
/// frame: red, yellow, green from left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteLayout {
    regions: [PaletteRegion; 3],
}

impl PaletteLayout {
    pub fn for_frame_width(frame_width: f32) -> Self {
        let row_width = 3.0 * (2.0 * REGION_RADIUS) + 2.0 * REGION_GAP;
        let start_x = (frame_width - row_width) / 2.0 + REGION_RADIUS;
        let step = 2.0 * REGION_RADIUS + REGION_GAP;

        let regions = std::array::from_fn(|i| PaletteRegion {
            channel: Channel::ALL[i],
            center: Vec2::new(start_x + i as f32 * step, REGION_ROW_Y),
            radius: REGION_RADIUS,
        });
        Self { regions }
    }

    pub fn regions(&self) -> &[PaletteRegion; 3] {
        &self.regions
    }

    /// The region jointly containing both points, if any. Calibration only
    /// proceeds while thumb and index sit inside the same circle.
    pub fn region_containing(&self, a: Vec2, b: Vec2) -> Option<&PaletteRegion> {
        self.regions
            .iter()
            .find(|region| region.contains(a) && region.contains(b))
    }
}

/// Per-frame calibration report for the presentation layer, plus the commit
/// when one fires.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaletteStatus {
    pub selected: Option<Channel>,
    /// Live mapped value while a region is selected.
    pub value: Option<f32>,
    /// Stability progress, 0..=1.
    pub progress: f32,
    pub committed: Option<(Channel, u32)>,
}

/// Stability tracker for the mapped value. Holds no channel selection of its
/// own: the selected region is re-derived every frame from finger positions,
/// just as the reference value is re-adopted after every commit or reset.
#[derive(Debug, Clone, Default)]
pub struct PaletteEngine {
    last_value: Option<f32>,
    stable_ms: f32,
}

impl PaletteEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance calibration by one frame. `thumb` and `index` are the mirrored
    /// tip positions in frame coordinates.
    pub fn update(
        &mut self,
        layout: &PaletteLayout,
        thumb: Vec2,
        index: Vec2,
        dt_ms: f32,
    ) -> PaletteStatus {
        let Some(region) = layout.region_containing(thumb, index) else {
            self.reset();
            return PaletteStatus::default();
        };

        let pinch = thumb.distance(index);
        let mapped = geometry::map_range(
            pinch,
            0.0,
            2.0 * region.radius,
            CHANNEL_MIN as f32,
            CHANNEL_MAX as f32,
        )
        .clamp(CHANNEL_MIN as f32, CHANNEL_MAX as f32);

        // First observation after a reset adopts the value as reference and
        // starts accumulating immediately.
        let reference = *self.last_value.get_or_insert(mapped);
        if (mapped - reference).abs() < STABILITY_TOLERANCE {
            self.stable_ms += dt_ms;
        } else {
            self.stable_ms = 0.0;
            self.last_value = Some(mapped);
        }

        let progress = (self.stable_ms / COMMIT_THRESHOLD_MS).clamp(0.0, 1.0);

        let committed = if self.stable_ms >= COMMIT_THRESHOLD_MS {
            // Reset right away so re-calibration can begin without a cooldown.
            self.stable_ms = 0.0;
            self.last_value = None;
            Some((region.channel, mapped.round() as u32))
        } else {
            None
        };

        PaletteStatus {
            selected: Some(region.channel),
            value: Some(mapped),
            progress,
            committed,
        }
    }

    /// Fingers left every region, or the hand disappeared.
    pub fn reset(&mut self) {
        self.last_value = None;
        self.stable_ms = 0.0;
    }
}
