use api::GestureLabel;

/// A candidate classification must persist this long before it is confirmed.
pub const HOLD_THRESHOLD_MS: f32 = 1000.0;

/// Confirmation debouncer for the per-frame classifier output.
///
/// A single noisy misclassification must never produce a command, so a
/// candidate label has to be observed continuously for [`HOLD_THRESHOLD_MS`]
/// before it is confirmed, and a confirmation fires only when the candidate
/// actually differs from the last confirmed label.
#[derive(Debug, Clone, Default)]
pub struct GestureDebouncer {
    candidate: GestureLabel,
    held_ms: f32,
    confirmed: GestureLabel,
}

impl GestureDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's classification. Returns the newly confirmed label on
    /// the frame it crosses the hold threshold, `None` otherwise.
    ///
    /// The hold timer keeps accumulating past the threshold; as long as the
    /// candidate equals the confirmed label nothing re-fires.
    pub fn observe(&mut self, label: GestureLabel, dt_ms: f32) -> Option<GestureLabel> {
        if label == self.candidate {
            self.held_ms += dt_ms;
        } else {
            self.candidate = label;
            self.held_ms = 0.0;
        }

        if self.held_ms >= HOLD_THRESHOLD_MS && self.candidate != self.confirmed {
            self.confirmed = self.candidate;
            return Some(self.confirmed);
        }
        None
    }

    /// Hand loss: drop candidate, confirmed label and timer without emitting.
    /// Stale confirmed state must not survive a tracking loss.
    pub fn reset(&mut self) {
        self.candidate = GestureLabel::Unknown;
        self.confirmed = GestureLabel::Unknown;
        self.held_ms = 0.0;
    }

    pub fn confirmed(&self) -> GestureLabel {
        self.confirmed
    }

    /// Hold progress of the current candidate, clamped to 0..=1. Drives the
    /// on-screen gauge.
    pub fn progress(&self) -> f32 {
        (self.held_ms / HOLD_THRESHOLD_MS).clamp(0.0, 1.0)
    }
}
