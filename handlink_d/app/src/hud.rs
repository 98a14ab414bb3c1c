//! Presentation sink. The default implementation logs state transitions;
//! the view struct carries everything a richer front end (canvas, hold
//! gauge, LED indicators) would need.

use api::{Channel, GestureLabel, Telemetry};
use common::ControllerView;
use log::info;

pub trait PresentationSink {
    /// Called once per update cycle. The sink never feeds anything back.
    fn update(&mut self, view: &ControllerView, telemetry: &Telemetry);
}

/// Logs state transitions instead of redrawing a surface.
#[derive(Debug, Default)]
pub struct LogHud {
    last_confirmed: GestureLabel,
    last_selected: Option<Channel>,
    last_mode: String,
}

impl PresentationSink for LogHud {
    fn update(&mut self, view: &ControllerView, telemetry: &Telemetry) {
        if view.confirmed != self.last_confirmed {
            if view.confirmed != GestureLabel::Unknown {
                info!("Gesture confirmed: {}", view.confirmed);
            }
            self.last_confirmed = view.confirmed;
        }

        if view.palette.selected != self.last_selected {
            if let (Some(channel), Some(value)) = (view.palette.selected, view.palette.value) {
                info!("Calibrating {} channel (value {:.0})", channel, value);
            }
            self.last_selected = view.palette.selected;
        }

        if telemetry.mode != self.last_mode {
            info!(
                "Device reports mode {} (brightness {}, LEDs {:?})",
                telemetry.mode, telemetry.brightness, telemetry.led_on
            );
            self.last_mode = telemetry.mode.clone();
        }
    }
}
