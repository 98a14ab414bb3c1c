//! Per-frame pipeline tying the state machines together: classify, debounce,
//! dispatch, calibrate. Owns every mutable cell the pipeline touches, so the
//! update loop is the single writer and no lock is needed around any of it.

use api::keypoint as kp;
use api::{Channel, GestureLabel, HandFrame, ModeToken};
use glam::Vec2;
use log::info;

use crate::channels::ChannelBank;
use crate::coalescer::CommandCoalescer;
use crate::debounce::GestureDebouncer;
use crate::dispatch::{dispatch, Effect};
use crate::palette::{PaletteEngine, PaletteLayout, PaletteStatus};
use crate::{classifier, geometry};

/// What the presentation layer gets to see after each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerView {
    /// Raw classification of the current frame.
    pub label: GestureLabel,
    pub confirmed: GestureLabel,
    /// Hold-gauge progress, 0..=1.
    pub progress: f32,
    pub palette_active: bool,
    pub palette: PaletteStatus,
}

pub struct Controller {
    debouncer: GestureDebouncer,
    palette_engine: PaletteEngine,
    layout: PaletteLayout,
    bank: ChannelBank,
    coalescer: CommandCoalescer,
    palette_active: bool,
    frame_width: f32,
    mirror_x: bool,
}

impl Controller {
    pub fn new(frame_width: f32, mirror_x: bool) -> Self {
        Self {
            debouncer: GestureDebouncer::new(),
            palette_engine: PaletteEngine::new(),
            layout: PaletteLayout::for_frame_width(frame_width),
            bank: ChannelBank::default(),
            coalescer: CommandCoalescer::new(),
            palette_active: false,
            frame_width,
            mirror_x,
        }
    }

    /// Advance the whole pipeline by one frame. `hand` is the first tracked
    /// hand of the latest pose packet, or `None` when no hand is observed.
    pub fn tick(&mut self, hand: Option<&HandFrame>, dt_ms: f32) -> ControllerView {
        let (label, confirmation) = match hand {
            Some(frame) => {
                let label = classifier::classify(frame);
                (label, self.debouncer.observe(label, dt_ms))
            }
            None => {
                self.debouncer.reset();
                (GestureLabel::Unknown, None)
            }
        };

        if let Some(confirmed) = confirmation {
            match dispatch(confirmed, self.palette_active) {
                Some(Effect::TogglePalette) => {
                    self.palette_active = !self.palette_active;
                    info!(
                        "Palette mode {}",
                        if self.palette_active { "on" } else { "off" }
                    );
                }
                Some(Effect::SetToken(token)) => {
                    info!("Mode changed to: {}", token);
                    self.coalescer.set(token);
                }
                None => {}
            }
        }

        let palette = if self.palette_active {
            match hand {
                Some(frame) if frame.is_complete() => {
                    let thumb = self.screen_point(frame, kp::THUMB_TIP);
                    let index = self.screen_point(frame, kp::INDEX_TIP);
                    let status = self.palette_engine.update(&self.layout, thumb, index, dt_ms);
                    if let Some((channel, value)) = status.committed {
                        self.bank.set(channel, value);
                        info!("Updated {} period to {}", channel, self.bank.get(channel));
                    }
                    status
                }
                _ => {
                    self.palette_engine.reset();
                    PaletteStatus::default()
                }
            }
        } else {
            PaletteStatus::default()
        };

        ControllerView {
            label,
            confirmed: self.debouncer.confirmed(),
            progress: self.debouncer.progress(),
            palette_active: self.palette_active,
            palette,
        }
    }

    fn screen_point(&self, frame: &HandFrame, index: usize) -> Vec2 {
        let p = frame.point(index);
        if self.mirror_x {
            Vec2::new(geometry::mirror_x(p.x, self.frame_width), p.y)
        } else {
            p
        }
    }

    pub fn palette_active(&self) -> bool {
        self.palette_active
    }

    pub fn pending_token(&self) -> Option<ModeToken> {
        self.coalescer.pending()
    }

    pub fn channels(&self) -> &ChannelBank {
        &self.bank
    }

    /// Widget write endpoint: external channel edits land here and clamp the
    /// same way calibration commits do.
    pub fn set_channel(&mut self, channel: Channel, value: u32) {
        self.bank.set(channel, value);
    }

    /// Render the next outbound line, consuming the pending mode token.
    pub fn build_command_line(&mut self) -> String {
        self.coalescer.build_line(&self.bank)
    }
}
