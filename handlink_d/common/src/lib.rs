pub use api::keypoint;
pub use api::{Channel, GestureLabel, HandFrame, ModeToken, PosePacket, Telemetry};

pub mod classifier;
pub mod config;
pub mod geometry;
pub mod protocol;

mod channels;
mod coalescer;
mod controller;
mod debounce;
mod dispatch;
mod palette;

pub use channels::{ChannelBank, CHANNEL_MAX, CHANNEL_MIN};
pub use coalescer::CommandCoalescer;
pub use controller::{Controller, ControllerView};
pub use debounce::{GestureDebouncer, HOLD_THRESHOLD_MS};
pub use dispatch::{dispatch, Effect};
pub use palette::{
    PaletteEngine, PaletteLayout, PaletteRegion, PaletteStatus, COMMIT_THRESHOLD_MS,
    STABILITY_TOLERANCE,
};
