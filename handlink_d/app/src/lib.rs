pub mod hud;
pub mod link;
pub mod pose;
pub mod transport;
