use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which transport backend carries the link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum LinkMode {
    /// Byte-stream peer such as a serial-over-TCP bridge. Always available.
    #[serde(alias = "tcp", alias = "TCP")]
    #[default]
    Tcp,
    /// Direct serial port; needs the `serial` cargo feature.
    #[serde(alias = "serial", alias = "SerialPort")]
    Serial,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub mode: LinkMode,
    pub serial_port: String,
    pub baud_rate: u32,
    pub tcp_address: String,
    /// Outbound command cadence, checked against the last send time.
    pub send_interval_ms: u64,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            mode: LinkMode::default(),
            serial_port: default_serial_port(),
            baud_rate: 9600,
            tcp_address: "127.0.0.1:7878".to_string(),
            send_interval_ms: 500,
        }
    }
}

fn default_serial_port() -> String {
    if cfg!(windows) {
        "COM3".to_string()
    } else {
        "/dev/ttyUSB0".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    /// UDP port the pose source streams JSON packets to.
    pub listen_port: u16,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self { listen_port: 9200 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub width: f32,
    pub height: f32,
    /// The pose source observes a mirrored feed; screen-space interactions
    /// (the palette circles) flip x back.
    pub mirror_x: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            mirror_x: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub link: LinkConfig,
    pub pose: PoseConfig,
    pub frame: FrameConfig,
    pub max_fps: Option<f32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            link: LinkConfig::default(),
            pose: PoseConfig::default(),
            frame: FrameConfig::default(),
            max_fps: Some(60.0),
        }
    }
}

impl AppConfig {
    /// Load the config file, creating it with defaults when missing.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            info!("Loading config from {:?}", path);
            let file = fs::File::open(path)?;
            let reader = std::io::BufReader::new(file);
            let config = serde_json::from_reader(reader)?;
            Ok(config)
        } else {
            info!("Config not found. Creating default at {:?}", path);
            let config = AppConfig::default();
            let file = fs::File::create(path)?;
            let writer = std::io::BufWriter::new(file);
            serde_json::to_writer_pretty(writer, &config)?;
            Ok(config)
        }
    }
}
