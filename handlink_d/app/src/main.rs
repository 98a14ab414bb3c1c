use anyhow::Result;
use api::PosePacket;
use common::config::AppConfig;
use common::{Controller, Telemetry};
use handlink_d::hud::{LogHud, PresentationSink};
use handlink_d::{link, pose};
use log::{error, info, warn};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting...");

    let config_path = Path::new("config.json");
    let config = AppConfig::load_or_create(config_path).unwrap_or_else(|e| {
        error!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    info!("Loaded config: {:?}", config);

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        info!("Received Ctrl-C, shutting down...");
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let latest_pose = Arc::new(RwLock::new(None::<PosePacket>));
    let telemetry = Arc::new(RwLock::new(Telemetry::default()));
    let connected = Arc::new(AtomicBool::new(false));

    let _pose_thread = pose::spawn(config.pose.listen_port, latest_pose.clone(), running.clone())?;

    let (outbound_tx, outbound_rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    let _link_thread = link::spawn(
        config.link.clone(),
        telemetry.clone(),
        outbound_rx,
        connected.clone(),
    );

    let mut controller = Controller::new(config.frame.width, config.frame.mirror_x);
    let mut sink = LogHud::default();

    let send_interval = Duration::from_millis(config.link.send_interval_ms);
    let target_frame_duration = config.max_fps.map(|fps| Duration::from_secs_f32(1.0 / fps));
    let mut last_frame_time = Instant::now();
    let mut last_sent = Instant::now();

    info!("Entering update loop...");

    while running.load(Ordering::SeqCst) {
        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame_time).as_secs_f32() * 1000.0;
        last_frame_time = now;

        let packet = latest_pose.read().ok().and_then(|cell| cell.clone());
        let hand = packet.as_ref().and_then(|p| p.primary());

        let view = controller.tick(hand, dt_ms);

        if let Ok(state) = telemetry.read() {
            sink.update(&view, &state);
        }

        // Outbound cadence is wall-time against the last send, not a fixed
        // timer.
        if connected.load(Ordering::SeqCst) && last_sent.elapsed() > send_interval {
            let line = controller.build_command_line();
            if outbound_tx.send(line).is_err() {
                warn!("Link writer gone; dropping outbound command");
            }
            last_sent = Instant::now();
        }

        if let Some(target) = target_frame_duration {
            let elapsed = last_frame_time.elapsed();
            if elapsed < target {
                thread::sleep(target - elapsed);
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}
