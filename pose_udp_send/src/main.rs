mod synth;

use anyhow::Result;
use api::PosePacket;
use log::debug;
use std::net::UdpSocket;
use std::thread;
use std::time::Duration;

const SEND_HZ: u64 = 30;
/// How long each step of the demo cycle is held, comfortably past the 1 s
/// confirmation and 750 ms calibration thresholds.
const STEP_MS: u64 = 2000;

fn packet_for(name: &str) -> Result<PosePacket> {
    let frame = match name {
        "fist" => synth::fist(),
        "palm" => synth::open_palm(),
        "emergency" => synth::three_finger(),
        "thumbs-up" => synth::thumbs_up(),
        "thumbs-down" => synth::thumbs_down(),
        "pinch" => synth::pinch(),
        "none" => return Ok(PosePacket::default()),
        other => anyhow::bail!(
            "unknown gesture {:?} (try fist, palm, emergency, thumbs-up, thumbs-down, pinch, none)",
            other
        ),
    };
    Ok(PosePacket { hands: vec![frame] })
}

/// Fist command, thumbs-up command, palette on, calibrate, palette off,
/// thumbs-down command, hand lost.
fn demo_cycle() -> Result<Vec<(String, PosePacket)>> {
    [
        "fist",
        "thumbs-up",
        "palm",
        "pinch",
        "palm",
        "thumbs-down",
        "none",
    ]
    .iter()
    .map(|name| Ok((name.to_string(), packet_for(name)?)))
    .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let target = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "127.0.0.1:9200".to_string());
    let script = args.get(2).cloned().unwrap_or_else(|| "cycle".to_string());

    let steps = if script == "cycle" {
        demo_cycle()?
    } else {
        vec![(script.clone(), packet_for(&script)?)]
    };

    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(&target)?;
    println!("Streaming '{}' hand poses to {} at {} Hz...", script, target, SEND_HZ);

    let packets_per_step = (STEP_MS * SEND_HZ / 1000).max(1);
    loop {
        for (name, packet) in &steps {
            println!("-> {}", name);
            let payload = serde_json::to_vec(packet)?;
            for _ in 0..packets_per_step {
                if let Err(e) = socket.send(&payload) {
                    debug!("send failed: {}", e);
                }
                thread::sleep(Duration::from_millis(1000 / SEND_HZ));
            }
        }
    }
}
