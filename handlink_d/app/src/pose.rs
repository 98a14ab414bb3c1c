//! Pose receiver: a plain UDP loop on its own thread. Each datagram is one
//! JSON [`PosePacket`]; the latest packet wholesale-replaces the shared cell.
//! An empty `hands` list is the explicit no-hand signal, and the last packet
//! stands until the source sends another.

use anyhow::{Context, Result};
use api::PosePacket;
use log::{debug, error, info};
use std::io::ErrorKind;
use std::net::UdpSocket;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::Duration;

pub fn spawn(
    listen_port: u16,
    latest: Arc<RwLock<Option<PosePacket>>>,
    running: Arc<AtomicBool>,
) -> Result<thread::JoinHandle<()>> {
    let addr = format!("0.0.0.0:{}", listen_port);
    let socket =
        UdpSocket::bind(&addr).with_context(|| format!("Failed to bind pose socket on {}", addr))?;
    // Short timeout so the loop can notice shutdown.
    socket.set_read_timeout(Some(Duration::from_millis(250)))?;
    info!("Listening for hand pose packets on {}", addr);

    let handle = thread::spawn(move || {
        let mut buf = [0u8; 65535];
        while running.load(Ordering::SeqCst) {
            match socket.recv_from(&mut buf) {
                Ok((amt, src)) => match serde_json::from_slice::<PosePacket>(&buf[..amt]) {
                    Ok(packet) => {
                        if let Ok(mut cell) = latest.write() {
                            *cell = Some(packet);
                        }
                    }
                    Err(e) => {
                        debug!("Discarding malformed pose packet from {}: {}", src, e);
                    }
                },
                Err(e) if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::TimedOut => {
                    continue;
                }
                Err(e) => {
                    error!("Pose socket error: {}", e);
                }
            }
        }
    });
    Ok(handle)
}
