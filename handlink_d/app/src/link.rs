//! Link driver: pumps bytes between the transport and the protocol codec.
//!
//! The read side accumulates chunks in a text buffer and drains at most one
//! line per received chunk; the remainder stays buffered until more data
//! arrives. The write side drains outbound lines from an in-process channel.
//! The pending mode token was already consumed when a line was built, so a
//! failed write is only logged.

use common::config::LinkConfig;
use common::{protocol, Telemetry};
use log::{debug, error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::transport::{self, LinkReader, LinkWriter};

/// Read loop: decode chunks, drain one line per chunk into the telemetry
/// cell. Exits on end-of-stream or a read error.
pub async fn read_loop(mut reader: LinkReader, telemetry: Arc<RwLock<Telemetry>>) {
    let mut pending = String::new();
    let mut chunk = [0u8; 256];

    loop {
        match reader.read(&mut chunk).await {
            Ok(0) => {
                info!("Link closed by peer");
                break;
            }
            Ok(n) => {
                pending.push_str(&String::from_utf8_lossy(&chunk[..n]));
                if let Some(pos) = pending.find('\n') {
                    let line = pending[..pos].trim().to_string();
                    pending = pending[pos + 1..].to_string();

                    if let Ok(mut state) = telemetry.write() {
                        if protocol::decode_telemetry_line(&line, &mut state) {
                            debug!("Telemetry: {:?}", *state);
                        } else if !line.is_empty() {
                            debug!("Discarding unrecognized line: {:?}", line);
                        }
                    }
                }
            }
            Err(e) => {
                error!("Link read failed: {}", e);
                break;
            }
        }
    }
}

/// Write loop: push each outbound line to the transport. A failed write drops
/// the line and keeps going.
pub async fn write_loop(mut writer: LinkWriter, mut outbound: UnboundedReceiver<String>) {
    while let Some(line) = outbound.recv().await {
        if let Err(e) = writer.write_all(line.as_bytes()).await {
            error!("Link write failed: {}", e);
        }
    }
}

/// Run the link on its own thread with a dedicated runtime. `connected`
/// flips to true once the transport is open; on open failure the daemon
/// simply runs unlinked.
pub fn spawn(
    config: LinkConfig,
    telemetry: Arc<RwLock<Telemetry>>,
    outbound: UnboundedReceiver<String>,
    connected: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
        rt.block_on(async move {
            match transport::open(&config).await {
                Ok((reader, writer)) => {
                    connected.store(true, Ordering::SeqCst);
                    tokio::join!(read_loop(reader, telemetry), write_loop(writer, outbound));
                }
                Err(e) => {
                    warn!("Link unavailable: {:#}. Running without a device.", e);
                }
            }
        });
    })
}
