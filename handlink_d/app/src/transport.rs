//! Transport backends for the device link. The link driver only ever sees a
//! pair of boxed async halves; which wire they ride is decided here from the
//! config.

use anyhow::{Context, Result};
use common::config::{LinkConfig, LinkMode};
use log::info;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;

pub type LinkReader = Box<dyn AsyncRead + Unpin + Send>;
pub type LinkWriter = Box<dyn AsyncWrite + Unpin + Send>;

/// Open the configured transport. Failures are surfaced to the caller; there
/// is no retry here.
pub async fn open(config: &LinkConfig) -> Result<(LinkReader, LinkWriter)> {
    match config.mode {
        LinkMode::Tcp => {
            info!("Connecting to {}...", config.tcp_address);
            let stream = TcpStream::connect(&config.tcp_address)
                .await
                .with_context(|| format!("Failed to connect to {}", config.tcp_address))?;
            let (reader, writer) = stream.into_split();
            info!("Link up via TCP");
            Ok((Box::new(reader), Box::new(writer)))
        }
        #[cfg(feature = "serial")]
        LinkMode::Serial => {
            use tokio_serial::SerialPortBuilderExt;

            info!(
                "Opening {} at {} baud...",
                config.serial_port, config.baud_rate
            );
            let stream = tokio_serial::new(config.serial_port.as_str(), config.baud_rate)
                .open_native_async()
                .with_context(|| format!("Failed to open serial port {}", config.serial_port))?;
            let (reader, writer) = tokio::io::split(stream);
            info!("Link up via serial");
            Ok((Box::new(reader), Box::new(writer)))
        }
        #[cfg(not(feature = "serial"))]
        LinkMode::Serial => {
            anyhow::bail!("serial transport requested but the `serial` feature is not compiled in")
        }
    }
}
