//! Link driver framing tests over an in-memory duplex transport.

use common::Telemetry;
use handlink_d::link;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc::unbounded_channel;
use tokio::time::{sleep, timeout};

#[tokio::test]
async fn drains_one_line_per_chunk() {
    let (mut client, server) = tokio::io::duplex(1024);
    let (server_read, _server_write) = tokio::io::split(server);
    let telemetry = Arc::new(RwLock::new(Telemetry::default()));

    let reader_task = tokio::spawn(link::read_loop(Box::new(server_read), telemetry.clone()));

    // Two complete lines in a single chunk: only the first may decode.
    client
        .write_all(b"B: 10 M: PCINT1 O: 1,0,0\nB: 20 M: PCINT2 O: 0,1,0\n")
        .await
        .unwrap();
    sleep(Duration::from_millis(100)).await;
    {
        let state = telemetry.read().unwrap();
        assert_eq!(state.brightness, 10);
        assert_eq!(state.mode, "PCINT1");
        assert_eq!(state.led_on, [true, false, false]);
    }

    // The buffered second line decodes once the next chunk arrives.
    client.write_all(b"B").await.unwrap();
    sleep(Duration::from_millis(100)).await;
    {
        let state = telemetry.read().unwrap();
        assert_eq!(state.brightness, 20);
        assert_eq!(state.mode, "PCINT2");
        assert_eq!(state.led_on, [false, true, false]);
    }

    // Peer hang-up ends the read loop.
    drop(client);
    timeout(Duration::from_secs(1), reader_task)
        .await
        .expect("read loop should exit on EOF")
        .unwrap();
}

#[tokio::test]
async fn malformed_lines_leave_telemetry_untouched() {
    let (mut client, server) = tokio::io::duplex(1024);
    let (server_read, _server_write) = tokio::io::split(server);
    let telemetry = Arc::new(RwLock::new(Telemetry::default()));

    let reader_task = tokio::spawn(link::read_loop(Box::new(server_read), telemetry.clone()));

    client.write_all(b"B: nonsense O: 9\n").await.unwrap();
    sleep(Duration::from_millis(100)).await;
    assert_eq!(*telemetry.read().unwrap(), Telemetry::default());

    // A valid line afterwards still decodes.
    client.write_all(b"B: 5 M: Default O: 0,0,1\n").await.unwrap();
    sleep(Duration::from_millis(100)).await;
    {
        let state = telemetry.read().unwrap();
        assert_eq!(state.brightness, 5);
        assert_eq!(state.mode, "Default");
        assert_eq!(state.led_on, [false, false, true]);
    }

    drop(client);
    timeout(Duration::from_secs(1), reader_task)
        .await
        .expect("read loop should exit on EOF")
        .unwrap();
}

#[tokio::test]
async fn write_failure_drops_the_line_and_keeps_draining() {
    let (client, server) = tokio::io::duplex(64);
    let (_server_read, server_write) = tokio::io::split(server);
    // Peer gone before anything is written: every write fails.
    drop(client);

    let (tx, rx) = unbounded_channel::<String>();
    let writer_task = tokio::spawn(link::write_loop(Box::new(server_write), rx));

    tx.send("2000,500,2000,PCINT1\n".to_string()).unwrap();
    tx.send("2000,500,2000\n".to_string()).unwrap();
    drop(tx);

    // The loop must survive the failed writes and end on channel close.
    timeout(Duration::from_secs(1), writer_task)
        .await
        .expect("write loop should exit when the channel closes")
        .unwrap();
}
