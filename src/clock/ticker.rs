//! Background tick that re-runs a callback at a fixed interval.

use std::ops::ControlFlow;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

/// Handle to a running tick loop. Dropping it stops the loop.
pub struct Ticker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl Ticker {
    /// Run `on_tick` immediately and then every `interval` until the
    /// callback breaks or the ticker is stopped. The callback receives the
    /// zero-based tick number.
    pub fn spawn<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(u64) -> ControlFlow<()> + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            let mut tick = 0u64;
            loop {
                let flow = on_tick(tick);
                tick += 1;
                if flow.is_break() {
                    break;
                }
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!(ticks = tick, "ticker stopped");
            tick
        });
        Self { stop: Some(stop_tx), handle: Some(handle) }
    }

    /// Signal the loop to stop and wait for it. Returns the number of ticks run.
    pub fn stop(mut self) -> u64 {
        self.shutdown(true)
    }

    /// Wait for the callback to end the loop on its own.
    pub fn wait(mut self) -> u64 {
        self.shutdown(false)
    }

    fn shutdown(&mut self, signal: bool) -> u64 {
        if signal {
            if let Some(stop) = self.stop.take() {
                let _ = stop.send(());
            }
        }
        let ticks = self.handle.take().and_then(|h| h.join().ok()).unwrap_or(0);
        self.stop.take();
        ticks
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown(true);
    }
}
