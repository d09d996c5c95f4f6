//! Background updater loop for one gauge.
//!
//! Each gauge owns a thread that re-reads its metric at a fixed cadence and
//! posts fresh [`GaugeState`]s over a channel. The render thread consumes
//! the latest state on its own tick; there is no shared mutable coordinate
//! state between the loop and the UI.
//!
//! Lifecycle: Running until the stop flag is set or the metric read fails,
//! then Stopped for good. A failed read ends that one loop only.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::{GaugeKind, GaugeState};
use crate::collector::CollectError;

/// Metric read driving one gauge. Owned by the loop; may keep state
/// between reads (e.g. the CPU delta baseline).
pub type MetricFn = Box<dyn FnMut() -> Result<GaugeState, CollectError> + Send>;

/// Handle to a running updater loop.
///
/// Dropping the handle without calling [`GaugeHandle::shutdown`] leaves the
/// thread to notice the closed channel on its next send and exit.
pub struct GaugeHandle {
    kind: GaugeKind,
    stop: Arc<AtomicBool>,
    rx: Receiver<GaugeState>,
    thread: Option<JoinHandle<()>>,
}

/// Spawns the updater loop for one gauge.
pub fn spawn_gauge(kind: GaugeKind, interval: Duration, mut metric: MetricFn) -> GaugeHandle {
    let stop = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel();

    let loop_stop = Arc::clone(&stop);
    let thread = thread::spawn(move || {
        debug!("{:?} gauge loop started", kind);

        while !loop_stop.load(Ordering::Relaxed) {
            match metric() {
                Ok(state) => {
                    if tx.send(state).is_err() {
                        // Receiver gone, nobody is rendering anymore.
                        break;
                    }
                }
                Err(e) => {
                    warn!("{:?} gauge loop stopping: {}", kind, e);
                    break;
                }
            }

            thread::sleep(interval);
        }

        debug!("{:?} gauge loop stopped", kind);
    });

    GaugeHandle {
        kind,
        stop,
        rx,
        thread: Some(thread),
    }
}

impl GaugeHandle {
    pub fn kind(&self) -> GaugeKind {
        self.kind
    }

    /// Latest posted state, draining anything older.
    pub fn latest(&self) -> Option<GaugeState> {
        self.rx.try_iter().last()
    }

    /// Requests termination. The loop observes the flag at its next
    /// wake-up, bounded by the sleep interval.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Cooperative shutdown: sets the stop flag and waits up to `timeout`
    /// for the loop to finish.
    ///
    /// Returns `true` if the loop acknowledged within the timeout. A loop
    /// stuck inside an OS read is abandoned (`false`) rather than blocking
    /// application exit.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        self.request_stop();

        let Some(thread) = self.thread.take() else {
            return true;
        };

        let deadline = Instant::now() + timeout;
        while !thread.is_finished() {
            if Instant::now() >= deadline {
                warn!("{:?} gauge loop did not stop in time, abandoning", self.kind);
                return false;
            }
            thread::sleep(Duration::from_millis(5));
        }

        let _ = thread.join();
        true
    }
}

impl Drop for GaugeHandle {
    fn drop(&mut self) {
        self.request_stop();
    }
}
