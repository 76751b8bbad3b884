//! Auto-Save Debounce
//!
//! Coalesces bursts of edits into a single save. Every `touch()` restarts the
//! quiet window; the callback fires once the window elapses without another
//! touch.
//!
//! # Architecture
//!
//! ```text
//! set_field() ── touch() ──┐
//!                          ▼
//!              ┌───────────────────────┐
//!              │ mpsc channel          │
//!              └──────────┬────────────┘
//!                         ▼
//!              ┌───────────────────────┐
//!              │ Debounce task         │  re-arms on every touch
//!              │ (tokio::spawn)        │
//!              └──────────┬────────────┘
//!                         ▼
//!                      fire()
//! ```
//!
//! The callback runs on the debounce task and must not block. Hosts usually
//! forward it as an event into their own loop and call
//! [`super::Wizard::flush_auto_save`] there.

use std::future::pending;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace};

/// Default quiet window before a save fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Touch,
    Cancel,
}

/// Handle to a running debounce task. Dropping the handle stops the task
/// without firing a pending save.
#[derive(Debug)]
pub struct AutoSaveScheduler {
    tx: mpsc::UnboundedSender<Signal>,
    handle: JoinHandle<()>,
}

impl AutoSaveScheduler {
    /// Spawn the debounce task on the current tokio runtime.
    pub fn spawn<F>(window: Duration, fire: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(window, rx, fire));
        debug!(window_ms = window.as_millis() as u64, "Auto-save scheduler started");
        Self { tx, handle }
    }

    /// Record an edit, restarting the quiet window.
    pub fn touch(&self) {
        let _ = self.tx.send(Signal::Touch);
    }

    /// Drop any pending save.
    pub fn cancel(&self) {
        let _ = self.tx.send(Signal::Cancel);
    }
}

impl Drop for AutoSaveScheduler {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run<F>(window: Duration, mut rx: mpsc::UnboundedReceiver<Signal>, fire: F)
where
    F: Fn() + Send + 'static,
{
    let mut deadline: Option<Instant> = None;

    loop {
        let timer = async move {
            match deadline {
                Some(at) => sleep_until(at).await,
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            signal = rx.recv() => match signal {
                Some(Signal::Touch) => {
                    deadline = Some(Instant::now() + window);
                    trace!("Auto-save window restarted");
                }
                Some(Signal::Cancel) => deadline = None,
                None => break,
            },
            _ = timer => {
                deadline = None;
                debug!("Auto-save window elapsed");
                fire();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::time::sleep;

    fn counting(window: Duration) -> (AutoSaveScheduler, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let fired = count.clone();
        let scheduler = AutoSaveScheduler::spawn(window, move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
        (scheduler, count)
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_touches_fire_once() {
        let (scheduler, count) = counting(DEFAULT_DEBOUNCE);

        for _ in 0..5 {
            scheduler.touch();
            sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(count.load(Ordering::SeqCst), 0);

        sleep(Duration::from_secs(3)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_fire_separately() {
        let (scheduler, count) = counting(Duration::from_millis(500));

        scheduler.touch();
        sleep(Duration::from_secs(1)).await;
        scheduler.touch();
        sleep(Duration::from_secs(1)).await;

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_save() {
        let (scheduler, count) = counting(Duration::from_millis(500));

        scheduler.touch();
        sleep(Duration::from_millis(100)).await;
        scheduler.cancel();
        sleep(Duration::from_secs(2)).await;

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_fire_without_touch() {
        let (_scheduler, count) = counting(Duration::from_millis(100));
        sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
