// Periodic refresh of panel snapshots
//
// Each mounted panel gets one tokio task that owns the panel exclusively and
// publishes `Arc` snapshots over a watch channel. Ticks run sequentially on
// that task, so they never overlap.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::error::DashboardResult;

/// Something that can produce a first snapshot and then successive ones
pub trait Refresh: Send + 'static {
    type Snapshot: Send + Sync + 'static;

    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Snapshot published as soon as the panel is mounted
    fn mount(&mut self) -> Self::Snapshot;

    /// Snapshot published on each tick
    fn tick(&mut self, current: &Self::Snapshot) -> Self::Snapshot;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Running,
    Paused,
    Stopped,
}

/// Owner-side handle for a mounted panel.
///
/// `unmount` stops the task and waits for it, so nothing is published after it
/// returns. Dropping the handle aborts the task instead.
pub struct RefreshHandle<S> {
    name: &'static str,
    snapshots: watch::Receiver<Arc<S>>,
    control: watch::Sender<Control>,
    task: Option<JoinHandle<()>>,
}

/// Mount `refresher`, publishing its first snapshot immediately.
///
/// With `period` set (and non-zero) a task is spawned that ticks every
/// `period`, starting one period after mount; this requires a tokio runtime.
/// With `None` the panel is mount-only and no task exists.
pub fn mount<R: Refresh>(mut refresher: R, period: Option<Duration>) -> RefreshHandle<R::Snapshot> {
    let name = refresher.name();
    let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(refresher.mount()));
    let (control_tx, control_rx) = watch::channel(Control::Running);

    let task = match period.filter(|p| !p.is_zero()) {
        Some(period) => {
            info!("⏱️  Mounted {} panel, refreshing every {:?}", name, period);
            Some(tokio::spawn(run_refresh_loop(refresher, period, snapshot_tx, control_rx)))
        }
        None => {
            info!("📌 Mounted {} panel (static)", name);
            None
        }
    };

    RefreshHandle {
        name,
        snapshots: snapshot_rx,
        control: control_tx,
        task,
    }
}

async fn run_refresh_loop<R: Refresh>(
    mut refresher: R,
    period: Duration,
    snapshots: watch::Sender<Arc<R::Snapshot>>,
    mut control: watch::Receiver<Control>,
) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks: u64 = 0;

    loop {
        tokio::select! {
            biased;

            changed = control.changed() => {
                // Sender gone means the handle was dropped
                if changed.is_err() || *control.borrow() == Control::Stopped {
                    break;
                }
            }

            _ = interval.tick() => {
                if *control.borrow() == Control::Paused {
                    continue;
                }

                let current = Arc::clone(&snapshots.borrow());
                let next = refresher.tick(&current);
                snapshots.send_replace(Arc::new(next));

                ticks += 1;
                debug!("🔄 {} tick #{}", refresher.name(), ticks);
            }
        }
    }

    debug!("🛑 {} refresh loop stopped after {} ticks", refresher.name(), ticks);
}

impl<S> RefreshHandle<S> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Latest published snapshot
    pub fn current(&self) -> Arc<S> {
        Arc::clone(&self.snapshots.borrow())
    }

    /// Receiver that is notified on every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<Arc<S>> {
        self.snapshots.clone()
    }

    /// Whether a refresh task is still attached
    pub fn is_refreshing(&self) -> bool {
        self.task.as_ref().map_or(false, |task| !task.is_finished())
    }

    /// Skip ticks until `resume` is called; the last snapshot stays current
    pub fn pause(&self) {
        if *self.control.borrow() == Control::Running {
            self.control.send_replace(Control::Paused);
            info!("⏸️  Paused {} panel", self.name);
        }
    }

    pub fn resume(&self) {
        if *self.control.borrow() == Control::Paused {
            self.control.send_replace(Control::Running);
            info!("▶️  Resumed {} panel", self.name);
        }
    }

    pub fn is_paused(&self) -> bool {
        *self.control.borrow() == Control::Paused
    }

    /// Stop refreshing and wait for the task to finish
    pub async fn unmount(mut self) -> DashboardResult<()> {
        self.control.send_replace(Control::Stopped);

        if let Some(task) = self.task.take() {
            task.await?;
        }

        info!("👋 Unmounted {} panel", self.name);
        Ok(())
    }
}

impl<S> Drop for RefreshHandle<S> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        value: u32,
    }

    impl Refresh for Counter {
        type Snapshot = u32;

        fn name(&self) -> &'static str {
            "counter"
        }

        fn mount(&mut self) -> u32 {
            self.value
        }

        fn tick(&mut self, current: &u32) -> u32 {
            self.value = current + 1;
            self.value
        }
    }

    #[test]
    fn test_static_mount_needs_no_runtime() {
        let handle = mount(Counter { value: 7 }, None);
        assert_eq!(*handle.current(), 7);
        assert!(!handle.is_refreshing());
    }

    #[test]
    fn test_zero_period_is_static() {
        let handle = mount(Counter { value: 1 }, Some(Duration::ZERO));
        assert!(!handle.is_refreshing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_advance_snapshot() {
        let handle = mount(Counter { value: 0 }, Some(Duration::from_secs(5)));
        assert_eq!(*handle.current(), 0);

        time::sleep(Duration::from_millis(10_500)).await;
        assert_eq!(*handle.current(), 2);

        handle.unmount().await.expect("unmount should succeed");
    }
}
