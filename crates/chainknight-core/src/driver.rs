//! Async driver for a [`Dashboard`].
//!
//! Runs the dashboard on the tokio runtime: each [`TimerRequest`] becomes a
//! spawned task that sleeps and then calls [`Dashboard::fire`]. After every
//! change the driver publishes a fresh [`DashboardSnapshot`] on a watch
//! channel for the UI to render.
//!
//! Pending timers are never cancelled explicitly. A timer whose Loading
//! phase is over is discarded by `fire`, which is all cancellation needs.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::dashboard::{Command, Dashboard, DashboardSnapshot, TimerRequest};
use crate::embed::Navigator;
use crate::error::ChainResult;
use crate::storage::KeyValueStore;

pub struct DashboardDriver<S> {
    dashboard: Arc<Mutex<Dashboard<S>>>,
    snapshots: Arc<watch::Sender<DashboardSnapshot>>,
}

impl<S> Clone for DashboardDriver<S> {
    fn clone(&self) -> Self {
        Self {
            dashboard: self.dashboard.clone(),
            snapshots: self.snapshots.clone(),
        }
    }
}

impl<S> PartialEq for DashboardDriver<S> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.dashboard, &other.dashboard)
    }
}

impl<S: KeyValueStore + 'static> DashboardDriver<S> {
    pub fn new(dashboard: Dashboard<S>) -> Self {
        let (tx, _rx) = watch::channel(dashboard.snapshot());
        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
            snapshots: Arc::new(tx),
        }
    }

    /// Run the dashboard's startup open. Must be called on a tokio runtime.
    pub fn start(&self) {
        let timers = {
            let mut dashboard = self.dashboard.lock();
            let timers = dashboard.startup();
            self.publish(dashboard.snapshot());
            timers
        };
        self.schedule(timers);
    }

    /// Apply a command and schedule whatever timers it asks for.
    ///
    /// Must be called on a tokio runtime.
    pub fn dispatch(&self, command: Command) -> ChainResult<()> {
        let timers = {
            let mut dashboard = self.dashboard.lock();
            let timers = dashboard.handle(command)?;
            self.publish(dashboard.snapshot());
            timers
        };
        self.schedule(timers);
        Ok(())
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.snapshots.subscribe()
    }

    pub fn open_external(&self, id: &str, navigator: &dyn Navigator) -> ChainResult<()> {
        self.dashboard.lock().open_external(id, navigator)
    }

    fn publish(&self, snapshot: DashboardSnapshot) {
        self.snapshots.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        });
    }

    fn schedule(&self, timers: Vec<TimerRequest>) {
        for timer in timers {
            let driver = self.clone();
            tokio::spawn(async move {
                tokio::time::sleep(timer.delay).await;
                driver.fire(timer);
            });
        }
    }

    fn fire(&self, timer: TimerRequest) {
        let next = {
            let mut dashboard = self.dashboard.lock();
            let next = dashboard.fire(&timer);
            self.publish(dashboard.snapshot());
            next
        };
        self.schedule(next);
    }
}
