use crate::domain::machine::{MachineStatus, WashStateMachine};
use crate::domain::money::Price;
use crate::domain::order::{CycleReport, WashOrder};
use crate::domain::ports::{CycleObserverBox, NoopObserver};
use crate::error::Result;
use tokio::sync::Mutex;
use tracing::instrument;

/// Owns the tunnel's state machine and drives orders through it.
///
/// The machine sits behind a single `tokio::sync::Mutex` that is held for the
/// whole of a cycle, so concurrent callers are served one wash at a time and a
/// start can never interleave with another caller's phase advances.
pub struct WashTunnel {
    machine: Mutex<WashStateMachine>,
    observer: CycleObserverBox,
}

impl Default for WashTunnel {
    fn default() -> Self {
        Self::new(Box::new(NoopObserver))
    }
}

impl WashTunnel {
    /// Creates an idle tunnel with zero revenue.
    ///
    /// # Arguments
    ///
    /// * `observer` - Notified of every visited phase and of each cycle end.
    pub fn new(observer: CycleObserverBox) -> Self {
        Self {
            machine: Mutex::new(WashStateMachine::new()),
            observer,
        }
    }

    /// Washes one car from start to finish.
    ///
    /// Rejected orders (busy tunnel, wax without hand-drying) are not charged
    /// and the error is returned unchanged.
    #[instrument(skip_all, fields(order = order.order))]
    pub async fn process_order(&self, order: WashOrder) -> Result<CycleReport> {
        let mut machine = self.machine.lock().await;

        // No await until the machine is idle again, so a dropped future can
        // never leave the tunnel busy.
        let options = order.options();
        let price = options.price();
        let phases = machine.run_full_cycle(options)?;
        let status = machine.status();

        let final_step = phases.len() - 1;
        for (step, &phase) in phases.iter().enumerate() {
            let snapshot = if step == final_step {
                status
            } else {
                MachineStatus {
                    busy: true,
                    options,
                    phase,
                    ..status
                }
            };
            self.observer.on_phase(&snapshot).await;
        }
        self.observer.on_cycle_end(&status).await;

        Ok(CycleReport {
            order: order.order,
            options,
            price,
            phases,
            revenue: status.revenue,
        })
    }

    pub async fn status(&self) -> MachineStatus {
        self.machine.lock().await.status()
    }

    /// Consumes the tunnel and returns everything it earned.
    pub fn into_revenue(self) -> Price {
        self.machine.into_inner().revenue()
    }
}
