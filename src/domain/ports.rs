use super::machine::MachineStatus;
use async_trait::async_trait;

/// Hook notified while a driver walks a wash cycle.
///
/// Implementations only see read-only snapshots of the machine.
#[async_trait]
pub trait CycleObserver: Send + Sync {
    async fn on_phase(&self, _status: &MachineStatus) {}
    async fn on_cycle_end(&self, _status: &MachineStatus) {}
}

pub type CycleObserverBox = Box<dyn CycleObserver>;

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CycleObserver for NoopObserver {}
