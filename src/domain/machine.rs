use super::money::Price;
use super::options::WashOptions;
use super::phase::Phase;
use crate::error::{Result, WashError};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Upper bound on phases recorded by `run_full_cycle` before the walk is
/// declared non-terminating. The longest legal cycle visits 9.
///
/// Every phase in `advance_phase` has an outgoing edge that moves toward
/// `Idle`, so the guard only trips if that table is broken.
pub const MAX_VISITED_PHASES: usize = 20;

/// Read-only snapshot of the machine, handed to presenters and observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MachineStatus {
    pub revenue: Price,
    pub busy: bool,
    pub options: WashOptions,
    pub phase: Phase,
}

/// State of a single wash tunnel.
///
/// Tracks accumulated revenue, whether a cycle is running, the extras of the
/// running cycle and its current phase. A cycle is started with
/// [`start_cycle`](Self::start_cycle) and then stepped by an external driver
/// through [`advance_phase`](Self::advance_phase) until the machine is idle again.
///
/// When `busy` is false the phase is `Idle` and `options` is all false.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WashStateMachine {
    revenue: Price,
    phase: Phase,
    busy: bool,
    options: WashOptions,
}

impl WashStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn revenue(&self) -> Price {
        self.revenue
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn prewash_by_hand(&self) -> bool {
        self.options.prewash_by_hand
    }

    pub fn dry_by_hand(&self) -> bool {
        self.options.dry_by_hand
    }

    pub fn waxed(&self) -> bool {
        self.options.waxed
    }

    pub fn options(&self) -> WashOptions {
        self.options
    }

    pub fn status(&self) -> MachineStatus {
        MachineStatus {
            revenue: self.revenue,
            busy: self.busy,
            options: self.options,
            phase: self.phase,
        }
    }

    /// Starts a new cycle and charges for it.
    ///
    /// Nothing is mutated when the machine is busy or the options are invalid.
    pub fn start_cycle(&mut self, options: WashOptions) -> Result<Price> {
        if self.busy {
            warn!(?options, phase = ?self.phase, "Rejected start: wash in progress");
            return Err(WashError::Conflict);
        }
        if let Err(e) = options.validate() {
            warn!(?options, "Rejected start: invalid options");
            return Err(e);
        }

        let price = options.price();
        self.phase = Phase::Idle;
        self.busy = true;
        self.options = options;
        self.revenue += price;

        info!(%price, revenue = %self.revenue, ?options, "Wash cycle started");
        Ok(price)
    }

    /// Moves the running cycle one phase forward. Does nothing when idle.
    pub fn advance_phase(&mut self) {
        if !self.busy {
            return;
        }

        let next = match self.phase {
            Phase::Idle => Some(Phase::Charging),
            Phase::Charging if self.options.prewash_by_hand => Some(Phase::HandPrewash),
            Phase::Charging => Some(Phase::Rinsing),
            Phase::HandPrewash => Some(Phase::Rinsing),
            Phase::Rinsing => Some(Phase::Soaping),
            Phase::Soaping => Some(Phase::Rollers),
            Phase::Rollers if self.options.dry_by_hand => Some(Phase::HandDrying),
            Phase::Rollers => Some(Phase::AutoDrying),
            Phase::AutoDrying => None,
            Phase::HandDrying if self.options.waxed => Some(Phase::Waxing),
            Phase::HandDrying => None,
            Phase::Waxing => None,
        };

        match next {
            Some(phase) => {
                debug!(from = ?self.phase, to = ?phase, "Phase advanced");
                self.phase = phase;
            }
            None => self.finish(),
        }
    }

    /// Starts a cycle and steps it to the end, returning every phase visited
    /// including the opening and closing `Idle`.
    pub fn run_full_cycle(&mut self, options: WashOptions) -> Result<Vec<Phase>> {
        self.start_cycle(options)?;
        let mut visited = vec![self.phase];

        while self.busy {
            if visited.len() > MAX_VISITED_PHASES {
                return Err(WashError::RuntimeInvariant {
                    visited: visited.len(),
                });
            }
            self.advance_phase();
            visited.push(self.phase);
        }

        Ok(visited)
    }

    // Revenue is kept across cycles.
    fn finish(&mut self) {
        debug!(from = ?self.phase, to = ?Phase::Idle, "Phase advanced");
        self.phase = Phase::Idle;
        self.busy = false;
        self.options = WashOptions::default();
        info!(revenue = %self.revenue, "Wash cycle finished");
    }
}
