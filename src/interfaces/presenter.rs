//! Human-readable rendering of the tunnel state.

use crate::domain::machine::MachineStatus;
use crate::domain::phase::Phase;
use crate::domain::ports::CycleObserver;
use async_trait::async_trait;
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Mutex;

const RULE: &str = "----------------------------------------";

pub fn phase_label(phase: Phase) -> String {
    let name = match phase {
        Phase::Idle => "Idle",
        Phase::Charging => "Charging",
        Phase::HandPrewash => "Hand prewash",
        Phase::Rinsing => "Rinsing",
        Phase::Soaping => "Soaping",
        Phase::Rollers => "Rollers",
        Phase::AutoDrying => "Automatic drying",
        Phase::HandDrying => "Hand drying",
        Phase::Waxing => "Waxing",
    };
    format!("{} - {}", phase.code(), name)
}

pub fn render_status(status: &MachineStatus) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Revenue: {} €", status.revenue);
    let _ = writeln!(out, "Busy: {}", status.busy);
    let _ = writeln!(out, "Hand prewash: {}", status.options.prewash_by_hand);
    let _ = writeln!(out, "Hand drying: {}", status.options.dry_by_hand);
    let _ = writeln!(out, "Waxing: {}", status.options.waxed);
    let _ = writeln!(out, "Phase: {}", phase_label(status.phase));
    let _ = writeln!(out, "{RULE}");
    out
}

/// Observer that prints each visited phase and a status block per cycle.
///
/// Write failures are ignored: the console is a best-effort view and must not
/// interrupt a wash.
pub struct ConsolePresenter<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn emit(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(text.as_bytes());
        }
    }
}

#[async_trait]
impl<W: Write + Send> CycleObserver for ConsolePresenter<W> {
    async fn on_phase(&self, status: &MachineStatus) {
        self.emit(&format!("-> Phase: {}\n", phase_label(status.phase)));
    }

    async fn on_cycle_end(&self, status: &MachineStatus) {
        self.emit(&render_status(status));
    }
}
