use crate::error::WashError;
use serde::{Deserialize, Serialize};

/// One step of the wash sequence.
///
/// The discriminants are the raw phase codes used at the edges of the system.
/// Raw codes only enter through `TryFrom<u8>`, which rejects anything outside
/// `0..=8`, so a `Phase` value is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Phase {
    #[default]
    Idle = 0,
    Charging = 1,
    HandPrewash = 2,
    Rinsing = 3,
    Soaping = 4,
    Rollers = 5,
    AutoDrying = 6,
    HandDrying = 7,
    Waxing = 8,
}

impl Phase {
    pub const ALL: [Phase; 9] = [
        Phase::Idle,
        Phase::Charging,
        Phase::HandPrewash,
        Phase::Rinsing,
        Phase::Soaping,
        Phase::Rollers,
        Phase::AutoDrying,
        Phase::HandDrying,
        Phase::Waxing,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Charging => "Charging",
            Phase::HandPrewash => "HandPrewash",
            Phase::Rinsing => "Rinsing",
            Phase::Soaping => "Soaping",
            Phase::Rollers => "Rollers",
            Phase::AutoDrying => "AutoDrying",
            Phase::HandDrying => "HandDrying",
            Phase::Waxing => "Waxing",
        }
    }
}

impl TryFrom<u8> for Phase {
    type Error = WashError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Phase::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(WashError::InvalidState(code))
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase.code()
    }
}
