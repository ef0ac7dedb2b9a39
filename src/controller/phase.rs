use serde::Serialize;
use std::fmt;

/// NEMA phase numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Phase {
    /// Left turn, main road, first direction
    Phase1,
    /// Through, main road, first direction
    Phase2,
    /// Left turn, cross road, first direction
    Phase3,
    /// Through, cross road, first direction
    Phase4,
    /// Left turn, main road, second direction
    Phase5,
    /// Through, main road, second direction
    Phase6,
    /// Left turn, cross road, second direction
    Phase7,
    /// Through, cross road, second direction
    Phase8,
}

impl Phase {
    pub const THROUGH: [Phase; 4] = [Phase::Phase2, Phase::Phase4, Phase::Phase6, Phase::Phase8];

    pub fn number(&self) -> u8 {
        match self {
            Phase::Phase1 => 1,
            Phase::Phase2 => 2,
            Phase::Phase3 => 3,
            Phase::Phase4 => 4,
            Phase::Phase5 => 5,
            Phase::Phase6 => 6,
            Phase::Phase7 => 7,
            Phase::Phase8 => 8,
        }
    }

    /// Left-turn phase paired with a through phase
    pub fn left_of(through: Phase) -> Option<Phase> {
        match through {
            Phase::Phase2 => Some(Phase::Phase1),
            Phase::Phase4 => Some(Phase::Phase3),
            Phase::Phase6 => Some(Phase::Phase5),
            Phase::Phase8 => Some(Phase::Phase7),
            _ => None,
        }
    }

    pub fn is_through(&self) -> bool {
        self.number() % 2 == 0
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phase {}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalState {
    Red,
    Yellow,
    Green,
    FlashYellow,
    FlashRed,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControllerState {
    pub current_phase: Phase,
    pub main_state: SignalState,
    pub side_state: SignalState,

    /// Time spent in the current phase
    pub phase_timer: u32,
}

impl ControllerState {
    /// All approaches red, parked on `phase`
    pub fn all_red(phase: Phase) -> Self {
        Self {
            current_phase: phase,
            main_state: SignalState::Red,
            side_state: SignalState::Red,
            phase_timer: 0,
        }
    }
}
