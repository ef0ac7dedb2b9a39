//! Controller entry point consuming a validated intersection.
//!
//! Phase timing and signal-head actuation are not implemented here; this
//! module selects the per-type strategy and produces the initial state.

pub mod intersection_controller;
pub mod phase;
pub mod strategy;

pub use intersection_controller::Controller;
pub use phase::{ControllerState, Phase, SignalState};
pub use strategy::{
    ControllerStrategy, Strategy, StraightLeft, StraightLeftRight, StraightOnly, StraightRight,
};
