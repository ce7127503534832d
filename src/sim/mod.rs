//! Deterministic match simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - No I/O; sound is reported as cues, never played
//! - Both actors updated in a fixed order (player one, then player two)
//! - No rendering or platform dependencies

pub mod geom;
pub mod state;
pub mod step;

pub use geom::AxisAlignedBox;
pub use state::{Actor, Arena, MatchEvent, MatchState, Outcome, Side};
pub use step::{ActorInput, StepInput, StepResult, step};
