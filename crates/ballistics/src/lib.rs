//! Ballistic feasibility solvers for a hub-style rectangular goal opening.
//!
//! Every operation here is a pure, synchronous function of its inputs: no
//! shared state, no I/O, no panics for in-domain infeasibility. Infeasible
//! angle/position combinations come back as zeros, sentinels, or empty
//! bands rather than errors.
//!
//! All angles are radians except the envelope's returned angle samples,
//! which are degrees to match the plotting contract.

pub mod budget;
pub mod classify;
pub mod envelope;
pub mod quadrature;
pub mod speed;
pub mod trajectory;

pub use budget::{PositionBudget, SpeedBudget, position_budget, speed_budget};
pub use classify::{Outcome, classify};
pub use envelope::{Envelope, compute_envelope};
pub use speed::SpeedCurve;
pub use trajectory::{Trajectory, simulate};
