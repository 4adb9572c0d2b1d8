//! Shot feasibility and tuning calculators for a hub-style goal opening.
//!
//! The root crate re-exports the workspace members under stable module
//! names so multiple front-ends (CLI, plotting, future transports) share
//! a single import path.

pub use shot_ballistics as ballistics;
pub use shot_config as config;
pub use shot_export as export;
pub use shot_survey as survey;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
