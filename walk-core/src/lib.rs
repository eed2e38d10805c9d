//! Random walk generators in D dimensions.
//!
//! Main components:
//! - [`policy`] — step policies (cubic, triangular and honeycomb lattices,
//!   continuous directions with a chosen step-size distribution).
//! - [`generator`] — [`generator::WalkGenerator`], which draws steps and
//!   accumulates them into walks and ensembles.
//! - [`walk`] — the trajectory type produced by a generator.
//! - [`ensemble`] — endpoint and displacement statistics over many walks.
//! - [`first_passage`] — first-passage time of a biased 1-D walker.
//! - [`fit`] — least-squares linear, exponential and power-law fits.
//! - [`config`] — serializable generator configuration.
//! - [`error`] — the crate error type.

pub mod config;
pub mod ensemble;
pub mod error;
pub mod first_passage;
pub mod fit;
pub mod generator;
pub mod policy;
pub mod walk;

pub use error::{WalkError, WalkResult};
pub use generator::WalkGenerator;
pub use policy::{Magnitude, StepPolicy};
pub use walk::Walk;
