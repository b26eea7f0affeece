//! Deterministic text rendering for reporter messages and the failure digest.

#![forbid(unsafe_code)]

mod digest;
mod model;
mod violation;

pub use digest::{MAX_ARTIFACTS_IN_DIGEST, MAX_RESULTS_PER_ARTIFACT, render_digest};
pub use model::RenderableViolation;
pub use violation::render_violation;
