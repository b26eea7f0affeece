//! Fixture builders shared by unit, property, and downstream crate tests.

use rulegate_types::{
    Artifact, ArtifactHandle, Coordinate, CoordinateKind, EvaluationResult, PolicyEvaluation,
    Severity,
};
use std::sync::Arc;

/// Minimal artifact backed by a plain coordinate list.
#[derive(Debug)]
pub struct FixtureArtifact {
    pub coordinates: Vec<Coordinate>,
    pub fallback: String,
}

impl Artifact for FixtureArtifact {
    fn coordinates(&self) -> Vec<Coordinate> {
        self.coordinates.clone()
    }

    fn pretty_print(&self) -> String {
        self.fallback.clone()
    }
}

/// Artifact with a single Maven coordinate.
pub fn maven_artifact(group: &str, name: &str, version: &str) -> ArtifactHandle {
    Arc::new(FixtureArtifact {
        coordinates: vec![Coordinate::new(
            CoordinateKind::Maven,
            Some(group),
            name,
            Some(version),
        )],
        fallback: format!("{group}:{name}"),
    })
}

/// Artifact with a single generic coordinate, labeled `pkg:generic/{name}`.
pub fn generic_artifact(name: &str) -> ArtifactHandle {
    Arc::new(FixtureArtifact {
        coordinates: vec![Coordinate::new(CoordinateKind::Generic, None, name, None)],
        fallback: name.to_string(),
    })
}

/// Artifact without any coordinate; label derivation falls back to
/// the generic textual representation.
pub fn bare_artifact(fallback: &str) -> ArtifactHandle {
    Arc::new(FixtureArtifact {
        coordinates: Vec::new(),
        fallback: fallback.to_string(),
    })
}

pub fn result(
    id: &str,
    severity: Severity,
    description: &str,
    flagged: Vec<ArtifactHandle>,
) -> EvaluationResult {
    EvaluationResult {
        id: id.to_string(),
        description: description.to_string(),
        severity,
        flagged,
    }
}

pub fn evaluation(results: Vec<EvaluationResult>) -> PolicyEvaluation {
    PolicyEvaluation { results }
}
