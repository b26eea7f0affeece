use rulegate_types::{ArtifactHandle, CoordinateKind};

/// Coordinate kind preferred when deriving the canonical label.
pub const PREFERRED_COORDINATE_KIND: CoordinateKind = CoordinateKind::Maven;

/// Canonical display label for an artifact.
///
/// Prioritized lookup over the artifact's capabilities: the preferred
/// coordinate kind if exposed, else the first coordinate of any kind, else
/// the generic textual representation.
pub fn canonical_label(artifact: &ArtifactHandle) -> String {
    artifact
        .coordinate_of_kind(PREFERRED_COORDINATE_KIND)
        .or_else(|| artifact.coordinates().into_iter().next())
        .map(|coordinate| coordinate.canonicalize())
        .unwrap_or_else(|| artifact.pretty_print())
}
