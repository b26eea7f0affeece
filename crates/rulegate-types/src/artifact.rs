use crate::coordinate::{Coordinate, CoordinateKind};
use std::fmt;
use std::sync::Arc;

/// Capability view of an inspected artifact.
///
/// The core never constructs or mutates artifacts; it only derives display
/// labels, so the surface is the minimum needed for prioritized lookup:
/// typed coordinates plus a generic fallback representation.
pub trait Artifact: fmt::Debug + Send + Sync {
    /// All coordinates the artifact exposes, in producer-supplied order.
    fn coordinates(&self) -> Vec<Coordinate>;

    /// The coordinate of a specific kind, if the artifact exposes one.
    fn coordinate_of_kind(&self, kind: CoordinateKind) -> Option<Coordinate> {
        self.coordinates().into_iter().find(|c| c.kind == kind)
    }

    /// Generic textual representation for artifacts without coordinates.
    fn pretty_print(&self) -> String;
}

/// Shared handle to an externally owned artifact.
pub type ArtifactHandle = Arc<dyn Artifact>;
