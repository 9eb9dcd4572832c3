//! The cost algebra the search layer relies on.
//!
//! A [`Weighting`] turns a directed edge traversal into an abstract weight
//! used to order and prune search states, and independently into a
//! wall-clock traversal time. It also prices turns between two edges at a
//! junction when turn costs are configured. Instances are immutable after
//! construction and hold no per-query state, so one instance serves many
//! concurrent queries.

pub mod distance;
pub mod speed;

pub use distance::DistanceWeighting;
pub use speed::SpeedWeighting;

use crate::edge::{EdgeId, EdgeTraversal, NodeId};

/// Abstract search-state cost. `f64::INFINITY` marks an impassable edge or
/// forbidden turn; the search layer treats it as "do not explore".
pub type Weight = f64;

/// Traversal time in integer milliseconds. `Millis::MAX` is the saturated
/// value for impassable traversals.
pub type Millis = u64;

/// Convert a weight that is interpreted as seconds into milliseconds.
///
/// Infinite weight saturates to `Millis::MAX` instead of producing a
/// non-finite integer; finite weights truncate. The float-to-int cast
/// saturates at the integer range on its own, so oversized finite weights
/// are safe too.
pub fn weight_to_millis(weight: Weight) -> Millis {
    if weight.is_infinite() {
        return Millis::MAX;
    }
    (weight * 1000.0) as Millis
}

/// Cost model contract consumed by the search algorithms.
///
/// Implementations must be deterministic: results depend only on the
/// edge's static data and the direction flag. Edge and node ids are taken
/// on trust; handing over an id the collaborators do not know is a caller
/// bug, not a checked condition (the hot path stays validation-free).
pub trait Weighting: Send + Sync {
    /// Weight of traversing `edge`, reading the reverse-directional
    /// property when `reverse` is set.
    ///
    /// Never negative, never NaN. `+infinity` if and only if the edge is
    /// impassable in that direction.
    fn calc_edge_weight(&self, edge: EdgeTraversal, reverse: bool) -> Weight;

    /// Wall-clock time for traversing `edge`, saturating at `Millis::MAX`
    /// when the edge is impassable.
    fn calc_edge_millis(&self, edge: EdgeTraversal, reverse: bool) -> Millis;

    /// Provable global lower bound on weight per distance unit, across
    /// every edge and direction this weighting could ever evaluate.
    ///
    /// Derived from the accessor's maximum storable value so the bound
    /// also covers edges the search never visits; heuristic search relies
    /// on it to stay admissible.
    fn min_weight_per_distance(&self) -> f64;

    /// Extra weight for turning from `from_edge` onto `to_edge` across
    /// `via_node`. Zero unless a turn cost provider was configured.
    fn calc_turn_weight(&self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) -> Weight {
        let _ = (from_edge, via_node, to_edge);
        0.0
    }

    /// Extra time for the turn, in milliseconds. Zero unless a turn cost
    /// provider was configured.
    fn calc_turn_millis(&self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) -> Millis {
        let _ = (from_edge, via_node, to_edge);
        0
    }

    /// True iff a turn cost provider was supplied at construction. A
    /// capability flag only: individual turns may still be free.
    fn has_turn_costs(&self) -> bool {
        false
    }

    /// Stable strategy identifier, used for logging and dispatch.
    fn name(&self) -> &'static str;
}
