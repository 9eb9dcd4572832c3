//! Speed-based weighting: weight is travel time in seconds.

use log::debug;

use crate::edge::{EdgeId, EdgeTraversal, NodeId};
use crate::error::WeightingError;
use crate::properties::DecimalProperty;
use crate::turns::{NoTurnCosts, TurnCostProvider};
use crate::weighting::{weight_to_millis, Millis, Weight, Weighting};

/// `weight = distance / speed(edge, direction)`.
///
/// Speed is read directionally from the property accessor; a zero speed
/// closes the edge in that direction and yields `+infinity` before any
/// division happens, so a zero-length closed edge is impassable rather
/// than `0/0`. Weight is seconds, which makes `calc_edge_millis` a plain
/// factor-1000 scaling and the admissibility bound `1 / max storable
/// speed`, the fastest any edge could ever be encoded.
#[derive(Debug)]
pub struct SpeedWeighting<S, T = NoTurnCosts> {
    speeds: S,
    turn_costs: Option<T>,
}

impl<S: DecimalProperty> SpeedWeighting<S> {
    /// Weighting without turn costs; turn evaluation is a zero-cost no-op.
    pub fn new(speeds: S) -> Result<Self, WeightingError> {
        Self::build(speeds, None)
    }
}

impl<S: DecimalProperty, T: TurnCostProvider> SpeedWeighting<S, T> {
    /// Weighting with a turn cost provider; `has_turn_costs()` will be
    /// true even if the provider never charges anything.
    pub fn with_turn_costs(speeds: S, turn_costs: T) -> Result<Self, WeightingError> {
        Self::build(speeds, Some(turn_costs))
    }

    fn build(speeds: S, turn_costs: Option<T>) -> Result<Self, WeightingError> {
        let max = speeds.max_storable();
        if !(max > 0.0) || !max.is_finite() {
            return Err(WeightingError::NonPositiveMaxStorable(max));
        }
        debug!(
            "speed weighting: max storable speed {max}, min weight/distance {}, turn costs: {}",
            1.0 / max,
            turn_costs.is_some()
        );
        Ok(Self { speeds, turn_costs })
    }
}

impl<S: DecimalProperty, T: TurnCostProvider> Weighting for SpeedWeighting<S, T> {
    fn calc_edge_weight(&self, edge: EdgeTraversal, reverse: bool) -> Weight {
        let speed = if reverse {
            self.speeds.get_reverse(edge.edge())
        } else {
            self.speeds.get(edge.edge())
        };
        if speed == 0.0 {
            return Weight::INFINITY;
        }
        edge.distance() / speed
    }

    fn calc_edge_millis(&self, edge: EdgeTraversal, reverse: bool) -> Millis {
        weight_to_millis(self.calc_edge_weight(edge, reverse))
    }

    fn min_weight_per_distance(&self) -> f64 {
        1.0 / self.speeds.max_storable()
    }

    fn calc_turn_weight(&self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) -> Weight {
        match &self.turn_costs {
            Some(tc) => tc.turn_weight(from_edge, via_node, to_edge),
            None => 0.0,
        }
    }

    fn calc_turn_millis(&self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) -> Millis {
        match &self.turn_costs {
            Some(tc) => tc.turn_millis(from_edge, via_node, to_edge),
            None => 0,
        }
    }

    fn has_turn_costs(&self) -> bool {
        self.turn_costs.is_some()
    }

    fn name(&self) -> &'static str {
        "speed"
    }
}
