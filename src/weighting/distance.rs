//! Distance-based weighting: weight is geometric length, time is not.

use log::debug;

use crate::edge::{EdgeId, EdgeTraversal, NodeId};
use crate::error::WeightingError;
use crate::properties::DecimalProperty;
use crate::turns::{NoTurnCosts, TurnCostProvider};
use crate::weighting::{weight_to_millis, Millis, Weight, Weighting};

/// `weight = distance`, independent of how fast the edge is.
///
/// The weight no longer encodes time, but `calc_edge_millis` still has to
/// report wall-clock traversal time, so the speed property stays a
/// required collaborator. Directionality is preserved: an edge closed in
/// one direction (zero speed) is impassable there under this strategy
/// too. The admissibility bound is exactly 1: every passable edge weighs
/// precisely its distance.
#[derive(Debug)]
pub struct DistanceWeighting<S, T = NoTurnCosts> {
    speeds: S,
    turn_costs: Option<T>,
}

impl<S: DecimalProperty> DistanceWeighting<S> {
    pub fn new(speeds: S) -> Result<Self, WeightingError> {
        Self::build(speeds, None)
    }
}

impl<S: DecimalProperty, T: TurnCostProvider> DistanceWeighting<S, T> {
    pub fn with_turn_costs(speeds: S, turn_costs: T) -> Result<Self, WeightingError> {
        Self::build(speeds, Some(turn_costs))
    }

    fn build(speeds: S, turn_costs: Option<T>) -> Result<Self, WeightingError> {
        let max = speeds.max_storable();
        if !(max > 0.0) || !max.is_finite() {
            return Err(WeightingError::NonPositiveMaxStorable(max));
        }
        debug!(
            "distance weighting, turn costs: {}",
            turn_costs.is_some()
        );
        Ok(Self { speeds, turn_costs })
    }

    fn directional_speed(&self, edge: EdgeTraversal, reverse: bool) -> f64 {
        if reverse {
            self.speeds.get_reverse(edge.edge())
        } else {
            self.speeds.get(edge.edge())
        }
    }
}

impl<S: DecimalProperty, T: TurnCostProvider> Weighting for DistanceWeighting<S, T> {
    fn calc_edge_weight(&self, edge: EdgeTraversal, reverse: bool) -> Weight {
        if self.directional_speed(edge, reverse) == 0.0 {
            return Weight::INFINITY;
        }
        edge.distance()
    }

    fn calc_edge_millis(&self, edge: EdgeTraversal, reverse: bool) -> Millis {
        let speed = self.directional_speed(edge, reverse);
        if speed == 0.0 {
            return Millis::MAX;
        }
        weight_to_millis(edge.distance() / speed)
    }

    fn min_weight_per_distance(&self) -> f64 {
        1.0
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
        "distance"
    }
}
