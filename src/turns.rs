//! Turn costs: the provider contract and the persisted-record boundary.
//!
//! A turn is the triple (from edge, via node, to edge), evaluated on
//! demand and never materialized. The store keeps records for restricted
//! or penalized turns only; everything else is free. A banned turn is
//! `+infinity`, a first-class value the search layer already handles for
//! impassable edges.

use log::debug;
use rustc_hash::FxHashMap;

use crate::edge::{EdgeId, NodeId};
use crate::error::WeightingError;
use crate::weighting::{weight_to_millis, Millis, Weight};

/// Read side of the persisted turn record store.
///
/// Stored costs are in seconds. `f64::INFINITY` marks a banned turn;
/// triples without a record are free.
pub trait TurnCostSource: Send + Sync {
    fn stored_cost(&self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) -> f64;
}

/// In-memory turn record store keyed by the (from, via, to) triple.
#[derive(Debug, Clone)]
pub struct TurnCostTable {
    records: FxHashMap<(EdgeId, NodeId, EdgeId), f64>,
    max_storable: f64,
}

impl TurnCostTable {
    /// `max_storable` caps finite penalties, mirroring what a fixed-width
    /// penalty encoding can hold. Bans are stored as infinity and are not
    /// subject to the cap.
    pub fn new(max_storable: f64) -> Self {
        Self {
            records: FxHashMap::default(),
            max_storable,
        }
    }

    /// Record a finite turn penalty in seconds, clamped to `max_storable`.
    pub fn set_cost(&mut self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId, seconds: f64) {
        self.records.insert(
            (from_edge, via_node, to_edge),
            seconds.min(self.max_storable),
        );
    }

    /// Forbid the turn entirely.
    pub fn ban(&mut self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) {
        self.records
            .insert((from_edge, via_node, to_edge), f64::INFINITY);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn max_storable(&self) -> f64 {
        self.max_storable
    }
}

impl TurnCostSource for TurnCostTable {
    fn stored_cost(&self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) -> f64 {
        self.records
            .get(&(from_edge, via_node, to_edge))
            .copied()
            .unwrap_or(0.0)
    }
}

impl<T: TurnCostSource + ?Sized> TurnCostSource for &T {
    fn stored_cost(&self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) -> f64 {
        (**self).stored_cost(from_edge, via_node, to_edge)
    }
}

impl<T: TurnCostSource + ?Sized> TurnCostSource for std::sync::Arc<T> {
    fn stored_cost(&self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) -> f64 {
        (**self).stored_cost(from_edge, via_node, to_edge)
    }
}

/// Prices a turn for the weighting that holds it.
///
/// A forbidden turn yields `+infinity` weight; an unrestricted turn yields
/// zero. Implementations are read-only and shareable across query threads.
pub trait TurnCostProvider: Send + Sync {
    fn turn_weight(&self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) -> Weight;

    fn turn_millis(&self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) -> Millis;
}

/// The always-free provider. Distinct from "no provider": a weighting
/// built with `NoTurnCosts` still reports `has_turn_costs() == true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTurnCosts;

impl TurnCostProvider for NoTurnCosts {
    fn turn_weight(&self, _from_edge: EdgeId, _via_node: NodeId, _to_edge: EdgeId) -> Weight {
        0.0
    }

    fn turn_millis(&self, _from_edge: EdgeId, _via_node: NodeId, _to_edge: EdgeId) -> Millis {
        0
    }
}

/// Provider backed by a turn record store, with a penalty scale.
///
/// The scale multiplies finite stored costs; bans stay infinite. It must
/// be finite and non-negative so that turn costs can only add to path
/// cost, which keeps the per-distance admissibility bound of the owning
/// weighting valid.
#[derive(Debug, Clone)]
pub struct StoredTurnCosts<T> {
    source: T,
    scale: f64,
}

impl<T: TurnCostSource> StoredTurnCosts<T> {
    pub fn new(source: T, scale: f64) -> Result<Self, WeightingError> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(WeightingError::InvalidTurnScale(scale));
        }
        debug!("turn cost provider with penalty scale {scale}");
        Ok(Self { source, scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl<T: TurnCostSource> TurnCostProvider for StoredTurnCosts<T> {
    fn turn_weight(&self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) -> Weight {
        let stored = self.source.stored_cost(from_edge, via_node, to_edge);
        if stored.is_infinite() {
            return Weight::INFINITY;
        }
        self.scale * stored
    }

    fn turn_millis(&self, from_edge: EdgeId, via_node: NodeId, to_edge: EdgeId) -> Millis {
        // Stored costs are seconds, like edge weights in the speed
        // strategy, so turn time is the scaled weight in milliseconds.
        weight_to_millis(self.turn_weight(from_edge, via_node, to_edge))
    }
}
