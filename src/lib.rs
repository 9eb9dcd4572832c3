//! waycost - Edge cost model for road-network shortest-path engines
//!
//! Given a directed traversal of a graph edge, or a turn between two edges
//! at a junction, a [`Weighting`] produces the abstract weight the search
//! layer orders and prunes by, and the concrete wall-clock traversal time.
//! Impassable edges and forbidden turns are `+infinity`, a first-class
//! value rather than an error. Weightings are immutable and stateless
//! across calls, so one instance per routing profile serves any number of
//! concurrent queries.
//!
//! Graph storage, attribute encoding, and the search algorithms themselves
//! live in the surrounding engine; they show up here only as the
//! [`DecimalProperty`] and [`TurnCostSource`] collaborator interfaces.

pub mod config;
pub mod edge;
pub mod error;
pub mod properties;
pub mod turns;
pub mod weighting;

pub use config::{build_weighting, Strategy, TurnCostConfig, WeightingConfig};
pub use edge::{EdgeId, EdgeTraversal, NodeId};
pub use error::WeightingError;
pub use properties::{DecimalProperty, DecimalTable};
pub use turns::{NoTurnCosts, StoredTurnCosts, TurnCostProvider, TurnCostSource, TurnCostTable};
pub use weighting::{
    weight_to_millis, DistanceWeighting, Millis, SpeedWeighting, Weight, Weighting,
};
