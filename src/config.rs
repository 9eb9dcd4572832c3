//! Declarative weighting configuration.
//!
//! One weighting is built per routing profile and then shared across
//! queries; profiles describe the cost model declaratively and hand over
//! the storage-owned collaborators at build time.

use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::WeightingError;
use crate::properties::DecimalProperty;
use crate::turns::{StoredTurnCosts, TurnCostTable};
use crate::weighting::{DistanceWeighting, SpeedWeighting, Weighting};

/// Cost strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Speed,
    Distance,
}

/// Turn cost section of a profile. Present means "turn costs on".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnCostConfig {
    /// Penalty scale applied to finite stored turn costs.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl Default for TurnCostConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
        }
    }
}

/// Cost model section of a routing profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightingConfig {
    pub strategy: Strategy,
    #[serde(default)]
    pub turn_costs: Option<TurnCostConfig>,
}

/// Assemble a shareable weighting from a config and the storage-owned
/// collaborators.
///
/// `turn_table` may be supplied regardless of the config; turn costs are
/// only wired in when the config asks for them. Asking for turn costs
/// without a table is a configuration error.
pub fn build_weighting(
    config: &WeightingConfig,
    speeds: Arc<dyn DecimalProperty>,
    turn_table: Option<Arc<TurnCostTable>>,
) -> Result<Box<dyn Weighting>, WeightingError> {
    let turn_costs = match &config.turn_costs {
        Some(tc) => {
            let table = turn_table.ok_or(WeightingError::TurnTableMissing)?;
            Some(StoredTurnCosts::new(table, tc.scale)?)
        }
        None => None,
    };

    let weighting: Box<dyn Weighting> = match (config.strategy, turn_costs) {
        (Strategy::Speed, Some(tc)) => Box::new(SpeedWeighting::with_turn_costs(speeds, tc)?),
        (Strategy::Speed, None) => Box::new(SpeedWeighting::new(speeds)?),
        (Strategy::Distance, Some(tc)) => Box::new(DistanceWeighting::with_turn_costs(speeds, tc)?),
        (Strategy::Distance, None) => Box::new(DistanceWeighting::new(speeds)?),
    };

    info!(
        "built '{}' weighting (turn costs: {})",
        weighting.name(),
        weighting.has_turn_costs()
    );
    Ok(weighting)
}
